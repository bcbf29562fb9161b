use async_trait::async_trait;

use crate::error::Result;
use crate::types::Country;

/// 国家数据源 Trait
///
/// Two read operations against an external country data source. Implementations
/// perform exactly one outbound call per invocation: no retries, no caching.
#[async_trait]
pub trait CountryProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取全部国家
    ///
    /// Records are returned in provider order.
    async fn fetch_all(&self) -> Result<Vec<Country>>;

    /// 按名称查询国家
    ///
    /// Matching (partial, case-insensitive) follows the provider's semantics;
    /// the first match is returned. `Ok(None)` means the provider reported no
    /// match, which is a normal outcome rather than a failure.
    async fn fetch_by_name(&self, name: &str) -> Result<Option<Country>>;
}
