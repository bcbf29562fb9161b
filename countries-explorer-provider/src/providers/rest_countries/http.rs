//! REST Countries HTTP 请求方法

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::Country;

use super::{PROVIDER_NAME, RestCountriesProvider};

impl RestCountriesProvider {
    /// 执行 GET 请求，返回状态码与响应文本
    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<(u16, String)> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        HttpUtils::execute_request(request, PROVIDER_NAME, "GET", &url).await
    }

    /// `/all` 的 `fields=` 查询参数，空投影不带参数
    pub(crate) fn fields_query(fields: &[String]) -> Vec<(&'static str, String)> {
        if fields.is_empty() {
            Vec::new()
        } else {
            vec![("fields", fields.join(","))]
        }
    }

    /// 是否需要第二次 `/all` 请求补齐详情字段
    ///
    /// 未投影的 `/all` 已包含全部字段。
    pub(crate) fn needs_detail_fetch(&self) -> bool {
        !self.all_fields.is_empty() && !self.detail_fields.is_empty()
    }

    /// `/name/{name}` 路径（名称需 URL 编码）
    pub(crate) fn name_path(name: &str) -> String {
        format!("/name/{}", urlencoding::encode(name))
    }
}

/// 解析 `/all` 响应为原始 JSON 记录
pub(crate) fn interpret_all_response(status: u16, body: &str) -> Result<Vec<Map<String, Value>>> {
    if !(200..300).contains(&status) {
        log::error!("[{PROVIDER_NAME}] /all failed with HTTP {status}");
        return Err(HttpUtils::status_error(status, body, PROVIDER_NAME));
    }
    HttpUtils::parse_json(body, PROVIDER_NAME)
}

/// 按 `cca3` 把详情投影合并进主记录
///
/// 只补主记录缺失的字段；没有 `cca3` 或找不到对应主记录的详情记录被忽略。
pub(crate) fn merge_details(records: &mut [Map<String, Value>], details: Vec<Map<String, Value>>) {
    let mut by_code: HashMap<String, Map<String, Value>> = details
        .into_iter()
        .filter_map(|detail| {
            let code = detail.get("cca3")?.as_str()?.to_string();
            Some((code, detail))
        })
        .collect();

    for record in records.iter_mut() {
        let Some(code) = record.get("cca3").and_then(Value::as_str) else {
            continue;
        };
        let Some(detail) = by_code.remove(code) else {
            continue;
        };
        for (key, value) in detail {
            record.entry(key).or_insert(value);
        }
    }
}

/// 把原始记录转换为 [`Country`]
pub(crate) fn into_countries(records: Vec<Map<String, Value>>) -> Result<Vec<Country>> {
    records
        .into_iter()
        .map(|record| serde_json::from_value(Value::Object(record)))
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| {
            log::error!("[{PROVIDER_NAME}] record conversion failed: {e}");
            ProviderError::ParseError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            }
        })
}

/// 解析 `/name/{name}` 响应
///
/// 404 与空数组都表示没有匹配，返回 `Ok(None)`。
pub(crate) fn interpret_name_response(status: u16, body: &str) -> Result<Option<Country>> {
    if status == 404 {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        log::error!("[{PROVIDER_NAME}] /name failed with HTTP {status}");
        return Err(HttpUtils::status_error(status, body, PROVIDER_NAME));
    }
    let matches: Vec<Country> = HttpUtils::parse_json(body, PROVIDER_NAME)?;
    Ok(matches.into_iter().next())
}
