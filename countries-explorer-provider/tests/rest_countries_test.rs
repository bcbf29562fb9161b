//! REST Countries Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! COUNTRIES_LIVE_TESTS=1 cargo test -p countries-explorer-provider --test rest_countries_test -- --ignored --nocapture
//! ```

mod common;

use common::{live_provider, spawn_stub, stub_provider, unreachable_provider};
use countries_explorer_provider::ProviderError;

const PRIMARY: &str = r#"[
    {"name": {"common": "France", "official": "French Republic"}, "cca3": "FRA", "region": "Europe", "population": 67391582, "area": 551695.0},
    {"name": {"common": "Antarctica", "official": "Antarctica"}, "cca3": "ATA", "region": "Antarctic"}
]"#;

const DETAILS: &str = r#"[
    {"cca3": "FRA", "idd": {"root": "+3", "suffixes": ["3"]}, "maps": {"googleMaps": "https://goo.gl/maps/g7QxxSFsWyTPKuzd7"}, "flag": "🇫🇷"},
    {"cca3": "ATA", "idd": {}, "maps": {"googleMaps": "https://goo.gl/maps/kyBuJriu4itiXank7"}, "flag": "🇦🇶"}
]"#;

/// 请求行中带有详情投影（`idd`）的是第二次 `/all` 请求
fn is_detail_request(request_line: &str) -> bool {
    request_line.contains("idd")
}

// ============ 离线测试 ============

#[tokio::test]
async fn test_unreachable_fetch_all_is_upstream_error() {
    let provider = require_some!(unreachable_provider(), "创建 provider 失败");
    let result = provider.fetch_all().await;
    assert!(
        matches!(
            &result,
            Err(ProviderError::NetworkError { .. } | ProviderError::Timeout { .. })
        ),
        "不可达的上游应返回网络错误: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_fetch_by_name_is_error_not_none() {
    let provider = require_some!(unreachable_provider(), "创建 provider 失败");
    let result = provider.fetch_by_name("france").await;
    assert!(result.is_err(), "连接失败不能当作 NotFound: {result:?}");
}

#[tokio::test]
async fn test_fetch_all_merges_detail_projection() {
    let base_url = spawn_stub(|line| {
        if is_detail_request(line) {
            (200, DETAILS)
        } else {
            (200, PRIMARY)
        }
    })
    .await;
    let provider = require_some!(stub_provider(base_url), "创建 provider 失败");
    let countries = require_ok!(provider.fetch_all().await, "fetch_all 调用失败");

    let codes: Vec<_> = countries.iter().map(|c| c.cca3.as_str()).collect();
    assert_eq!(codes, ["FRA", "ATA"], "应保持主投影顺序");

    let france = &countries[0];
    let idd = require_some!(france.idd.as_ref(), "合并后应有 idd");
    assert_eq!(idd.root.as_deref(), Some("+3"));
    let maps = require_some!(france.maps.as_ref(), "合并后应有 maps");
    assert!(maps.google_maps.is_some());
    assert_eq!(france.flag.as_deref(), Some("🇫🇷"));
    assert_eq!(france.population, Some(67_391_582));
    assert_eq!(countries[1].area, None);
}

#[tokio::test]
async fn test_fetch_all_fails_when_detail_projection_fails() {
    let base_url = spawn_stub(|line| {
        if is_detail_request(line) {
            (503, r#"{"message":"unavailable"}"#)
        } else {
            (200, PRIMARY)
        }
    })
    .await;
    let provider = require_some!(stub_provider(base_url), "创建 provider 失败");
    let result = provider.fetch_all().await;
    assert!(
        matches!(&result, Err(ProviderError::UpstreamStatus { status: 503, .. })),
        "详情请求失败时不应返回部分数据: {result:?}"
    );
}

// ============ 在线测试 ============

#[tokio::test]
#[ignore = "integration test: requires network access and COUNTRIES_LIVE_TESTS"]
async fn test_live_fetch_all() {
    skip_unless_env!("COUNTRIES_LIVE_TESTS");

    let provider = require_some!(live_provider(), "创建 provider 失败");
    let countries = require_ok!(provider.fetch_all().await, "fetch_all 调用失败");
    assert!(countries.len() > 200, "国家数量过少: {}", countries.len());

    let mut codes: Vec<_> = countries.iter().map(|c| c.cca3.as_str()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), countries.len(), "cca3 应唯一");

    println!("✓ fetch_all 测试通过，共 {} 个国家", countries.len());
}

#[tokio::test]
#[ignore = "integration test: requires network access and COUNTRIES_LIVE_TESTS"]
async fn test_live_fetch_by_name() {
    skip_unless_env!("COUNTRIES_LIVE_TESTS");

    let provider = require_some!(live_provider(), "创建 provider 失败");
    let found = require_ok!(provider.fetch_by_name("france").await, "fetch_by_name 调用失败");
    let country = require_some!(found, "应能找到 France");
    assert_eq!(country.cca3, "FRA");

    println!("✓ fetch_by_name 测试通过: {}", country.name.official);
}

#[tokio::test]
#[ignore = "integration test: requires network access and COUNTRIES_LIVE_TESTS"]
async fn test_live_fetch_by_name_not_found() {
    skip_unless_env!("COUNTRIES_LIVE_TESTS");

    let provider = require_some!(live_provider(), "创建 provider 失败");
    let found = require_ok!(
        provider.fetch_by_name("Wakanda").await,
        "无匹配时不应返回错误"
    );
    assert!(found.is_none(), "Wakanda 不应存在: {found:?}");

    println!("✓ fetch_by_name NotFound 测试通过");
}
