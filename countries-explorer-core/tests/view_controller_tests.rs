#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the listing/detail workflow of `ViewController`.

use async_trait::async_trait;
use countries_explorer_core::{
    Catalog, CatalogSource, CoreError, CoreResult, Country, CountryDetails, FilterState,
    LoadStart, NumberFormat, Screen, ViewController, ViewState,
};
use serde_json::json;

fn record(cca3: &str, common: &str, official: &str, region: &str, capital: &[&str]) -> Country {
    let mut value = json!({
        "name": { "common": common, "official": official },
        "cca3": cca3,
        "region": region,
        "population": 1000,
        "area": 10.0,
    });
    if !capital.is_empty() {
        value["capital"] = json!(capital);
    }
    serde_json::from_value(value).expect("valid country record")
}

fn france_and_brazil() -> Vec<Country> {
    vec![
        record("FRA", "France", "French Republic", "Europe", &["Paris"]),
        record("BRA", "Brazil", "Federative Republic of Brazil", "Americas", &["Brasília"]),
    ]
}

fn world() -> Vec<Country> {
    vec![
        record("FRA", "France", "French Republic", "Europe", &["Paris"]),
        record("BRA", "Brazil", "Federative Republic of Brazil", "Americas", &["Brasília"]),
        record("DEU", "Germany", "Federal Republic of Germany", "Europe", &["Berlin"]),
        record("JPN", "Japan", "Japan", "Asia", &["Tokyo"]),
        record("PRY", "Paraguay", "Republic of Paraguay", "Americas", &["Asunción"]),
        record("ATA", "Antarctica", "Antarctica", "Antarctic", &[]),
    ]
}

struct StaticSource(CoreResult<Vec<Country>>);

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_catalog(&self) -> CoreResult<Vec<Country>> {
        self.0.clone()
    }
}

async fn loaded(countries: Vec<Country>) -> ViewController {
    let mut vc = ViewController::new();
    let ticket = vc.current_ticket().expect("new controller is loading");
    let result = Catalog::load(&StaticSource(Ok(countries))).await;
    assert!(vc.complete_load(ticket, result));
    vc
}

fn visible_codes(vc: &ViewController) -> Vec<String> {
    vc.visible().iter().map(|c| c.cca3.clone()).collect()
}

// ===== Scenarios =====

#[tokio::test]
async fn search_and_region_scenario() {
    let mut vc = loaded(france_and_brazil()).await;

    assert!(vc.set_search_term("par"));
    assert_eq!(visible_codes(&vc), ["FRA"]);

    assert!(vc.set_search_term(""));
    assert!(vc.set_region(Some("Americas".to_string())));
    assert_eq!(visible_codes(&vc), ["BRA"]);

    assert!(vc.set_region(None));
    assert!(vc.set_search_term("zz"));
    assert!(vc.visible().is_empty());
    assert!(vc.has_no_results());
    assert_eq!(vc.screen(), Some(&Screen::Listing));
}

#[tokio::test]
async fn unreachable_gateway_fails_instead_of_empty_catalog() {
    let mut vc = ViewController::new();
    let result = Catalog::load(&StaticSource(Err(CoreError::NetworkError(
        "Could not reach http://127.0.0.1:5008/countries".to_string(),
    ))))
    .await;
    assert!(vc.complete_load(1, result));

    assert!(matches!(vc.state(), ViewState::Failed { message } if message.contains("Could not reach")));
    assert!(vc.catalog().is_none());
    assert!(!vc.has_no_results());

    // 重试后成功
    let ticket = vc.retry().expect("retry from failed");
    assert_eq!(vc.begin_load(), LoadStart::InFlight(ticket));
    assert!(vc.complete_load(ticket, Ok(Catalog::from_countries(world()))));
    assert_eq!(vc.visible().len(), 6);
}

#[tokio::test]
async fn gateway_error_message_reaches_failed_state() {
    let mut vc = ViewController::new();
    let result = Catalog::load(&StaticSource(Err(CoreError::GatewayStatus {
        status: 500,
        message: "[rest-countries] Request timeout: 30s".to_string(),
    })))
    .await;
    vc.complete_load(1, result);
    assert_eq!(
        vc.error_message(),
        Some("Gateway returned HTTP 500: [rest-countries] Request timeout: 30s")
    );
}

// ===== Properties =====

#[tokio::test]
async fn empty_filter_shows_full_catalog_in_order() {
    let vc = loaded(world()).await;
    assert_eq!(visible_codes(&vc), ["FRA", "BRA", "DEU", "JPN", "PRY", "ATA"]);
}

#[tokio::test]
async fn each_region_filter_only_yields_that_region() {
    let mut vc = loaded(world()).await;
    let regions = vc.regions();
    assert_eq!(regions, ["Americas", "Antarctic", "Asia", "Europe"]);

    let mut union = Vec::new();
    for region in regions {
        vc.set_region(Some(region.clone()));
        assert!(vc.visible().iter().all(|c| c.region_name() == region));
        union.extend(visible_codes(&vc));
    }
    union.sort();

    let mut all: Vec<String> = world().into_iter().map(|c| c.cca3).collect();
    all.sort();
    assert_eq!(union, all);
}

#[tokio::test]
async fn filtered_order_follows_catalog_order() {
    let mut vc = loaded(world()).await;
    vc.set_region(Some("Americas".to_string()));
    assert_eq!(visible_codes(&vc), ["BRA", "PRY"]);

    vc.set_region(None);
    vc.set_search_term("PAR");
    // Paris (capital) and Paraguay (name)
    assert_eq!(visible_codes(&vc), ["FRA", "PRY"]);
}

#[tokio::test]
async fn select_then_back_restores_filter() {
    let mut vc = loaded(world()).await;
    vc.set_search_term("republic");
    vc.set_region(Some("Europe".to_string()));
    let before: FilterState = vc.filter().clone();
    let visible_before = visible_codes(&vc);

    assert!(vc.select("DEU"));
    assert_eq!(
        vc.screen(),
        Some(&Screen::Detail {
            cca3: "DEU".to_string()
        })
    );
    assert_eq!(vc.selected().map(|c| c.name.common.as_str()), Some("Germany"));

    assert!(vc.back());
    assert_eq!(vc.filter(), &before);
    assert!(vc.selected().is_none());
    assert_eq!(visible_codes(&vc), visible_before);
}

#[tokio::test]
async fn detail_renders_placeholders_for_sparse_record() {
    let mut vc = loaded(world()).await;
    vc.select("ATA");
    let details = CountryDetails::new(vc.selected().unwrap(), &NumberFormat::for_locale("de-DE"));
    assert_eq!(details.capital, "N/A");
    assert_eq!(details.population, "1.000");
    assert_eq!(details.area, "10 km²");
}
