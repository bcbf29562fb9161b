//! 测试辅助模块
//!
//! 提供 mock 实现和国家数据工厂方法。

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use countries_explorer_provider::{Country, CountryName, Currency, Flags, Idd, Maps};
use serde_json::Map;

use crate::error::CoreResult;
use crate::traits::CatalogSource;

// ===== MockCatalogSource =====

pub struct MockCatalogSource {
    result: CoreResult<Vec<Country>>,
    calls: AtomicUsize,
}

impl MockCatalogSource {
    pub fn with_countries(countries: Vec<Country>) -> Self {
        Self {
            result: Ok(countries),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: crate::error::CoreError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> CoreResult<Vec<Country>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ===== 数据工厂 =====

/// 只带名称、地区和首都的最小国家记录
pub fn country(cca3: &str, common: &str, official: &str, region: &str, capitals: &[&str]) -> Country {
    Country {
        name: CountryName {
            common: common.to_string(),
            official: official.to_string(),
            extra: Map::new(),
        },
        cca3: cca3.to_string(),
        region: (!region.is_empty()).then(|| region.to_string()),
        subregion: None,
        capital: (!capitals.is_empty())
            .then(|| capitals.iter().map(ToString::to_string).collect()),
        population: None,
        area: None,
        currencies: None,
        languages: None,
        flags: None,
        flag: None,
        idd: None,
        maps: None,
        extra: Map::new(),
    }
}

/// 字段齐全的法国
pub fn france() -> Country {
    let mut c = country("FRA", "France", "French Republic", "Europe", &["Paris"]);
    c.subregion = Some("Western Europe".to_string());
    c.population = Some(67_391_582);
    c.area = Some(551_695.0);
    c.currencies = Some(BTreeMap::from([(
        "EUR".to_string(),
        Currency {
            name: "Euro".to_string(),
            symbol: Some("€".to_string()),
        },
    )]));
    c.languages = Some(BTreeMap::from([("fra".to_string(), "French".to_string())]));
    c.flags = Some(Flags {
        png: Some("https://flagcdn.com/w320/fr.png".to_string()),
        svg: Some("https://flagcdn.com/fr.svg".to_string()),
        alt: Some("The flag of France".to_string()),
    });
    c.flag = Some("🇫🇷".to_string());
    c.idd = Some(Idd {
        root: Some("+3".to_string()),
        suffixes: Some(vec!["3".to_string()]),
    });
    c.maps = Some(Maps {
        google_maps: Some("https://goo.gl/maps/g7QxxSFsWyTPKuzd7".to_string()),
        open_street_maps: None,
    });
    c
}

pub fn brazil() -> Country {
    let mut c = country(
        "BRA",
        "Brazil",
        "Federative Republic of Brazil",
        "Americas",
        &["Brasília"],
    );
    c.population = Some(212_559_409);
    c.area = Some(8_515_767.0);
    c
}

/// FRA / BRA / JPN / ZAF / ATA，按此顺序
pub fn sample_countries() -> Vec<Country> {
    vec![
        france(),
        brazil(),
        country("JPN", "Japan", "Japan", "Asia", &["Tokyo"]),
        country(
            "ZAF",
            "South Africa",
            "Republic of South Africa",
            "Africa",
            &["Pretoria", "Bloemfontein", "Cape Town"],
        ),
        country("ATA", "Antarctica", "Antarctica", "Antarctic", &[]),
    ]
}

// ===== 一次性 HTTP 服务 =====

/// 在随机端口上应答一次固定响应，返回 base URL
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        // 读到请求头结束即可，GET 没有请求体
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}
