//! 共享测试工具和辅助函数

#![allow(dead_code, clippy::expect_used)]

use std::sync::Arc;

use countries_explorer_provider::{CountryProvider, ProviderConfig, create_provider};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_unless_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 指向真实 REST Countries API 的 provider
pub fn live_provider() -> Option<Arc<dyn CountryProvider>> {
    let mut config = ProviderConfig::default();
    if let Ok(base_url) = std::env::var("RESTCOUNTRIES_BASE_URL") {
        config.base_url = base_url;
    }
    create_provider(&config).ok()
}

/// 指向不可达地址的 provider（端口 1 上没有服务）
pub fn unreachable_provider() -> Option<Arc<dyn CountryProvider>> {
    let config = ProviderConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        ..ProviderConfig::default()
    };
    create_provider(&config).ok()
}

/// 本地桩服务：按请求行（含查询串）返回 `(状态码, 响应体)`，每个连接只处理一个请求
pub async fn spawn_stub<F>(respond: F) -> String
where
    F: Fn(&str) -> (u16, &'static str) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("读取本地地址失败");
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let respond = Arc::clone(&respond);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                }
                let head = String::from_utf8_lossy(&buf[..read]);
                let request_line = head.lines().next().unwrap_or_default().to_string();
                let (status, body) = respond(&request_line);
                let response = format!(
                    "HTTP/1.1 {status} STUB\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

/// 指向本地桩服务的 provider
pub fn stub_provider(base_url: String) -> Option<Arc<dyn CountryProvider>> {
    let config = ProviderConfig {
        base_url,
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        ..ProviderConfig::default()
    };
    create_provider(&config).ok()
}
