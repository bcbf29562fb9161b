//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有 IO。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod catalog_loader;     // 后台加载国家目录
//!         mod config_service;     // 配置文件（JSON）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、目录加载（CatalogLoader）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     CatalogLoader 持有一个 tokio 运行时和一个 `CatalogSource`
//!     （正常运行时是指向 Gateway 的 `GatewayClient`）。
//!
//!         start(ticket)   在运行时中执行 Catalog::load，立即返回
//!         try_recv()      主循环每轮调用，取出已完成的 (ticket, 结果)
//!
//!     ticket 由 core 的 ViewController 发放。过期 ticket 的结果
//!     会被 ViewController 丢弃，所以这里不需要取消旧任务。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/countries-explorer/config.json
//!
//!         {
//!             "gatewayUrl": "http://127.0.0.1:5008",
//!             "language": "en-US",
//!             "numberLocale": "en-US",
//!             "theme": "dark"
//!         }
//!
//!     环境变量 COUNTRIES_GATEWAY_URL 覆盖 gatewayUrl。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层写入 app.pending_load
//!         ↓
//!     主循环取出 ticket，调用 CatalogLoader::start
//!         ↓
//!     GatewayClient 请求 Gateway 的 GET /countries
//!         ↓
//!     主循环 try_recv 得到结果，转成 AppMessage::CatalogLoaded
//!         ↓
//!     Update 层交给 ViewController::complete_load
//!         ↓
//!     View 层重新渲染
//!

mod catalog_loader;
mod config_service;

pub use catalog_loader::CatalogLoader;
pub use config_service::{AppConfig, ConfigService, GATEWAY_URL_ENV, LocalConfigService};
