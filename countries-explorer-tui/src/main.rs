//! Countries Explorer TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与目录加载 (`backend/`)
//!
//!
//! main.rs
//! Countries Explorer TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()      // 读取配置，COUNTRIES_GATEWAY_URL 可覆盖网关地址
//!     set_language() / set_theme()    // 应用语言和主题
//!     CatalogLoader::new()            // 创建后台加载器（指向 Gateway）
//!     init_terminal()                 // 初始化终端
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen)?
//!             - 切换到 备用屏幕
//!         · 返回 Terminal 对象
//!
//!
//!     App:new()               // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use countries_explorer_core::GatewayClient;

use backend::{CatalogLoader, ConfigService, GATEWAY_URL_ENV, LocalConfigService};
use i18n::{Language, set_language};
use util::{init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;
    config.apply_gateway_override(std::env::var(GATEWAY_URL_ENV).ok());

    // 2. 应用语言和主题
    if let Some(language) = Language::from_code(&config.language) {
        set_language(language);
    }
    set_theme(config.theme);

    // 3. 创建后台加载器
    let client = GatewayClient::new(&config.gateway_url)?;
    let mut loader = CatalogLoader::new(Arc::new(client))?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(&config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut loader);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 返回结果
    result
}

