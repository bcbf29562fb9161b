//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Search,                      // 列表页焦点，默认在搜索框
//!     view: ViewController(Loading { ticket: 1 }),    // core 状态机，初始为加载中
//!     listing: ListingState { selected: 0, region_index: 0 },
//!     pending_load: Some(1),                          // 首次加载已排队
//!     status_message: None,                           // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(t) = app.pending_load.take() {      // Update 层请求了加载
//!         loader.start(t)                                 // 交给 backend 在后台执行
//!     }
//!     while let Some((t , r)) = loader.try_recv() {   // 取回已完成的加载
//!         update::update(&mut app , CatalogLoaded)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!                                                     // 若用户按键，返回 Some(Event::Key(...))，否则为 None
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::CatalogLoader;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, loader: &mut CatalogLoader) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 发起排队中的加载
        if let Some(ticket) = app.pending_load.take() {
            loader.start(ticket);
        }

        // 4. 取回后台加载结果
        while let Some((ticket, result)) = loader.try_recv() {
            update::update(app, AppMessage::CatalogLoaded { ticket, result });
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 7. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
