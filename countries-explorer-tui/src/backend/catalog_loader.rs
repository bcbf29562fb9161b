//! 目录加载器
//!
//! 在后台 tokio 运行时中执行 `Catalog::load`，结果通过通道送回主循环。
//! 主循环是同步的，每轮用 `try_recv` 取结果，不会阻塞渲染。

use std::sync::Arc;

use countries_explorer_core::{Catalog, CatalogSource, CoreResult, LoadTicket};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 一次加载的结果
pub type LoadOutcome = (LoadTicket, CoreResult<Catalog>);

/// 后台目录加载器
pub struct CatalogLoader {
    runtime: Runtime,
    source: Arc<dyn CatalogSource>,
    tx: UnboundedSender<LoadOutcome>,
    rx: UnboundedReceiver<LoadOutcome>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("catalog-loader")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            runtime,
            source,
            tx,
            rx,
        })
    }

    /// 发起一次加载，`ticket` 原样随结果返回
    pub fn start(&self, ticket: LoadTicket) {
        log::debug!("Starting catalog load #{ticket}");
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = Catalog::load(source.as_ref()).await;
            // 接收端随 App 退出而关闭时丢弃结果
            let _ = tx.send((ticket, result));
        });
    }

    /// 取一条已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<LoadOutcome> {
        self.rx.try_recv().ok()
    }
}
