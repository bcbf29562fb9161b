//! tracing 初始化

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

const LOG_FILE_PREFIX: &str = "countries-explorer-web.log";

/// Install the global subscriber.
///
/// `log` records from the provider crate are bridged into tracing. The
/// returned guard flushes the non-blocking writer on drop, so keep it alive
/// for the whole process.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (writer, guard) = match &config.dir {
        Some(dir) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX,
        )),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.dir.is_none()),
            )
            .try_init()?;
    }

    Ok(guard)
}
