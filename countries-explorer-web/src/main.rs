use actix_web::{App, HttpServer, web};
use anyhow::Context;
use countries_explorer_provider::create_provider;
use countries_explorer_web::{AppState, GatewayConfig, RequestId, configure, cors_headers, logging};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::load()?;
    let _log_guard = logging::init(&config.log)?;

    let provider = create_provider(&config.provider).context("Failed to create country provider")?;
    tracing::info!(
        provider = provider.id(),
        base_url = %config.provider.base_url,
        "Country provider ready"
    );

    let state = web::Data::new(AppState::new(provider));
    let workers = config.workers();
    let bind = (config.server.host.clone(), config.server.port);

    tracing::info!(host = %bind.0, port = bind.1, workers, "Starting gateway");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .wrap(RequestId)
            .configure(configure)
    })
    .workers(workers)
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("Gateway server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}
