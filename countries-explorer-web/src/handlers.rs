//! `/countries` 路由

use actix_web::http::Method;
use actix_web::{HttpResponse, web};
use tracing_attributes::instrument;

use crate::AppState;
use crate::error::GatewayError;

/// Register the gateway routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/countries")
            .route(web::get().to(list_countries))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/countries/{name}")
            .route(web::get().to(country_by_name))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

/// `GET /countries`: every record, as the provider sent them.
#[instrument(skip_all)]
pub async fn list_countries(state: web::Data<AppState>) -> Result<HttpResponse, GatewayError> {
    let countries = state.provider.fetch_all().await?;
    tracing::info!(count = countries.len(), "Country list served");
    Ok(HttpResponse::Ok().json(countries))
}

/// `GET /countries/{name}`: the provider's first match, or 404.
#[instrument(skip_all, fields(name = %name.as_str()))]
pub async fn country_by_name(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    match state.provider.fetch_by_name(&name).await? {
        Some(country) => Ok(HttpResponse::Ok().json(country)),
        None => {
            tracing::info!("Country not found");
            Err(GatewayError::NotFound)
        }
    }
}

/// CORS preflight; the headers come from [`cors_headers`](crate::middleware::cors_headers).
async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
