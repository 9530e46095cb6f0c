//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// `json_limit` caps JSON request bodies in bytes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(json_limit)
            .error_handler(json_error),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post)),
            ),
    );
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            AppError::PayloadTooLarge(err.to_string())
        }
        _ => AppError::BadRequest(err.to_string()),
    }
    .into()
}
