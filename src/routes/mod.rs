//! HTTP handlers and the shared response mapping.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::api::ApiResponse;
use crate::routes::api::{create_client, delete_client, list_clients, update_client};
use crate::routes::main::show_index;
use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Maps a service failure onto the `{message}` error body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => {
            log::warn!("{message}");
            HttpResponse::NotFound().json(ApiResponse::message(message))
        }
        ServiceError::Validation(message) => {
            log::warn!("Rejected client data: {message}");
            HttpResponse::BadRequest().json(ApiResponse::message(message))
        }
        ServiceError::Internal(message) => {
            log::error!("Unexpected failure: {message}");
            HttpResponse::InternalServerError().json(ApiResponse::message(message))
        }
    }
}

/// Rejects malformed JSON bodies with the same envelope as other errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ApiResponse::message(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Registers every route of the service. The caller provides the
/// repository as `web::Data<InMemoryRepository>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(show_index)
        .service(list_clients)
        .service(create_client)
        .service(update_client)
        .service(delete_client);
}
