use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::{ApiResponse, ClientData, ClientsQuery};
use crate::forms::client::ClientForm;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::api as api_service;

#[get("/clients")]
pub async fn list_clients(
    params: web::Query<ClientsQuery>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match api_service::list_clients(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let message = if data.clients.is_empty() {
                "No clients found"
            } else {
                "Successfully found clients"
            };
            HttpResponse::Ok().json(ApiResponse::with_data(message, data))
        }
        Err(err) => error_response(err),
    }
}

#[post("/clients")]
pub async fn create_client(
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    match api_service::create_client(repo.get_ref(), form) {
        Ok(client) => HttpResponse::Created().json(ApiResponse::with_data(
            "Successfully created client",
            ClientData { client },
        )),
        Err(err) => error_response(err),
    }
}

#[put("/clients/{client_id}")]
pub async fn update_client(
    client_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder {
    match api_service::update_client(repo.get_ref(), &client_id, form) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match api_service::delete_client(repo.get_ref(), &client_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
