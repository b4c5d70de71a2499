use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn show_index() -> impl Responder {
    HttpResponse::Ok().body("Clients API")
}
