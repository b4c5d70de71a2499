use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use clients_api::repository::{ClientListQuery, ClientReader, InMemoryRepository};
use clients_api::routes::configure;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .configure(configure),
        )
        .await
    };
}

fn seeded() -> InMemoryRepository {
    InMemoryRepository::seeded().unwrap()
}

fn jane() -> Value {
    json!({
        "id": "client-chosen-id",
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "phoneNumber": "+15550100"
    })
}

#[actix_web::test]
async fn index_responds() {
    let app = init_app!(seeded());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn list_uses_defaults() {
    let app = init_app!(seeded());

    let req = test::TestRequest::get().uri("/clients").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Successfully found clients");
    assert_eq!(body["data"]["clients"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["clients"][0]["firstName"], "AJohn");
    assert_eq!(
        body["data"]["meta"],
        json!({"pageNumber": 1, "pageSize": 5, "total": 5, "totalPages": 1})
    );
}

#[actix_web::test]
async fn list_falls_back_on_unparsable_numbers() {
    let app = init_app!(seeded());

    let req = test::TestRequest::get()
        .uri("/clients?page=abc&pageSize=-3&search=john")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["meta"]["pageNumber"], 1);
    assert_eq!(body["data"]["meta"]["pageSize"], 5);
    assert_eq!(body["data"]["meta"]["total"], 5);
}

#[actix_web::test]
async fn list_past_last_page_is_empty_success() {
    let app = init_app!(seeded());

    let req = test::TestRequest::get()
        .uri("/clients?page=2&pageSize=5&search=john")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No clients found");
    assert!(body["data"]["clients"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["meta"]["total"], 5);
}

#[actix_web::test]
async fn list_search_is_not_trimmed() {
    let app = init_app!(seeded());

    let req = test::TestRequest::get()
        .uri("/clients?search=%20john")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No clients found");
    assert_eq!(body["data"]["meta"]["total"], 0);

    let req = test::TestRequest::get()
        .uri("/clients?search=%20%20%20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["meta"]["total"], 0);
}

#[actix_web::test]
async fn create_accepts_padded_email() {
    let repo = seeded();
    let app = init_app!(repo);

    let mut payload = jane();
    payload["email"] = json!("  Jane@Example.com ");
    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["client"]["email"], "jane@example.com");
}

#[actix_web::test]
async fn list_paginates_smaller_pages() {
    let app = init_app!(seeded());

    let req = test::TestRequest::get()
        .uri("/clients?page=2&pageSize=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body["data"]["clients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["CJohn", "DJohn"]);
    assert_eq!(body["data"]["meta"]["totalPages"], 3);
}

#[actix_web::test]
async fn create_assigns_server_id() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(jane())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Successfully created client");
    let id = body["data"]["client"]["id"].as_str().unwrap().to_string();
    assert_ne!(id, "client-chosen-id");
    assert_eq!(repo.len(), 6);

    let req = test::TestRequest::get()
        .uri("/clients?search=JANE")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["meta"]["total"], 1);
    assert_eq!(body["data"]["clients"][0]["id"], id);
}

#[actix_web::test]
async fn create_rejects_invalid_fields() {
    let repo = seeded();
    let app = init_app!(repo);

    let mut payload = jane();
    payload["phoneNumber"] = json!("not a phone");
    let req = test::TestRequest::post()
        .uri("/clients")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
    assert_eq!(repo.len(), 5);
}

#[actix_web::test]
async fn create_rejects_malformed_json() {
    let app = init_app!(seeded());

    let req = test::TestRequest::post()
        .uri("/clients")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn update_existing_client() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::put()
        .uri("/clients/xx-aa-bb")
        .set_json(jane())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (total, items) = repo
        .list_clients(ClientListQuery::new().search("jane"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id.as_str(), "xx-aa-bb");
}

#[actix_web::test]
async fn update_missing_client_is_not_found() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::put()
        .uri("/clients/nope")
        .set_json(jane())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No client with the given id=nope found");
    let (total, _) = repo
        .list_clients(ClientListQuery::new().search("jane"))
        .unwrap();
    assert_eq!(total, 0);
}

#[actix_web::test]
async fn delete_existing_then_missing() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::delete()
        .uri("/clients/xx-aa-bf")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.len(), 4);

    let req = test::TestRequest::delete()
        .uri("/clients/xx-aa-bf")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.len(), 4);
}
