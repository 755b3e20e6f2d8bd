use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use tera::Tera;

use lunchly::domain::types::CustomerId;
use lunchly::middleware::RequestLogger;
use lunchly::repository::{CustomerReader, DieselRepository, ReservationReader};
use lunchly::routes;

mod common;

macro_rules! init_app {
    ($repo:expr) => {{
        let repo: DieselRepository = $repo;
        let tera = Tera::new("templates/**/*").expect("templates must parse");
        test::init_service(
            App::new()
                .wrap(RequestLogger)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(repo.clone()))
                .configure(|cfg| routes::configure(cfg, repo)),
        )
        .await
    }};
}

async fn body_of(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn index_lists_and_searches_customers() {
    let test_db = common::TestDb::new("routes_index.db");
    let repo = test_db.repo();
    common::add_customer(&repo, "Alice", "Smith");
    common::add_customer(&repo, "Carol", "Jones");

    let app = init_app!(repo);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_of(resp).await;
    let carol = body.find("Carol Jones").expect("Carol is listed");
    let alice = body.find("Alice Smith").expect("Alice is listed");
    assert!(carol < alice);

    let req = test::TestRequest::get().uri("/?search=jones").to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    assert!(body.contains("Carol Jones"));
    assert!(!body.contains("Alice Smith"));
}

#[actix_web::test]
async fn api_returns_json_listing() {
    let test_db = common::TestDb::new("routes_api.db");
    let repo = test_db.repo();
    common::add_customer(&repo, "Alice", "Smith");
    common::add_customer(&repo, "Bob", "Smith");
    common::add_customer(&repo, "Carol", "Jones");

    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?search=smith")
        .to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["full_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice Smith", "Bob Smith"]);
}

#[actix_web::test]
async fn best_customers_page() {
    let test_db = common::TestDb::new("routes_best.db");
    let repo = test_db.repo();
    let alice = common::add_customer(&repo, "Alice", "Smith");
    common::add_customer(&repo, "Carol", "Jones");
    common::add_reservations(&repo, &alice, 3);

    let app = init_app!(repo);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/best/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_of(resp).await;
    assert!(body.contains("Alice Smith"));
    assert!(!body.contains("Carol Jones"));
}

#[actix_web::test]
async fn missing_customer_is_404() {
    let test_db = common::TestDb::new("routes_missing.db");
    let app = init_app!(test_db.repo());

    for uri in ["/999/", "/0/", "/999/edit/"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn add_edit_and_book_customer() {
    let test_db = common::TestDb::new("routes_add_edit.db");
    let repo = test_db.repo();
    let app = init_app!(repo.clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/add/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/add/")
        .set_form([
            ("first_name", "Alice"),
            ("last_name", "Smith"),
            ("phone", "555-0101"),
            ("notes", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let customers = repo.list_customers().unwrap();
    assert_eq!(customers.len(), 1);
    let id: CustomerId = customers[0].id.unwrap();
    assert_eq!(location, format!("/{id}/"));
    assert_eq!(customers[0].notes, None);

    let req = test::TestRequest::post()
        .uri(&format!("/{id}/edit/"))
        .set_form([
            ("first_name", "Alicia"),
            ("last_name", "Smith"),
            ("phone", ""),
            ("notes", "Window table"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = repo.get_customer_by_id(id).unwrap().unwrap();
    assert_eq!(stored.full_name(), "Alicia Smith");
    assert_eq!(stored.phone, None);
    assert_eq!(stored.notes.as_deref(), Some("Window table"));

    let req = test::TestRequest::post()
        .uri(&format!("/{id}/add-reservation/"))
        .set_form([
            ("num_guests", "4"),
            ("start_at", "2025-06-01T19:30"),
            ("notes", "Birthday"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(repo.list_reservations_for_customer(id).unwrap().len(), 1);

    let req = test::TestRequest::get().uri(&format!("/{id}/")).to_request();
    let body = body_of(test::call_service(&app, req).await).await;
    assert!(body.contains("Alicia Smith"));
    assert!(body.contains("June 1 2025, 7:30 PM"));
    assert!(body.contains("Birthday"));
}

#[actix_web::test]
async fn invalid_forms_are_rejected() {
    let test_db = common::TestDb::new("routes_invalid.db");
    let repo = test_db.repo();
    let alice = common::add_customer(&repo, "Alice", "Smith");
    let app = init_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri("/add/")
        .set_form([("first_name", ""), ("last_name", "Smith")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repo.list_customers().unwrap().len(), 1);

    let id = alice.id.unwrap();
    let req = test::TestRequest::post()
        .uri(&format!("/{id}/add-reservation/"))
        .set_form([("num_guests", "2"), ("start_at", "someday")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(repo.list_reservations_for_customer(id).unwrap().is_empty());
}
