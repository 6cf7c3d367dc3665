// End-to-end doctor lifecycle through the router over the in-memory store.

use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use doctor_cell::{doctor_routes, DoctorState, InMemoryDoctorStore};
use shared_utils::test_utils::{
    body_json, empty_request, href, init_test_tracing, json_request, TestBodies, TestConfig,
};

fn create_test_app() -> Router {
    init_test_tracing();

    let config = TestConfig::default().to_app_config();
    let state = DoctorState::new(Arc::new(InMemoryDoctorStore::new()), &config);
    doctor_routes(Arc::new(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => json_request(method, uri, body),
        None => empty_request(method, uri),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn test_doctor_lifecycle() {
    let app = create_test_app();
    let anna = TestBodies::doctor("Anna", "Petrova", "Cardiology");

    // Create
    let (status, created) = send(&app, Method::POST, "/", Some(&anna)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        created,
        json!({
            "id": 1,
            "firstName": "Anna",
            "surname": "Petrova",
            "phoneNumber": "12345",
            "specialty": "Cardiology"
        })
    );

    // Read-one carries links
    let (status, fetched) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["surname"], "Petrova");
    assert_eq!(fetched["_links"]["self"]["href"], href("/doctors/1"));
    assert_eq!(fetched["_links"]["doctors"]["href"], href("/doctors"));

    // Replace
    let renamed = TestBodies::doctor("Anna", "Petrova-Smith", "Cardiology");
    let (status, replaced) = send(&app, Method::PUT, "/1", Some(&renamed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], 1);
    assert_eq!(replaced["surname"], "Petrova-Smith");
    assert_eq!(replaced["specialty"], "Cardiology");

    // Delete
    let (status, _) = send(&app, Method::DELETE, "/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = send(&app, Method::GET, "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "Doctor not found: 1");
}

#[tokio::test]
async fn test_list_contains_created_doctors_until_deleted() {
    let app = create_test_app();

    for (first, surname, specialty) in [
        ("Anna", "Petrova", "Cardiology"),
        ("Tomas", "Jankus", "Neurology"),
        ("Rasa", "Vaitkute", "Dermatology"),
    ] {
        let (status, _) = send(&app, Method::POST, "/", Some(&TestBodies::doctor(first, surname, specialty))).await;
        assert_eq!(status, StatusCode::OK);
    }

    send(&app, Method::DELETE, "/2", None).await;

    let (status, list) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);

    let mut surnames: Vec<&str> = list["_embedded"]["doctorList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["surname"].as_str().unwrap())
        .collect();
    surnames.sort();

    assert_eq!(surnames, vec!["Petrova", "Vaitkute"]);
    assert_eq!(list["_links"]["self"]["href"], href("/doctors"));
}

#[tokio::test]
async fn test_self_links_resolve_back_to_items() {
    let app = create_test_app();

    send(&app, Method::POST, "/", Some(&TestBodies::doctor("Anna", "Petrova", "Cardiology"))).await;
    send(&app, Method::POST, "/", Some(&TestBodies::doctor("Tomas", "Jankus", "Neurology"))).await;

    let (_, list) = send(&app, Method::GET, "/", None).await;

    for item in list["_embedded"]["doctorList"].as_array().unwrap() {
        let self_href = item["_links"]["self"]["href"].as_str().unwrap();
        let local = self_href.strip_prefix(&href("/doctors")).unwrap();

        let (status, fetched) = send(&app, Method::GET, local, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], item["id"]);
        assert_eq!(fetched["_links"], item["_links"]);
    }
}

#[tokio::test]
async fn test_put_to_unknown_id_creates_it() {
    let app = create_test_app();

    let (status, created) = send(
        &app,
        Method::PUT,
        "/42",
        Some(&TestBodies::doctor("Rasa", "Vaitkute", "Dermatology")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 42);

    // Generated ids continue past the explicit one
    let (_, next) = send(&app, Method::POST, "/", Some(&TestBodies::doctor("Anna", "Petrova", "Cardiology"))).await;
    assert_eq!(next["id"], 43);
}

#[tokio::test]
async fn test_post_ignores_client_supplied_id() {
    let app = create_test_app();

    let mut body = TestBodies::doctor("Anna", "Petrova", "Cardiology");
    body["id"] = json!(99);

    let (_, created) = send(&app, Method::POST, "/", Some(&body)).await;
    assert_eq!(created["id"], 1);

    let (status, _) = send(&app, Method::GET, "/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_doctor_succeeds() {
    let app = create_test_app();

    let (status, body) = send(&app, Method::DELETE, "/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}
