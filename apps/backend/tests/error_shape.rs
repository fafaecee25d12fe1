mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::test_support::{fixtures, fast_config, MemoryProgressStore, StubSource};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use uuid::Uuid;

fn game_state() -> actix_web::web::Data<backend::state::app_state::AppState> {
    let source = Arc::new(StubSource::with_catalog(vec![
        fixtures::pokemon(1, 10),
        fixtures::pokemon(2, 20),
    ]));
    let store = Arc::new(MemoryProgressStore::new());
    common::state(common::flow(source, store, fast_config(2)))
}

#[actix_web::test]
async fn unknown_session_yields_404_problem_details() {
    let data = game_state();
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure),
    )
    .await;

    let missing = Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/api/sessions/{missing}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    assert_problem_details_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("not found"),
    )
    .await;
}

#[actix_web::test]
async fn malformed_session_id_yields_400() {
    let data = game_state();
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/sessions/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_SESSION_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn invalid_direction_yields_400() {
    let data = game_state();
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure),
    )
    .await;

    // Direction validation happens before the session lookup, so any uuid
    // works here.
    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{}/guess", Uuid::new_v4()))
        .set_json(serde_json::json!({ "direction": "sideways" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_DIRECTION",
        StatusCode::BAD_REQUEST,
        Some("sideways"),
    )
    .await;
}
