//! End-to-end tests for the HTTP facade wired through `configure`.

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::{Method, StatusCode},
    test::{self, TestRequest},
    web,
};
use backend::Trace;
use backend::domain::{LoginCredentials, TRACE_ID_HEADER};
use backend::inbound::http::configure;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn http_state() -> web::Data<HttpState> {
    let credentials =
        LoginCredentials::try_from_parts("admin", "password").expect("valid credentials");
    web::Data::new(HttpState::new(credentials).with_max_records(50))
}

async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(health)
            .app_data(state)
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn body_json(res: ServiceResponse<BoxBody>) -> Value {
    let bytes = test::read_body(res).await;
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(Method::GET, "/generate/login/5", StatusCode::OK)]
#[case(Method::GET, "/generate/profil?count=5", StatusCode::OK)]
#[case(Method::GET, "/generate/login/0", StatusCode::BAD_REQUEST)]
#[case(Method::GET, "/generate/login/51", StatusCode::BAD_REQUEST)]
#[case(Method::GET, "/generate/kunde/5", StatusCode::BAD_REQUEST)]
#[case(Method::GET, "/generate/login/fuenf", StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Method::GET, "/export_data/xlsx", StatusCode::OK)]
#[case(Method::GET, "/export_data/pdf", StatusCode::BAD_REQUEST)]
#[case(Method::GET, "/export/json", StatusCode::NOT_FOUND)]
#[case(Method::GET, "/health/live", StatusCode::OK)]
#[case(Method::GET, "/health/ready", StatusCode::OK)]
#[case(Method::POST, "/generate/login/5", StatusCode::METHOD_NOT_ALLOWED)]
#[case(Method::GET, "/login", StatusCode::METHOD_NOT_ALLOWED)]
#[case(Method::DELETE, "/export_data/json", StatusCode::METHOD_NOT_ALLOWED)]
#[case(Method::GET, "/nirgendwo", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn routes_answer_with_expected_status(
    http_state: web::Data<HttpState>,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let app = init_app(http_state).await;
    let res = test::call_service(&app, TestRequest::default().method(method).uri(uri).to_request())
        .await;

    assert_eq!(res.status(), expected, "{uri}");
}

#[rstest]
#[actix_web::test]
async fn error_bodies_carry_the_trace_header_id(http_state: web::Data<HttpState>) {
    let app = init_app(http_state).await;
    let res = test::call_service(
        &app,
        TestRequest::get().uri("/generate/login/0").to_request(),
    )
    .await;

    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace header");
    let body = body_json(res).await;

    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    assert_eq!(body.get("traceId"), Some(&json!(header)));
}

#[rstest]
#[actix_web::test]
async fn malformed_login_json_is_a_client_error(http_state: web::Data<HttpState>) {
    let app = init_app(http_state).await;
    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"benutzername\":")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("invalid_request")));
}

#[rstest]
#[actix_web::test]
async fn login_round_trip(http_state: web::Data<HttpState>) {
    let app = init_app(http_state).await;
    let accepted = test::call_service(
        &app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"benutzername": "admin", "passwort": "password"}))
            .to_request(),
    )
    .await;
    let rejected = test::call_service(
        &app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"benutzername": "admin", "passwort": "espresso"}))
            .to_request(),
    )
    .await;

    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn generated_batch_can_be_exported_afterwards(http_state: web::Data<HttpState>) {
    let app = init_app(http_state).await;
    let generated = test::call_service(
        &app,
        TestRequest::get().uri("/generate/order/4?seed=11").to_request(),
    )
    .await;
    assert_eq!(generated.status(), StatusCode::OK);
    let records = body_json(generated).await;

    let exported = test::call_service(&app, TestRequest::get().uri("/export/json").to_request())
        .await;
    assert_eq!(exported.status(), StatusCode::OK);
    let exported_records = body_json(exported).await;

    assert_eq!(exported_records, records);
}

#[rstest]
#[actix_web::test]
async fn latest_generation_replaces_the_stored_batch(http_state: web::Data<HttpState>) {
    let app = init_app(http_state).await;
    for uri in ["/generate/login/3", "/generate/profil/2"] {
        let res = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let exported = test::call_service(&app, TestRequest::get().uri("/export/csv").to_request())
        .await;
    let csv = String::from_utf8(test::read_body(exported).await.to_vec()).expect("utf-8 csv");

    assert_eq!(csv.lines().count(), 3);
    assert!(!csv.starts_with("benutzername,passwort\n"));
}
