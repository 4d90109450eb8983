use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpServer};
use httpmock::prelude::*;
use serde_json::json;
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use premium_api::models::{ApplicantRecord, Occupation};
use premium_ui::client::ScoringClient;
use premium_ui::UiState;

fn state(base_url: &str) -> web::Data<UiState> {
    web::Data::new(UiState {
        client: ScoringClient::new(base_url, Duration::from_secs(5)).unwrap(),
        submit_delay: Duration::ZERO,
    })
}

fn static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn record(age: u32, income_lpa: f64, smoker: bool) -> ApplicantRecord {
    ApplicantRecord {
        age,
        weight: 65.0,
        height: 1.7,
        income_lpa,
        smoker,
        city: "Mumbai".to_string(),
        occupation: Occupation::GovernmentJob,
    }
}

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn index_renders_form_with_defaults() {
    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&closed_port_url()), static_dir())),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = body_text(resp).await;
    assert!(page.contains("Insurance Premium Category Predictor"));
    assert!(page.contains(r#"value="Mumbai""#));
    assert!(page.contains("Predict Premium Category"));
}

#[actix_web::test]
async fn stylesheet_is_served() {
    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&closed_port_url()), static_dir())),
    )
    .await;

    let req = test::TestRequest::get().uri("/static/style.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn submission_shows_predicted_category() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/predict");
            then.status(200)
                .json_body(json!({"predicted_category": "Medium"}));
        })
        .await;

    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&server.base_url()), static_dir())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(record(45, 15.0, false))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page = body_text(resp).await;
    assert!(page.contains("Predicted Insurance Premium Category: <strong>Medium</strong>"));
    assert!(page.contains("Factors considered:</strong> Age, Smoking status, Income level"));
    assert!(page.contains(r#"<option value="government_job" selected>"#));
    mock.assert_async().await;
}

#[actix_web::test]
async fn unreachable_service_is_reported_distinctly() {
    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&closed_port_url()), static_dir())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(record(30, 10.0, true))
        .to_request();
    let page = body_text(test::call_service(&app, req).await).await;

    assert!(page.contains("Could not connect to the scoring service."));
    assert!(page.contains("Please wait a moment and try again."));
    assert!(!page.contains("An unexpected error occurred"));
}

#[actix_web::test]
async fn api_errors_are_shown_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/predict");
            then.status(500).body("scoring exploded");
        })
        .await;

    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&server.base_url()), static_dir())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(record(30, 10.0, true))
        .to_request();
    let page = body_text(test::call_service(&app, req).await).await;

    assert!(page.contains("An unexpected error occurred: API error 500: scoring exploded"));
}

#[actix_web::test]
async fn out_of_bounds_input_never_reaches_the_service() {
    // A closed port: reaching the client would render the connection error instead.
    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&closed_port_url()), static_dir())),
    )
    .await;

    let mut tall = record(30, 10.0, false);
    tall.height = 3.2;
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(tall)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let page = body_text(resp).await;
    assert!(page.contains("Please correct the form: Height (m) must be between 0.5 and 2.5"));
    assert!(page.contains(r#"value="3.2""#));
    assert!(!page.contains("Could not connect"));
}

#[actix_web::test]
async fn unparsable_form_is_rejected() {
    let app = test::init_service(
        App::new().configure(premium_ui::configure(state(&closed_port_url()), static_dir())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(ContentType::form_url_encoded())
        .set_payload("age=abc&weight=65&height=1.7&income_lpa=10&smoker=true&city=Mumbai&occupation=retired")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let page = body_text(resp).await;
    assert!(page.contains("Please correct the form:"));
}

#[actix_web::test]
async fn end_to_end_against_scoring_api() {
    let api = HttpServer::new(premium_api::app)
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = api.addrs()[0];
    actix_web::rt::spawn(api.run());

    let client = ScoringClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
    assert!(client.wait_until_ready(10, Duration::from_millis(20)).await);

    let app = test::init_service(App::new().configure(premium_ui::configure(
        web::Data::new(UiState {
            client,
            submit_delay: Duration::ZERO,
        }),
        static_dir(),
    )))
    .await;

    let cases = [
        (record(22, 5.0, false), "Low"),
        (record(45, 15.0, false), "Medium"),
        (record(70, 25.0, true), "High"),
    ];
    for (applicant, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_form(applicant)
            .to_request();
        let page = body_text(test::call_service(&app, req).await).await;
        assert!(
            page.contains(&format!("<strong>{}</strong>", expected)),
            "expected {} in page",
            expected
        );
    }
}
