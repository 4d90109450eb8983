use actix_web::http::StatusCode;
use actix_web::rt::time::sleep;
use actix_web::error::InternalError;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::{error, info, warn};
use premium_api::models::ApplicantRecord;

use crate::form;
use crate::view::{self, Outcome};
use crate::UiState;

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Unparsable form bodies re-render the default form with the parse error.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req: &HttpRequest| {
        let message = err.to_string();
        warn!("Rejected form on {}: {}", req.path(), message);
        let outcome = Outcome::Invalid(message);
        let response = html(
            StatusCode::BAD_REQUEST,
            view::render_page(&form::default_record(), Some(&outcome)),
        );
        InternalError::from_response(err, response).into()
    })
}

#[get("/")]
pub async fn index() -> HttpResponse {
    html(StatusCode::OK, view::render_page(&form::default_record(), None))
}

#[post("/predict")]
pub async fn predict(state: web::Data<UiState>, input: web::Form<ApplicantRecord>) -> HttpResponse {
    let record = input.into_inner();

    if let Err(message) = form::check_bounds(&record) {
        warn!("Out of bounds submission: {}", message);
        let outcome = Outcome::Invalid(message);
        return html(StatusCode::BAD_REQUEST, view::render_page(&record, Some(&outcome)));
    }

    if !state.submit_delay.is_zero() {
        sleep(state.submit_delay).await;
    }

    let outcome = Outcome::from(state.client.predict(&record).await);
    match &outcome {
        Outcome::Predicted(category) => info!("Predicted category: {}", category),
        Outcome::Unreachable => warn!("Scoring service unreachable at {}", state.client.base_url()),
        Outcome::Invalid(message) | Outcome::Failed(message) => error!("Prediction failed: {}", message),
    }

    html(StatusCode::OK, view::render_page(&record, Some(&outcome)))
}
