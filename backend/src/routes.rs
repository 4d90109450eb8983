use actix_web::{error, get, post, web, HttpRequest, HttpResponse, Responder};
use log::{info, warn};
use std::time::Instant;

use crate::models::{ApiResponse, ApplicantRecord, PredictionResponse, StatusMessage};
use crate::scoring;

pub const RUNNING_MESSAGE: &str = "Insurance Premium Prediction API is running!";

const JSON_LIMIT: usize = 64 * 1024;

/// Body extraction failures are validation errors too: 422 with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, req: &HttpRequest| {
            let message = err.to_string();
            warn!("Rejected body on {}: {}", req.path(), message);
            let response = HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error(&message));
            error::InternalError::from_response(err, response).into()
        })
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(StatusMessage {
        message: RUNNING_MESSAGE.to_string(),
    })
}

#[post("/predict")]
pub async fn predict(req: web::Json<ApplicantRecord>) -> impl Responder {
    let start_time = Instant::now();
    let record = req.into_inner();

    if let Err(e) = record.validate() {
        warn!("Validation failed: {}", e);
        return HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error(&e));
    }

    let category = scoring::predict(&record);
    info!(
        "Prediction: category={} age={} smoker={} in {:?}",
        category,
        record.age,
        record.smoker,
        start_time.elapsed()
    );

    HttpResponse::Ok().json(PredictionResponse {
        predicted_category: category,
    })
}

#[get("/model-info")]
pub async fn model_info() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(scoring::rule_info()))
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    warn!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ApiResponse::<()>::error("endpoint not found"))
}
