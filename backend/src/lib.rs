//! Insurance premium category scoring API.
//!
//! A stateless HTTP service that scores an applicant record with a fixed rule
//! and answers with one of three premium categories.

pub mod config;
pub mod models;
pub mod routes;
pub mod scoring;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, Error};

pub use models::{ApplicantRecord, Occupation, PredictionResponse, PremiumCategory};

/// Registers the JSON extractor config and every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(routes::json_config())
        .service(routes::root)
        .service(routes::predict)
        .service(routes::model_info);
}

/// The served application: routes, 404 fallback and the middleware stack.
pub fn app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    // Local demo service: every origin, method and header is accepted.
    let cors = Cors::permissive();

    App::new()
        .wrap(Logger::default())
        .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
        .wrap(cors)
        .configure(configure)
        .default_service(web::route().to(routes::not_found))
}
