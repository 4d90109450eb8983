//! Form-based client for the insurance premium category API.

pub mod client;
pub mod config;
pub mod form;
pub mod routes;
pub mod view;

use actix_files::Files;
use actix_web::web;
use std::path::PathBuf;
use std::time::Duration;

use client::ScoringClient;

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct UiState {
    pub client: ScoringClient,
    pub submit_delay: Duration,
}

pub fn configure(
    state: web::Data<UiState>,
    static_dir: PathBuf,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state)
            .app_data(routes::form_config())
            .service(routes::index)
            .service(routes::predict)
            .service(Files::new("/static", static_dir).prefer_utf8(true));
    }
}
