use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use log::{error, info, warn};

use premium_ui::client::ScoringClient;
use premium_ui::config::UiConfig;
use premium_ui::UiState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("Starting Insurance Premium Category Predictor UI");

    let config = UiConfig::from_env();
    let client = match ScoringClient::new(&config.scoring_api_url, config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("Cannot build scoring client: {}", e);
            return Err(e);
        }
    };

    info!("Scoring API: {}", client.base_url());
    if !client
        .wait_until_ready(config.ready_attempts, config.ready_backoff)
        .await
    {
        warn!(
            "Scoring API did not answer after {} attempts, serving the form anyway",
            config.ready_attempts
        );
    }

    let state = web::Data::new(UiState {
        client,
        submit_delay: config.submit_delay,
    });
    let static_dir = config.static_dir.clone();
    let bind_address = config.bind_address();

    info!("Form available on: http://{}/", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .configure(premium_ui::configure(state.clone(), static_dir.clone()))
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
