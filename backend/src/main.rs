use actix_web::HttpServer;
use log::info;

use premium_api::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("Starting Insurance Premium Prediction API");

    let config = ServerConfig::from_env();
    let bind_address = config.bind_address();

    info!("Listening on: http://{}", bind_address);
    info!("Workers: {}", config.workers);
    info!("Endpoints:");
    info!("   GET  /            - Status message");
    info!("   GET  /model-info  - Scoring rule description");
    info!("   POST /predict     - Premium category prediction");

    HttpServer::new(premium_api::app)
        .workers(config.workers)
        .bind(&bind_address)?
        .run()
        .await
}
