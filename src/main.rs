use log::{error, info};
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Starting CareLink Companion API [{}]...",
        config.runtime_env()
    );

    let care_store = service::init_care_store();
    let app_state = service::AppState::new(config, &care_store);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
