use tracing::{error, info};
use user_rest_api::infrastructure::{config::load_config, logger::Logger};
use user_rest_api::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    Logger::init(&config.logging.level);
    info!("Starting user API server...");

    let app = App::initialize(&config).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;

    app.run().await?;

    Ok(())
}
