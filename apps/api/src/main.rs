use roster_api::config::Config;
use roster_api::StartupError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    roster_api::run(config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Roster API stopped");
    })
}
