use focusdesk::cli;
use focusdesk::config::Settings;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("focusdesk=info")
        }))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load();
    if settings.gemini_api_key.is_none() {
        tracing::info!("no {} set; coaching chat runs offline", focusdesk::config::API_KEY_VAR);
    }
    cli::run(settings).await;
}
