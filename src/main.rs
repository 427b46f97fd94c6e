use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use postwright::api::{self, AppState};
use postwright::environment::Config;
use postwright::llm::OpenAiGenerator;
use postwright::logging::configure_logging;
use postwright::news::CurrentsClient;

#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let config = Config::from_env()?;

    let headlines = CurrentsClient::new(&config.currents_api_url, &config.currents_api_key);
    let generator = OpenAiGenerator::new(
        &config.openai_api_key,
        config.openai_api_base.as_deref(),
        &config.model,
    );

    let state = AppState {
        headlines: Arc::new(headlines),
        generator: Arc::new(generator),
        output_format: config.output_format,
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, api::router(state).into_make_service()).await?;

    Ok(())
}
