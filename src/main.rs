use chat_translator::{AppConfig, ChatTranslator, HttpTranslator, StdoutSink};
use std::env;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reads chat lines from stdin (one ingestion adapter) and prints finished
/// translations to stdout.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("chat_translator=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    let config = AppConfig::load_or_default(Some("config.toml"));
    tracing::info!(endpoint = %config.api.endpoint, "loaded configuration");

    let translator = Arc::new(HttpTranslator::new(&config.api)?);
    let translation_config = Arc::new(RwLock::new(config.translation.clone()));
    let service = ChatTranslator::new(
        translation_config,
        config.pipeline.clone(),
        translator,
        Arc::new(StdoutSink),
    );

    if let Some(index) = args.iter().position(|a| a == "--player") {
        if let Some(name) = args.get(index + 1) {
            service.set_local_player(Some(name.clone())).await;
            tracing::info!(player = %name, "local player set");
        }
    }

    let dispatcher = service.spawn_dispatcher();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        service.submit(&line).await;
    }

    tracing::info!("input closed, shutting down");
    dispatcher.abort();
    Ok(())
}
