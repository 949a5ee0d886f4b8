//! Terminal client entry point.
use std::sync::Arc;

use anyhow::Result;
use spirit_client::{Terminal, logging::setup_logging};
use spirit_runtime::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let _guard = setup_logging(config.session_id.as_deref())?;

    // Built by hand so shutdown does not wait on the blocking stdin reader.
    let executor = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = executor.block_on(play(config));
    executor.shutdown_background();

    if let Err(error) = &result {
        tracing::error!("Session ended with error: {error:#}");
    }
    result
}

async fn play(config: RuntimeConfig) -> Result<()> {
    let runtime = Runtime::builder().config(config).build().await?;
    tracing::info!(seed = runtime.seed(), "Runtime started");

    let terminal = Terminal::new(runtime.handle(), Arc::clone(runtime.tables()));
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    terminal.run(input, &mut output).await?;

    runtime.shutdown().await?;
    Ok(())
}
