use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paste_link_prober::config::Config;
use paste_link_prober::dispatch::Dispatcher;
use paste_link_prober::probe::ProbeClient;
use paste_link_prober::report::ConsoleSink;
use paste_link_prober::services;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let text = read_input().await.context("Failed to read input text")?;
    info!(bytes = text.len(), "Input loaded");

    let probe = ProbeClient::new(&config).context("Failed to build probe client")?;
    let dispatcher = Dispatcher::new(services::builtin(), Arc::new(probe));

    let outcome = dispatcher.run(&text, &ConsoleSink).await;

    info!(
        services = outcome.links.len(),
        confirmed = outcome.total_links(),
        failed_services = outcome.errors.len(),
        "Sweep finished"
    );

    let summary = serde_json::to_string_pretty(&outcome).context("Failed to render outcome")?;
    println!("{summary}");

    Ok(())
}

/// Read paste text from the files given as arguments, or stdin when none.
async fn read_input() -> Result<String> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    let mut text = String::new();
    for path in paths {
        let chunk = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {path}"))?;
        text.push_str(&chunk);
        text.push('\n');
    }
    Ok(text)
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,paste_link_prober=debug"));

    // Logs go to stderr so stdout carries only the report lines and summary.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}
