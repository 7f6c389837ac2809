use anyhow::Result;
use satcat_codegen::{config::Config, fetch::build_client, generate};
use std::env;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .with_target(false)
        .init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::from_env()?;
    let client = build_client(&config.user_agent)?;
    info!(
        out_dir = %config.out_dir.display(),
        sources = config.sources.len(),
        "generating lookup tables"
    );

    // ─── 3) fetch, render, write ─────────────────────────────────────
    let artifacts = generate::run(&client, &config).await?;
    info!(
        header_bytes = artifacts.header.len(),
        source_bytes = artifacts.source.len(),
        "all done"
    );
    Ok(())
}
