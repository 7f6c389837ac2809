// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::SourceSpec;
use crate::table::{read_table, Row};

pub fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .context("building HTTP client")
}

/// GET `url` and return the body as text. Non-2xx statuses are errors.
#[instrument(level = "debug", skip(client, url), fields(url = %url))]
pub async fn get_text(client: &Client, url: &Url) -> Result<String> {
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    debug!(bytes = body.len(), "fetched");
    Ok(body)
}

/// Fetch one source page and extract its rows.
#[instrument(level = "info", skip(client, source), fields(table = %source.table.name))]
pub async fn fetch_table(client: &Client, source: &SourceSpec) -> Result<Vec<Row>> {
    let html = get_text(client, &source.url).await?;
    let rows = read_table(&html);
    if rows.is_empty() {
        anyhow::bail!("no rows extracted from {}", source.url);
    }
    Ok(rows)
}
