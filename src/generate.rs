// src/generate.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::emit::{
    check_rows, Artifacts, HeaderBuilder, SourceBuilder, TableSpec, HEADER_FILE, SOURCE_FILE,
    STATUS_TABLE,
};
use crate::fetch::fetch_table;
use crate::table::Row;

/// Render the header and source for the given tables, status codes first.
pub fn render(tables: &[(TableSpec, Vec<Row>)]) -> Artifacts {
    let mut header = HeaderBuilder::new();
    let mut source = SourceBuilder::new();
    header.status(STATUS_TABLE);
    source.status(STATUS_TABLE);

    for (spec, rows) in tables {
        let problems = check_rows(spec, rows);
        if problems > 0 {
            warn!(table = %spec.name, problems, "table has rows that may not compile");
        }
        header.table(spec, rows);
        source.table(spec, rows);
    }

    info!(constants = header.constants(), "rendered artifacts");
    Artifacts {
        header: header.finish(),
        source: source.finish(),
    }
}

/// Write both artifacts into `out_dir`.
///
/// Both files are staged as temp files in `out_dir` and only renamed into
/// place once both are fully written. Returns the final paths.
pub fn write_artifacts(out_dir: &Path, artifacts: &Artifacts) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let header_tmp = stage(out_dir, HEADER_FILE, &artifacts.header)?;
    let source_tmp = stage(out_dir, SOURCE_FILE, &artifacts.source)?;

    let header_path = out_dir.join(HEADER_FILE);
    let source_path = out_dir.join(SOURCE_FILE);
    header_tmp
        .persist(&header_path)
        .with_context(|| format!("persisting {}", header_path.display()))?;
    source_tmp
        .persist(&source_path)
        .with_context(|| format!("persisting {}", source_path.display()))?;

    Ok((header_path, source_path))
}

fn stage(dir: &Path, name: &str, text: &str) -> Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file for {} in {}", name, dir.display()))?;
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.flush())
        .with_context(|| format!("writing {}", name))?;
    Ok(tmp)
}

/// Fetch every configured source in turn, render, and write the artifact pair.
#[instrument(level = "info", skip_all, fields(out_dir = %config.out_dir.display()))]
pub async fn run(client: &Client, config: &Config) -> Result<Artifacts> {
    let mut tables = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        let rows = fetch_table(client, source)
            .await
            .with_context(|| format!("fetching {} table", source.table.name))?;
        info!(table = %source.table.name, rows = rows.len(), "extracted");
        tables.push((source.table.clone(), rows));
    }

    let artifacts = render(&tables);
    let (h, c) = write_artifacts(&config.out_dir, &artifacts)?;
    info!(header = %h.display(), source = %c.display(), "wrote artifacts");
    Ok(artifacts)
}
