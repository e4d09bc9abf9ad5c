// src/pipeline.rs
use anyhow::Result;
use std::{path::PathBuf, time::Instant};
use tracing::{info, instrument};

use crate::{config::Config, derive, load, persist};

/// What a run consumed and produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input_files: Vec<PathBuf>,
    pub rows: usize,
    pub outputs: Vec<PathBuf>,
}

/// Split every campaign extract under `config.input_dir` into `client.csv`,
/// `campaign.csv` and `economics.csv` under `config.output_dir`.
///
/// All three tables are derived before the first file is written, so a bad
/// row leaves the output directory untouched.
#[instrument(
    level = "info",
    skip(config),
    fields(input = %config.input_dir.display(), output = %config.output_dir.display())
)]
pub fn clean_campaign_data(config: &Config) -> Result<RunSummary> {
    let start = Instant::now();

    // ─── 1) load & merge ─────────────────────────────────────────────
    let input_files = load::discover_inputs(&config.input_dir, &config.pattern)?;
    info!("{} input archives", input_files.len());
    let raw = load::load_tables(&input_files)?;

    // ─── 2) derive ───────────────────────────────────────────────────
    let tables = derive::derive_all(&raw)?;

    // ─── 3) persist ──────────────────────────────────────────────────
    let outputs = vec![
        config.client_path(),
        config.campaign_path(),
        config.economics_path(),
    ];
    persist::write_table(&outputs[0], &tables.clients)?;
    persist::write_table(&outputs[1], &tables.campaigns)?;
    persist::write_table(&outputs[2], &tables.economics)?;

    info!(rows = tables.len(), elapsed = ?start.elapsed(), "completed");
    Ok(RunSummary {
        input_files,
        rows: tables.len(),
        outputs,
    })
}
