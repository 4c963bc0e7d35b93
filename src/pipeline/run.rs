// src/pipeline/run.rs

//! Top-level extraction run.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::pipeline::{RunContext, export, run_pages};
use crate::surface::{Role, Surface};
use crate::utils::wait;

/// Outcome of a completed extraction run.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub output: PathBuf,
}

/// Run the full pipeline against a surface and write the CSV artifact.
///
/// Fails with [`AppError::NoLeads`] when no entry cards ever appear (no
/// artifact is produced) and with [`AppError::NoData`] when traversal
/// finishes with zero rows.
pub async fn run_extraction<S: Surface>(
    config: &Config,
    surface: &mut S,
    output: &Path,
) -> Result<RunSummary> {
    log::info!("Lead extraction starting");

    let timing = &config.timing;
    let present = wait::wait_for(
        surface,
        Role::EntryCard,
        timing.card_wait_ms,
        timing.poll_interval_ms,
    )
    .await;
    if !present {
        return Err(AppError::NoLeads);
    }

    let mut ctx = RunContext::new();
    run_pages(config, surface, &mut ctx).await?;

    if ctx.is_empty() {
        return Err(AppError::NoData);
    }

    let rows = export::export(ctx.rows(), output)?;
    log::info!("Lead extraction complete: {rows} rows");

    Ok(RunSummary {
        rows,
        output: output.to_path_buf(),
    })
}
