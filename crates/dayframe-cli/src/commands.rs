//! The two entry points: transform a local file, or fetch and transform the
//! image of the day.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use dayframe_core::{process_bytes, PipelineConfig, PipelineError};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::fetch::{image_url, target_date, FetchError, Fetcher};
use crate::output::write_atomic;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot read input image {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download failed")]
    Fetch(#[from] FetchError),

    #[error("image processing failed")]
    Pipeline(#[from] PipelineError),

    #[error("cannot write output {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("day offset {0} is out of range")]
    DateOutOfRange(i64),
}

/// Transform `input` and write the JPEG to `output`.
pub fn process_file(
    input: &Path,
    output: &Path,
    pipeline: &PipelineConfig,
) -> Result<(), RunError> {
    let bytes = std::fs::read(input).map_err(|source| RunError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    info!(path = %input.display(), bytes = bytes.len(), "read input");

    transform_and_save(&bytes, output, pipeline)
}

/// Fetch the image for `date` (or today's target date), transform it and
/// write the JPEG to `output` (or the configured output path).
///
/// Returns the path that was written.
pub fn run_daily(
    config: &AppConfig,
    output: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<PathBuf, RunError> {
    let date = match date {
        Some(date) => date,
        None => target_date(Utc::now(), config.source.day_offset)
            .ok_or(RunError::DateOutOfRange(config.source.day_offset))?,
    };
    let url = image_url(&config.source.base_url, date);

    let fetcher = Fetcher::new(&config.source)?;
    let bytes = fetcher.fetch(&url)?;

    let output = output.unwrap_or(config.output_path.as_path());
    transform_and_save(&bytes, output, &config.pipeline)?;
    Ok(output.to_path_buf())
}

fn transform_and_save(
    bytes: &[u8],
    output: &Path,
    pipeline: &PipelineConfig,
) -> Result<(), RunError> {
    let jpeg = process_bytes(bytes, pipeline)?;

    write_atomic(output, &jpeg).map_err(|source| RunError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), bytes = jpeg.len(), "saved");
    Ok(())
}
