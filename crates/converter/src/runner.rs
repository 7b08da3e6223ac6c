//! Directory-level conversion run
//!
//! Enumerates CSV files in the input directory and converts them one batch
//! at a time. Batch failures are isolated: a file that cannot be read or
//! written is logged and counted, and the run moves on to the next file.

use crate::{artifact_path, read_batch, write_artifact, BatchConverter, ConvertError};
use feedclean_config::ConversionConfig;
use std::path::{Path, PathBuf};

/// Outcome of one directory run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Batches converted and written
    pub batches: usize,
    /// Batches that failed at the filesystem level
    pub failed: usize,
    /// Total records emitted across all artifacts
    pub records: usize,
}

/// Convert every `.csv` file in the input directory.
///
/// Files are processed in name order, one at a time; only inability to read
/// the input directory or create the output directory fails the whole run.
pub async fn convert_directory(
    config: &ConversionConfig,
    converter: &BatchConverter,
) -> Result<RunSummary, ConvertError> {
    let input_dir = Path::new(&config.input_dir);
    let output_dir = Path::new(&config.output_dir);

    std::fs::create_dir_all(output_dir).map_err(|source| ConvertError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut inputs = list_csv_files(input_dir)?;
    inputs.sort();

    let mut summary = RunSummary::default();
    for input in inputs {
        match convert_file(&input, output_dir, config, converter).await {
            Ok(count) => {
                summary.batches += 1;
                summary.records += count;
            }
            Err(e) => {
                summary.failed += 1;
                tracing::error!(file = %input.display(), error = %e, "batch failed");
            }
        }
    }

    tracing::info!(
        batches = summary.batches,
        failed = summary.failed,
        records = summary.records,
        "conversion run complete"
    );

    Ok(summary)
}

/// Convert a single input file into its artifact; returns the record count.
async fn convert_file(
    input: &Path,
    output_dir: &Path,
    config: &ConversionConfig,
    converter: &BatchConverter,
) -> Result<usize, ConvertError> {
    let batch_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let rows = read_batch(input, &config.text_field, &config.timestamp_field)?;
    let records = converter.convert_batch(&batch_name, rows).await;

    let artifact = artifact_path(input, output_dir);
    write_artifact(&artifact, &records)?;

    tracing::debug!(
        file = %input.display(),
        artifact = %artifact.display(),
        records = records.len(),
        "artifact written"
    );

    Ok(records.len())
}

fn list_csv_files(input_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let entries = std::fs::read_dir(input_dir).map_err(|source| ConvertError::Io {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConvertError::Io {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }

    Ok(files)
}
