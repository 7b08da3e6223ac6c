//! CSV input and JSON artifact output

use crate::ConvertError;
use feedclean_core::{CleanRecord, RawRecord, SkipReason};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Read one CSV export into raw records.
///
/// Field names are configured, not hardcoded. A row missing the text or
/// timestamp column (short row) is logged and skipped; a file whose header
/// lacks the configured columns yields zero rows with a single warning, so
/// the batch still produces an (empty) artifact. Only failures to open or
/// parse the file itself are batch-fatal.
pub fn read_batch(
    path: &Path,
    text_field: &str,
    timestamp_field: &str,
) -> Result<Vec<RawRecord>, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| ConvertError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| ConvertError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let text_idx = headers.iter().position(|h| h == text_field);
    let timestamp_idx = headers.iter().position(|h| h == timestamp_field);

    let (text_idx, timestamp_idx) = match (text_idx, timestamp_idx) {
        (Some(t), Some(ts)) => (t, ts),
        _ => {
            tracing::warn!(
                file = %path.display(),
                text_field,
                timestamp_field,
                "header is missing configured columns, batch will be empty"
            );
            return Ok(Vec::new());
        }
    };

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(file = %path.display(), line, error = %e, "skipping unreadable row");
                continue;
            }
        };

        match (record.get(text_idx), record.get(timestamp_idx)) {
            (Some(text), Some(timestamp)) => {
                rows.push(RawRecord::new(text, timestamp));
            }
            (text, _) => {
                let field = if text.is_none() { text_field } else { timestamp_field };
                let reason = SkipReason::MissingField(field.to_string());
                tracing::warn!(file = %path.display(), line, %reason, "skipping short row");
            }
        }
    }

    Ok(rows)
}

/// Output path for a batch: same stem as the input, `.json` extension,
/// inside the output directory.
pub fn artifact_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "batch".to_string());
    output_dir.join(format!("{stem}.json"))
}

/// Write the artifact for one batch.
///
/// Written once, after the full record list is assembled; pretty-printed,
/// and ASCII-only by construction since the normalizer strips non-ASCII.
pub fn write_artifact(path: &Path, records: &[CleanRecord]) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path_replaces_extension() {
        let out = artifact_path(Path::new("data/celebrity_tweets.csv"), Path::new("json"));
        assert_eq!(out, Path::new("json/celebrity_tweets.json"));
    }

    #[test]
    fn test_read_batch_with_configured_fields() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.csv");
        std::fs::write(
            &input,
            "id,tweet,date\n1,hello world,2020-01-01\n2,second,2020-01-02\n",
        )
        .unwrap();

        let rows = read_batch(&input, "tweet", "date").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], RawRecord::new("hello world", "2020-01-01"));
        assert_eq!(rows[1].timestamp, "2020-01-02");
    }

    #[test]
    fn test_read_batch_missing_columns_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("other.csv");
        std::fs::write(&input, "a,b\n1,2\n").unwrap();

        let rows = read_batch(&input, "tweet", "date").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_batch_short_rows_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("short.csv");
        std::fs::write(&input, "tweet,date\nonly-text\nfull,2020-01-01\n").unwrap();

        let rows = read_batch(&input, "tweet", "date").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "full");
    }

    #[test]
    fn test_read_batch_missing_file_is_error() {
        assert!(read_batch(Path::new("no/such/file.csv"), "tweet", "date").is_err());
    }
}
