//! Batch conversion of feed exports
//!
//! Drives the whole pipeline: read CSV rows, normalize each text field,
//! optionally translate, filter out invalid records, and write one
//! pretty-printed JSON artifact per input file. Batches are independent; a
//! failing batch never takes down the run.

mod batch;
mod error;
mod io;
mod runner;

pub use batch::BatchConverter;
pub use error::ConvertError;
pub use io::{artifact_path, read_batch, write_artifact};
pub use runner::{convert_directory, RunSummary};
