use std::path::PathBuf;

use thiserror::Error;

pub mod dataset;

pub use dataset::{DatasetSource, load_members, parse_members};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a list of member records: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
