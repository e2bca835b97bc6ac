// Fixture loading

use crate::record::CollegeRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON array of college objects.
pub fn load_colleges(path: &Path) -> Result<Vec<CollegeRecord>, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
