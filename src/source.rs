use log::error;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Any almanac provider (network download, local cache..) should implement
/// the [AlmanacSource] trait to feed an [AlmanacStore](crate::prelude::AlmanacStore).
/// Retry policy, if any, belongs to the implementer.
pub trait AlmanacSource {
    /// Provide the raw almanac content.
    fn fetch(&mut self) -> Result<String, Error>;
}

/// [FileSource] reads the almanac from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlmanacSource for FileSource {
    fn fetch(&mut self) -> Result<String, Error> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            error!("failed to read {}: {}", self.path.display(), e);
            Error::FetchFailed(format!("{}: {}", self.path.display(), e))
        })
    }
}
