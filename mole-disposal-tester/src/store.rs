//! JSON file implementation of the high-score store.
use mole_disposal_game::ScoreStore;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("reading {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("writing {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("decoding {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("encoding scores: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key/value integers staged in memory and written to a JSON file on flush.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, i32>,
}

impl JsonFileStore {
    /// Open a store, reading existing values if the file is present.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| FileStoreError::Decode {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(FileStoreError::Read { path, source }),
        };
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    type Error = FileStoreError;

    fn get_int(&self, key: &str) -> Result<Option<i32>, Self::Error> {
        Ok(self.values.get(key).copied())
    }

    fn set_int(&mut self, key: &str, value: i32) -> Result<(), Self::Error> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let encoded = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, encoded).map_err(|source| FileStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
