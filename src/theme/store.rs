use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use thiserror::Error;

/// Key/value storage for user preferences.
pub trait PreferenceStore: 'static {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;
}

#[derive(Error, Debug)]
pub enum PreferenceStoreError {
    #[error("could not access the preference file: {0}")]
    Io(#[from] io::Error),
    #[error("the preference file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Preferences that only live as long as the app.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preferences kept in a JSON object file, e.g. `{ "aresrpg-ui-theme": "dark" }`.
///
/// A missing or empty file reads as no preferences. The file is rewritten on every `set`;
/// a file that is not a JSON object is replaced rather than left to fail every write.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, PreferenceStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self
            .read_all()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceStoreError::Json(err)) => {
                log::warn!(
                    "discarding unreadable preference file {}: {err}",
                    self.path.display()
                );
                Map::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_owned(), Value::from(value));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Written beside the target first so a failed write never truncates it.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_string_pretty(&values)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
