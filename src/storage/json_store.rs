//! JSON file store
//!
//! Reads and atomically rewrites the announcements file.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::{MamoError, Result};
use crate::model::Announcement;

/// Translates between the in-memory collection and the file on disk
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Target file
    path: PathBuf,

    /// fsync the temporary file before renaming it into place
    sync_on_save: bool,

    /// Indented output
    pretty: bool,
}

impl JsonStore {
    /// Store at `path` with default write options
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            path: path.into(),
            sync_on_save: defaults.sync_on_save,
            pretty: defaults.pretty,
        }
    }

    /// Store described by a config
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config.data_file.clone(),
            sync_on_save: config.sync_on_save,
            pretty: config.pretty,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is present
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the collection
    ///
    /// Returns:
    /// - `Ok(vec![])` — file does not exist
    /// - `Ok(records)` — file parsed and every record is well-formed
    /// - `Err(CorruptStorage)` — file exists but does not match the format
    pub fn load(&self) -> Result<Vec<Announcement>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<Announcement> = serde_json::from_slice(&bytes).map_err(|e| {
            let kind = match e.classify() {
                Category::Data => "unexpected record shape",
                Category::Syntax | Category::Eof | Category::Io => "invalid JSON",
            };
            self.corrupt(format!("{}: {}", kind, e))
        })?;

        self.validate(&records)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded announcements"
        );
        Ok(records)
    }

    /// Replace the file contents with `records`
    ///
    /// The data goes to a temporary file next to the target which is then
    /// renamed over it. If anything fails before the rename, the temporary
    /// file is removed when it drops and the previous file is untouched.
    pub fn save(&self, records: &[Announcement]) -> Result<()> {
        let data = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        }
        .map_err(|e| MamoError::Serialization(e.to_string()))?;

        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&data)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        if self.sync_on_save {
            tmp.as_file().sync_all()?;
        }

        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            bytes = data.len(),
            "saved announcements"
        );
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Directory the temporary file is created in (same filesystem as target)
    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn validate(&self, records: &[Announcement]) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in records {
            if record.id == 0 {
                return Err(self.corrupt("record with id 0".to_string()));
            }
            if !seen.insert(record.id) {
                return Err(self.corrupt(format!("duplicate id {}", record.id)));
            }
            if record.title.trim().is_empty() {
                return Err(self.corrupt(format!("record {} has a blank title", record.id)));
            }
            if record.updated_at < record.created_at {
                return Err(self.corrupt(format!(
                    "record {} was updated before it was created",
                    record.id
                )));
            }
        }

        Ok(())
    }

    fn corrupt(&self, reason: String) -> MamoError {
        MamoError::CorruptStorage(format!("{}: {}", self.path.display(), reason))
    }
}
