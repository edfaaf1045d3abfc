//! Manager Module
//!
//! Owns the in-memory collection and implements the CRUD operations.
//!
//! ## Responsibilities
//! - Load the collection once when opened
//! - Assign ids (`max(existing) + 1`, or 1 when empty)
//! - Validate input before any state changes
//! - Persist the full collection after every mutation
//!
//! If a persist fails the in-memory change is rolled back, so the
//! collection always matches what was last written to disk.

use chrono::Utc;

use crate::config::Config;
use crate::error::{MamoError, Result};
use crate::model::{Announcement, AnnouncementUpdate, Priority};
use crate::storage::JsonStore;

/// CRUD front end over a [`JsonStore`]
///
/// ## Concurrency:
/// Single-threaded. Mutating methods take `&mut self`; nothing coordinates
/// with other processes writing the same file, and the last full rewrite
/// wins.
pub struct AnnouncementManager {
    /// Backing file
    store: JsonStore,

    /// Records in insertion order
    announcements: Vec<Announcement>,
}

impl AnnouncementManager {
    /// Open the manager for the file named in `config`
    pub fn open(config: &Config) -> Result<Self> {
        if config.data_file.as_os_str().is_empty() {
            return Err(MamoError::Config("data file path is empty".to_string()));
        }
        if config.data_file.is_dir() {
            return Err(MamoError::Config(format!(
                "data file {} is a directory",
                config.data_file.display()
            )));
        }

        Self::new(JsonStore::from_config(config))
    }

    /// Load the collection from an explicit store
    pub fn new(store: JsonStore) -> Result<Self> {
        let announcements = store.load()?;
        Ok(Self {
            store,
            announcements,
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create and persist a new announcement
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        priority: Priority,
    ) -> Result<Announcement> {
        let title = title.into();
        Self::validate_title(&title)?;

        let id = self.next_id();
        let announcement = Announcement::new(id, title, content.into(), priority, Utc::now());
        self.announcements.push(announcement.clone());

        if let Err(e) = self.persist() {
            self.announcements.pop();
            return Err(e);
        }

        tracing::info!(id, priority = %priority, "created announcement");
        Ok(announcement)
    }

    /// Apply the supplied fields to announcement `id` and persist
    ///
    /// An update with no fields still refreshes `updated_at`.
    pub fn update(&mut self, id: u64, update: AnnouncementUpdate) -> Result<Announcement> {
        let index = self.position(id)?;
        if let Some(title) = &update.title {
            Self::validate_title(title)?;
        }

        let previous = self.announcements[index].clone();
        self.announcements[index].apply(update, Utc::now());

        if let Err(e) = self.persist() {
            self.announcements[index] = previous;
            return Err(e);
        }

        tracing::info!(id, "updated announcement");
        Ok(self.announcements[index].clone())
    }

    /// Remove announcement `id` and persist; returns the removed record
    pub fn delete(&mut self, id: u64) -> Result<Announcement> {
        let index = self.position(id)?;
        let removed = self.announcements.remove(index);

        if let Err(e) = self.persist() {
            self.announcements.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id, "deleted announcement");
        Ok(removed)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up a single announcement
    pub fn get(&self, id: u64) -> Result<&Announcement> {
        self.position(id).map(|index| &self.announcements[index])
    }

    /// Every announcement in stored order
    pub fn get_all(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Announcements with the given priority, in stored order
    pub fn get_by_priority(&self, priority: Priority) -> Vec<&Announcement> {
        self.announcements
            .iter()
            .filter(|a| a.priority == priority)
            .collect()
    }

    /// Id the next `create` will assign
    pub fn next_id(&self) -> u64 {
        self.announcements
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn len(&self) -> usize {
        self.announcements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
    }

    /// The store this manager writes through
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, id: u64) -> Result<usize> {
        self.announcements
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| {
                tracing::warn!(id, "announcement not found");
                MamoError::NotFound(id)
            })
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(MamoError::InvalidInput("title must not be empty".to_string()));
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.announcements)
    }
}
