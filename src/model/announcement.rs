//! Announcement record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, Priority};

/// A single announcement
///
/// `id` and `created_at` never change after creation. `updated_at` is
/// refreshed by every successful update and is never earlier than
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub(crate) fn new(
        id: u64,
        title: String,
        content: String,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            priority,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields and refresh `updated_at`
    pub(crate) fn apply(&mut self, update: AnnouncementUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        // Clock may step backwards between runs
        self.updated_at = now.max(self.created_at);
    }
}

/// Partial change to an announcement; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<Priority>,
}

impl AnnouncementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.priority.is_none()
    }
}
