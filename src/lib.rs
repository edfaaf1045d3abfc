//! # Mamo
//!
//! Announcement management backed by a single local JSON file:
//! - Create/list/view/update/delete of announcement records
//! - Priority classification (low, normal, high)
//! - Whole-file rewrite on every mutation via temp file + atomic rename
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              CLI (mamo)                  │
//! │      parse args, render, exit codes      │
//! └────────────────────┬────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────┐
//! │          AnnouncementManager             │
//! │   in-memory Vec, ids, validation         │
//! └────────────────────┬────────────────────┘
//!                      │ load once / save per mutation
//! ┌────────────────────▼────────────────────┐
//! │              JsonStore                   │
//! │   announcements.json (tmp + rename)      │
//! └─────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod manager;
pub mod display;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MamoError, Result};
pub use config::Config;
pub use manager::AnnouncementManager;
pub use model::{Announcement, AnnouncementUpdate, Priority};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Mamo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
