//! Model Module
//!
//! The single persisted record type and its priority classification.
//!
//! ## On-disk shape (one element of the top-level JSON array)
//! ```text
//! {
//!   "id": 1,
//!   "title": "Welcome",
//!   "content": "Hi there",
//!   "priority": "normal",
//!   "created_at": "2026-10-16T09:30:00.123456789Z",
//!   "updated_at": "2026-10-16T09:30:00.123456789Z"
//! }
//! ```

mod announcement;
mod priority;
pub mod timestamp;

pub use announcement::{Announcement, AnnouncementUpdate};
pub use priority::Priority;
