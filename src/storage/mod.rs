//! Storage Module
//!
//! Persists the whole collection as one JSON document.
//!
//! ## Responsibilities
//! - Decode the file into records, rejecting anything that does not match
//!   the expected shape
//! - Rewrite the entire file on every save
//! - Never leave a truncated file behind: write to a temporary file in the
//!   same directory, then rename over the target
//!
//! ## File Format
//! ```text
//! [
//!   { "id": 1, "title": ..., "content": ..., "priority": "low|normal|high",
//!     "created_at": "<RFC 3339>", "updated_at": "<RFC 3339>" },
//!   ...
//! ]
//! ```
//!
//! A missing file is an empty collection. Unknown or missing fields,
//! duplicate ids, id 0, blank titles and `updated_at < created_at` are all
//! reported as corruption.

mod json_store;

pub use json_store::JsonStore;
