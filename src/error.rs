//! Error types for Mamo
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MamoError
pub type Result<T> = std::result::Result<T, MamoError>;

/// Unified error type for Mamo operations
#[derive(Debug, Error)]
pub enum MamoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid priority '{0}'. Must be one of: low, normal, high")]
    InvalidPriority(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Announcement with ID {0} not found")]
    NotFound(u64),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt storage: {0}")]
    CorruptStorage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MamoError {
    /// Process exit status the CLI uses when this error ends a command
    pub fn exit_code(&self) -> i32 {
        match self {
            MamoError::NotFound(_) => 1,
            MamoError::InvalidInput(_) | MamoError::InvalidPriority(_) => 2,
            MamoError::CorruptStorage(_) => 3,
            MamoError::Io(_) | MamoError::Serialization(_) | MamoError::Config(_) => 4,
        }
    }
}
