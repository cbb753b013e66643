//! Diocese Importer Library
//!
//! A Rust library for converting a diocesan pastoral-zone directory — a flat,
//! semi-structured text document listing pastoral zones, their parishes and
//! clergy staffing lines — into structured records.
//!
//! This library provides tools for:
//! - Parsing the directory text with a best-effort, line-oriented heuristic parser
//! - Deriving stable slug and code identifiers for zones and parishes
//! - Building persistable zone/parish records from parsed entries
//! - Committing imports as atomic, generation-swapped JSON snapshots
//! - Comprehensive error handling for the surrounding import pipeline
//!
//! The parser itself is pure and total: malformed input never raises an error,
//! it simply yields fewer (or zero) records. Its output is a proposal for human
//! review, not validated ground truth.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod identifiers;
        pub mod json_store;
        pub mod record_builder;
        pub mod zone_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ParsedParish, ParsedZone, StaffEntry};
pub use app::services::zone_parser::{parse_zones, parse_zones_with_stats};
pub use config::Config;

/// Result type alias for the diocese importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the import pipeline surrounding the parser
///
/// The parser never produces these; they cover I/O, configuration, the JSON
/// store, and record validation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Record validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// JSON store error
    #[error("Store error: {message}")]
    Store { message: String },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
