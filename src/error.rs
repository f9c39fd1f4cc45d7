//! Error types for design file screening
//!
//! This module provides error handling for design file analysis. All errors
//! include error codes for categorization and enough context to tell a user
//! whether the file itself needs fixing or the analysis simply found nothing.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and container errors
//! - **E2xxx**: JSON parsing and schema errors
//! - **E3xxx**: Scene structure errors
//! - **E4xxx**: Unsupported formats
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: ZIP container format error
//! - `E2001`: JSON parsing error
//! - `E3001`: Scene not analyzable (required collections entirely absent)
//! - `E4001`: Unsupported file format
//!
//! Note that a sparse scene — present but empty collections, no garment
//! signals — is NOT an error. Analysis of such a scene succeeds with a
//! zero-confidence report; only a structurally unusable input fails.

use std::io;
use thiserror::Error;

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when screening design files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Disk read error
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP container error
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Corrupted `.zprj`/`.zpac` container
    /// - Truncated archive
    /// - File is not actually a ZIP archive
    ///
    /// **Suggestions**:
    /// - Re-export the project file from the authoring tool
    /// - Verify the file was not truncated during transfer
    #[error("[E1002] container error: {0}")]
    Container(#[from] zip::result::ZipError),

    /// JSON parsing error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed JSON syntax
    /// - Binary glTF (.glb) passed where JSON glTF was expected
    /// - Wrong value type for a known glTF field
    #[error("[E2001] JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scene graph cannot be interpreted for analysis
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Document parsed as JSON but carries none of the glTF collections
    ///   the analyzer consumes (meshes, materials, nodes)
    /// - A non-glTF JSON document renamed to `.gltf`
    ///
    /// **Suggestions**:
    /// - Check the file was exported as glTF 2.0
    /// - A valid but empty scene is analyzable; this error means the
    ///   document does not look like a scene at all
    #[error("[E3001] invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported design file format
    ///
    /// **Error Code**: E4001
    ///
    /// **Common Causes**:
    /// - File extension not among .gltf, .zprj, .zpac, .obj
    /// - Missing file extension
    #[error("[E4001] unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Create an InvalidInput error describing what made the scene unusable
    ///
    /// # Arguments
    /// * `message` - Description of the structural problem
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Create an UnsupportedFormat error for a file extension
    ///
    /// # Arguments
    /// * `extension` - The unrecognized file extension (without the dot)
    pub fn unsupported_format(extension: &str) -> Self {
        Error::UnsupportedFormat(format!(
            "file extension '{}' is not supported. Supported formats: .gltf, .zprj, .zpac, .obj",
            extension
        ))
    }
}
