//! Error types for the Nova3D client
//!
//! This module defines the error types used throughout the client,
//! including host environment resolution, renderer creation, and
//! collection management.

use std::fmt;

/// Result type for Nova3D client operations
pub type Nova3dResult<T> = Result<T, Nova3dError>;

/// Nova3D client errors
#[derive(Debug, Clone)]
pub enum Nova3dError {
    /// The canvas has no owning document (host chain broken at the first link)
    MissingDocument,

    /// The document has no window view (host chain broken at the second link)
    MissingWindow,

    /// Backend-specific error (WebGL, Vulkan, etc.)
    BackendError(String),

    /// Invalid resource (geometry, item, rig, scene item, etc.)
    InvalidResource(String),

    /// Initialization failed (renderer, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Nova3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nova3dError::MissingDocument => write!(f, "Canvas has no owning document"),
            Nova3dError::MissingWindow => write!(f, "Document has no window view"),
            Nova3dError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Nova3dError::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Nova3dError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Nova3dError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
