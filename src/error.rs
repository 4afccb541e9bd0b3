//! Error types for the diagram engine.
//!
//! Only broken caller contracts are errors. Lookup misses (unknown layer or
//! element ids) are reported as `false` / `None` by the managers instead.

use thiserror::Error;

/// Errors raised by the diagram façade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagramError {
    /// Zoom must be finite and strictly positive
    #[error("Invalid zoom {zoom}: zoom must be finite and positive")]
    InvalidZoom { zoom: f64 },

    /// The render surface could not provide a 2D drawing context
    #[error("Render surface has no 2D drawing context")]
    MissingDrawingContext,
}

/// Result type alias for diagram operations
pub type DiagramResult<T> = Result<T, DiagramError>;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A theme colour that is not a valid CSS colour
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A value outside its allowed range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
