use thiserror::Error;

use crate::element::{ElementKind, Field};

/// Errors that can occur while turning the scene into a raster image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to decode the SVG document: {0}")]
    Decode(#[from] resvg::usvg::Error),

    #[error("Cannot allocate a {width}x{height} pixmap")]
    Allocate { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export worker stopped before finishing")]
    Cancelled,
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A property write that does not fit the element it targets
#[derive(Debug, Error, PartialEq)]
pub enum PropertyError {
    #[error("{field:?} does not apply to a {kind}")]
    NotApplicable { field: Field, kind: ElementKind },
}
