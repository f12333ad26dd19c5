//! # truecolor_art
//!
//! Render RGBA pixel grids as colored text for terminals that understand
//! 24-bit (truecolor) escape sequences.
//!
//! ## Features
//!
//! - **Trimmer**: crops a grid to the bounding box of its visible pixels
//! - **Encoder**: emits one color code per color change, two spaces per pixel
//!
//! ## Quick Start
//!
//! ### Encoding raw RGBA data
//!
//! ```ignore
//! use truecolor_art::{truecolor_encode, EncodeOptions};
//!
//! // RGBA image data (4 bytes per pixel)
//! let rgba = vec![255u8, 0, 0, 255, 0, 255, 0, 255]; // red and green pixels
//! let art = truecolor_encode(&rgba, 2, 1, 4, &EncodeOptions::default())?;
//! println!("{}", art);
//! ```
//!
//! ### Trimming transparent borders first
//!
//! ```ignore
//! use truecolor_art::{encode, trim, EncodeOptions, PixelGrid};
//!
//! let grid = PixelGrid::from_raw(&rgba, width, height, 4)?;
//! let art = encode(&trim(&grid)?, &EncodeOptions::default());
//! ```

use thiserror::Error;

pub mod color_text;
pub mod encoder;
pub mod gradient;
pub mod pixel;
pub mod trim;

pub use color_text::{parse_color_text, to_color_text};
pub use encoder::{encode, truecolor_encode, ColorCode, EncodeOptions, GapPolicy, Ground, RESET};
pub use gradient::gradient;
pub use pixel::{Pixel, PixelGrid};
pub use trim::{bounding_box, trim, BoundingBox};

/// Errors that can occur while ingesting, trimming or parsing pixel grids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrueColorError {
    /// Pixel data does not carry exactly four channels (RGBA)
    #[error("invalid channel count: expected 4 (RGBA), got {channels}")]
    InvalidChannelCount { channels: usize },

    /// No pixel in the grid has a non-zero alpha
    #[error("grid has no visible pixels")]
    EmptyContent,

    /// Width times height (times channels) does not fit in memory
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Rows of a grid have differing lengths
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Malformed line in a color text grid
    #[error("color text line {line}: {reason}")]
    ColorText { line: usize, reason: String },
}

/// Result type for truecolor operations.
pub type Result<T> = core::result::Result<T, TrueColorError>;
