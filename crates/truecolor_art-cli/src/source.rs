//! Turning image sources into pixel grids.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::error::Error;
use std::path::Path;
use tracing::debug;
use truecolor_art::PixelGrid;

/// Decode any image format the `image` crate understands into an RGBA grid.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, Box<dyn Error>> {
    let img = image::load_from_memory(bytes)?;
    debug!(color = ?img.color(), "decoded image");

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let channels = usize::from(rgba.sample_layout().channels);

    Ok(PixelGrid::from_raw(
        rgba.as_raw(),
        width as usize,
        height as usize,
        channels,
    )?)
}

/// Read and decode an image file.
pub fn open_path(path: &Path) -> Result<PixelGrid, Box<dyn Error>> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read image file");
    decode_image(&bytes).map_err(|e| format!("Failed to decode '{}': {}", path.display(), e).into())
}

/// Decode a base64 payload holding an encoded image.
///
/// Surrounding and embedded whitespace is ignored, so wrapped payloads work.
pub fn decode_base64(payload: &str) -> Result<PixelGrid, Box<dyn Error>> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| format!("Invalid base64 payload: {}", e))?;
    debug!(bytes = bytes.len(), "decoded base64 payload");
    decode_image(&bytes)
}
