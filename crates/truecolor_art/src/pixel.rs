//! RGBA pixel and row-major pixel grid types.
//!
//! A [`PixelGrid`] is the single input shape accepted by the trimmer and the
//! encoder. Raw decoder output enters through [`PixelGrid::from_raw`], which is
//! the only place the four-channel layout is checked.

use crate::{trim::BoundingBox, Result, TrueColorError};

/// Number of channels every ingested pixel must carry (R, G, B, A).
pub const CHANNELS: usize = 4;

/// One 8-bit RGBA pixel. Alpha only matters as zero (invisible) or non-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel (alpha 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.a != 0
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<(u8, u8, u8, u8)> for Pixel {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Rectangular, row-major grid of [`Pixel`]s.
///
/// Every row has exactly `width` pixels. Grids with zero pixels are allowed:
/// the trimmer rejects them, and the encoder renders a zero-height grid as an
/// empty string and a zero-width one as bare line breaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(TrueColorError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid of `width` x `height` copies of `pixel`.
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("grid dimensions {width}x{height} overflow usize"));
        Self {
            width,
            height,
            pixels: vec![pixel; len],
        }
    }

    /// Ingest interleaved 8-bit channel data as produced by an image decoder.
    ///
    /// # Arguments
    /// * `data` - Raw pixel bytes, `channels` bytes per pixel
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Channels per pixel; anything other than 4 is rejected
    pub fn from_raw(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Self> {
        if channels != CHANNELS {
            return Err(TrueColorError::InvalidChannelCount { channels });
        }
        let expected = pixel_count(width, height)?
            .checked_mul(CHANNELS)
            .ok_or(TrueColorError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(TrueColorError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(CHANNELS)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from nested rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(TrueColorError::RaggedRows {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            pixels.extend(cells);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid holds no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Pixels of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Copy out the rectangle described by `bounds` (inclusive on both axes).
    ///
    /// `bounds` must lie inside the grid; use [`crate::bounding_box`] to obtain one.
    pub fn crop(&self, bounds: &BoundingBox) -> PixelGrid {
        let width = bounds.width();
        let height = bounds.height();
        let mut pixels = Vec::with_capacity(width * height);
        for y in bounds.row_start..=bounds.row_end {
            pixels.extend_from_slice(&self.row(y)[bounds.col_start..=bounds.col_end]);
        }
        PixelGrid {
            width,
            height,
            pixels,
        }
    }

    /// Interleaved RGBA bytes, the inverse of [`PixelGrid::from_raw`].
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
            .into_iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }
}

/// `width * height`, or `InvalidDimensions` if that overflows.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(TrueColorError::InvalidDimensions { width, height })
}
