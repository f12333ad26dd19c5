//! Truecolor text encoder.
//!
//! Every pixel becomes a fixed-width glyph whose background (or foreground)
//! carries the pixel color. A color code is only written when the color of a
//! run changes, which keeps large flat regions cheap to print.

use std::fmt;

use crate::{Pixel, PixelGrid, Result};

/// Escape sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Glyph written for every pixel unless overridden.
pub const DEFAULT_GLYPH: &str = "  ";

/// Which layer of the character cell a color code paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ground {
    Foreground,
    #[default]
    Background,
}

impl Ground {
    /// SGR selector for 24-bit colors on this layer.
    #[inline]
    pub const fn sgr(self) -> &'static str {
        match self {
            Ground::Foreground => "38",
            Ground::Background => "48",
        }
    }
}

/// How a run of one color behaves across invisible pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GapPolicy {
    /// Any invisible pixel ends the run; the next visible pixel always gets a code.
    #[default]
    ReEmit,
    /// Invisible pixels are skipped over; a visible pixel matching the color
    /// before the gap reuses the earlier code.
    ContinueRun,
}

/// A 24-bit color escape sequence.
///
/// Two codes are equal when their RGB triple and ground match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorCode {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub ground: Ground,
}

impl ColorCode {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, ground: Ground) -> Self {
        Self { r, g, b, ground }
    }

    #[inline]
    pub const fn background(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Ground::Background)
    }

    #[inline]
    pub const fn foreground(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Ground::Foreground)
    }

    /// Code for the RGB part of `pixel`; alpha is ignored.
    #[inline]
    pub const fn from_pixel(pixel: Pixel, ground: Ground) -> Self {
        Self::new(pixel.r, pixel.g, pixel.b, ground)
    }

    /// Append `ESC[{38|48};2;{r};{g};{b}m` to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push('\x1b');
        out.push('[');
        out.push_str(self.ground.sgr());
        out.push_str(";2;");
        write_channel(out, self.r);
        out.push(';');
        write_channel(out, self.g);
        out.push(';');
        write_channel(out, self.b);
        out.push('m');
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\x1b[{};2;{};{};{}m",
            self.ground.sgr(),
            self.r,
            self.g,
            self.b
        )
    }
}

/// Options for the truecolor encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Layer painted by the color codes.
    pub ground: Ground,

    /// Text written for each visible pixel.
    pub glyph: String,

    /// Text written for each invisible (alpha 0) pixel.
    pub invisible_glyph: String,

    /// Run handling across invisible pixels.
    pub gap_policy: GapPolicy,

    /// Write a reset before an invisible pixel that follows a visible one, so
    /// the gap shows the terminal's own background instead of the last color.
    /// A reset ends the current run under either gap policy.
    pub clear_gaps: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ground: Ground::Background,
            glyph: DEFAULT_GLYPH.to_string(),
            invisible_glyph: DEFAULT_GLYPH.to_string(),
            gap_policy: GapPolicy::ReEmit,
            clear_gaps: false,
        }
    }
}

/// Encode a pixel grid into a printable truecolor string.
///
/// Rows are written top to bottom, each terminated by `'\n'`; a single
/// [`RESET`] closes the output. A grid with no rows encodes to `""`; a grid
/// with rows but zero width still gets one line break per row.
///
/// # Example
/// ```ignore
/// use truecolor_art::{encode, EncodeOptions, Pixel, PixelGrid};
///
/// let grid = PixelGrid::filled(1, 1, Pixel::opaque(255, 0, 0));
/// assert_eq!(encode(&grid, &EncodeOptions::default()), "\x1b[48;2;255;0;0m  \n\x1b[0m");
/// ```
#[must_use = "this returns the encoded string"]
pub fn encode(grid: &PixelGrid, opts: &EncodeOptions) -> String {
    if grid.height() == 0 {
        return String::new();
    }

    // Glyphs and line breaks are exact; color codes are at most 19 bytes each
    // and usually rare, so reserve a little headroom for them.
    let glyph_len = opts.glyph.len().max(opts.invisible_glyph.len());
    let base = grid.height() * (grid.width() * glyph_len + 1) + RESET.len();
    let mut out = String::with_capacity(base + base / 4);

    for row in grid.rows() {
        encode_row(&mut out, row, opts);
        out.push('\n');
    }

    out.push_str(RESET);
    out
}

/// Validate raw decoder output and encode it in one step.
///
/// # Arguments
/// * `data` - Raw pixel bytes (R, G, B, A per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Channels per pixel as reported by the decoder; must be 4
/// * `opts` - Encoding options
#[must_use = "this returns the encoded string"]
pub fn truecolor_encode(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    opts: &EncodeOptions,
) -> Result<String> {
    let grid = PixelGrid::from_raw(data, width, height, channels)?;
    Ok(encode(&grid, opts))
}

fn encode_row(out: &mut String, row: &[Pixel], opts: &EncodeOptions) {
    // Runs never cross a line break.
    let mut last: Option<(u8, u8, u8)> = None;
    let mut painted = false;

    for &pixel in row {
        if !pixel.is_visible() {
            if opts.clear_gaps && painted {
                out.push_str(RESET);
                painted = false;
                last = None;
            }
            if opts.gap_policy == GapPolicy::ReEmit {
                last = None;
            }
            out.push_str(&opts.invisible_glyph);
            continue;
        }

        let rgb = pixel.rgb();
        if last != Some(rgb) {
            ColorCode::from_pixel(pixel, opts.ground).write_to(out);
            last = Some(rgb);
        }
        painted = true;
        out.push_str(&opts.glyph);
    }
}

/// Decimal digits of a channel value without leading zeros.
#[inline]
fn write_channel(out: &mut String, n: u8) {
    if n >= 100 {
        out.push(char::from(b'0' + n / 100));
    }
    if n >= 10 {
        out.push(char::from(b'0' + (n / 10) % 10));
    }
    out.push(char::from(b'0' + n % 10));
}
