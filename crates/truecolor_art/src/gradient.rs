//! Diagonal color gradients, handy as test cards for a terminal.

use crate::{Pixel, PixelGrid};

/// Build an `n` x `n` opaque grid blending `start` (top-left) into `end`
/// (bottom-right) along the diagonal.
///
/// The cell at row `i`, column `j` gets `start + (end - start) * (i + j) / (2 * (n - 1))`
/// per channel, truncated toward zero. A 1x1 gradient is just `start`.
pub fn gradient(n: usize, start: (u8, u8, u8), end: (u8, u8, u8)) -> PixelGrid {
    let steps = 2 * n.saturating_sub(1);
    let mut pixels = Vec::with_capacity(n * n);

    for i in 0..n {
        for j in 0..n {
            let t = i + j;
            pixels.push(Pixel::opaque(
                lerp(start.0, end.0, t, steps),
                lerp(start.1, end.1, t, steps),
                lerp(start.2, end.2, t, steps),
            ));
        }
    }

    PixelGrid::new(n, n, pixels).unwrap_or_default()
}

#[inline]
fn lerp(from: u8, to: u8, t: usize, steps: usize) -> u8 {
    if steps == 0 {
        return from;
    }
    let (t, steps) = (t as i64, steps as i64);
    // Numerator stays non-negative, so the division truncates toward zero.
    let value = (i64::from(from) * (steps - t) + i64::from(to) * t) / steps;
    value.clamp(0, 255) as u8
}
