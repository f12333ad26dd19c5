//! Crop a grid to the smallest rectangle holding all visible pixels.

use crate::{PixelGrid, Result, TrueColorError};

/// Inclusive row/column bounds of the visible content of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.row_end - self.row_start + 1
    }
}

/// Compute the bounding box of all pixels with non-zero alpha.
///
/// Rows and columns are scanned independently over the whole grid, so an
/// irregular visible region yields its enclosing rectangle. Returns `None`
/// when nothing is visible.
pub fn bounding_box(grid: &PixelGrid) -> Option<BoundingBox> {
    let mut rows: Option<(usize, usize)> = None;
    let mut cols: Option<(usize, usize)> = None;

    for (y, row) in grid.rows().enumerate() {
        let mut visible = row
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_visible())
            .map(|(x, _)| x);

        let Some(first) = visible.next() else {
            continue;
        };
        let last = visible.last().unwrap_or(first);

        rows = Some(rows.map_or((y, y), |(start, _)| (start, y)));
        cols = Some(cols.map_or((first, last), |(start, end)| {
            (start.min(first), end.max(last))
        }));
    }

    let ((row_start, row_end), (col_start, col_end)) = (rows?, cols?);
    Some(BoundingBox {
        row_start,
        row_end,
        col_start,
        col_end,
    })
}

/// Return the sub-grid tightly bounding all visible pixels.
///
/// Fails with [`TrueColorError::EmptyContent`] when no pixel has a non-zero
/// alpha. The input grid is left untouched.
pub fn trim(grid: &PixelGrid) -> Result<PixelGrid> {
    let bounds = bounding_box(grid).ok_or(TrueColorError::EmptyContent)?;
    Ok(grid.crop(&bounds))
}
