//! Plain-text color grids.
//!
//! One line per row, each pixel written as `(r,g,b)` and separated by `", "`:
//!
//! ```text
//! (100,20,30), (105,31,38)
//! (105,31,38), (111,43,46)
//! ```
//!
//! The format has no alpha channel; parsed pixels are opaque.

use crate::{Pixel, PixelGrid, Result, TrueColorError};

/// Render the RGB part of every pixel in the color text format.
pub fn to_color_text(grid: &PixelGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|p| format!("({},{},{})", p.r, p.g, p.b))
            .collect();
        out.push_str(&cells.join(", "));
        out.push('\n');
    }
    out
}

/// Parse color text into an opaque grid.
///
/// Trailing blank lines are ignored; any other malformed line is reported
/// with its 1-based line number.
pub fn parse_color_text(text: &str) -> Result<PixelGrid> {
    let mut rows = Vec::new();
    for (idx, line) in text.trim_end().lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            return Err(TrueColorError::ColorText {
                line: line_no,
                reason: "empty row".to_string(),
            });
        }
        let row = line
            .split(", ")
            .map(|cell| parse_cell(cell.trim()))
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(|reason| TrueColorError::ColorText {
                line: line_no,
                reason,
            })?;
        rows.push(row);
    }
    PixelGrid::from_rows(rows)
}

fn parse_cell(cell: &str) -> core::result::Result<Pixel, String> {
    let inner = cell
        .strip_prefix('(')
        .and_then(|c| c.strip_suffix(')'))
        .ok_or_else(|| format!("expected `(r,g,b)`, found `{cell}`"))?;

    let mut channels = [0u8; 3];
    let mut parts = inner.split(',');
    for channel in &mut channels {
        let part = parts
            .next()
            .ok_or_else(|| format!("`{cell}` has fewer than 3 channels"))?
            .trim();
        *channel = part
            .parse()
            .map_err(|_| format!("`{part}` is not a channel value (0-255)"))?;
    }
    if parts.next().is_some() {
        return Err(format!("`{cell}` has more than 3 channels"));
    }

    Ok(Pixel::opaque(channels[0], channels[1], channels[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let grid = PixelGrid::from_rows(vec![
            vec![Pixel::opaque(1, 2, 3), Pixel::new(40, 50, 60, 0)],
            vec![Pixel::opaque(255, 255, 255), Pixel::opaque(0, 0, 0)],
        ])
        .unwrap();
        assert_eq!(
            to_color_text(&grid),
            "(1,2,3), (40,50,60)\n(255,255,255), (0,0,0)\n"
        );
    }

    #[test]
    fn test_parse_makes_opaque_pixels() {
        let grid = parse_color_text("(1,2,3), (4,5,6)\n\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.row(0), &[Pixel::opaque(1, 2, 3), Pixel::opaque(4, 5, 6)]);
    }

    #[test]
    fn test_parse_reports_line() {
        let err = parse_color_text("(1,2,3)\n(1,2,300)\n").unwrap_err();
        assert!(matches!(err, TrueColorError::ColorText { line: 2, .. }));

        let err = parse_color_text("(1,2,3)\n\n(1,2,3)\n").unwrap_err();
        assert!(matches!(err, TrueColorError::ColorText { line: 2, .. }));

        let err = parse_color_text("(1,2)\n").unwrap_err();
        assert!(matches!(err, TrueColorError::ColorText { line: 1, .. }));

        let err = parse_color_text("1,2,3\n").unwrap_err();
        assert!(matches!(err, TrueColorError::ColorText { line: 1, .. }));
    }

    #[test]
    fn test_parse_ragged() {
        let err = parse_color_text("(1,2,3), (1,2,3)\n(1,2,3)\n").unwrap_err();
        assert_eq!(
            err,
            TrueColorError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_color_text("").unwrap().is_empty());
    }
}
