use pretty_assertions::assert_eq;
use truecolor_art::*;

const A: Pixel = Pixel::opaque(10, 20, 30);
const B: Pixel = Pixel::opaque(200, 100, 0);
const GAP: Pixel = Pixel::TRANSPARENT;

fn count_codes(s: &str) -> usize {
    s.matches("\x1b[48;2;").count() + s.matches("\x1b[38;2;").count()
}

fn row(pixels: &[Pixel]) -> PixelGrid {
    PixelGrid::from_rows(vec![pixels.to_vec()]).unwrap()
}

#[test]
fn test_single_color_row_emits_one_code() {
    let width = 7;
    let grid = PixelGrid::filled(width, 1, A);
    let out = encode(&grid, &EncodeOptions::default());

    assert_eq!(count_codes(&out), 1);
    assert_eq!(out.matches(RESET).count(), 1);
    assert_eq!(
        out,
        format!("\x1b[48;2;10;20;30m{}\n\x1b[0m", "  ".repeat(width))
    );
}

#[test]
fn test_color_transitions() {
    let out = encode(&row(&[A, A, B, B, A]), &EncodeOptions::default());
    assert_eq!(count_codes(&out), 3);
    assert_eq!(
        out,
        "\x1b[48;2;10;20;30m    \x1b[48;2;200;100;0m    \x1b[48;2;10;20;30m  \n\x1b[0m"
    );
}

#[test]
fn test_invisible_pixels_emit_no_codes() {
    let grid = PixelGrid::filled(3, 2, Pixel::new(255, 255, 255, 0));
    let out = encode(&grid, &EncodeOptions::default());
    assert_eq!(count_codes(&out), 0);
    assert_eq!(out, "      \n      \n\x1b[0m");
}

#[test]
fn test_invisible_grid_still_encodes_but_does_not_trim() {
    let grid = PixelGrid::filled(2, 2, GAP);
    assert_eq!(trim(&grid), Err(TrueColorError::EmptyContent));
    assert_eq!(count_codes(&encode(&grid, &EncodeOptions::default())), 0);
}

#[test]
fn test_one_line_per_row() {
    let grid = gradient(6, (0, 0, 0), (255, 255, 255));
    let out = encode(&grid, &EncodeOptions::default());
    let body = out.strip_suffix(RESET).unwrap();
    assert_eq!(body.matches('\n').count(), 6);
    assert!(body.ends_with('\n'));
}

#[test]
fn test_zero_width_grid_keeps_one_line_per_row() {
    let grid = PixelGrid::from_rows(vec![vec![]; 3]).unwrap();
    let out = encode(&grid, &EncodeOptions::default());
    assert_eq!(out.matches('\n').count(), 3);
    assert_eq!(out, "\n\n\n\x1b[0m");

    let raw = truecolor_encode(&[], 0, 2, 4, &EncodeOptions::default()).unwrap();
    assert_eq!(raw, "\n\n\x1b[0m");
}

#[test]
fn test_oversized_raw_input_is_an_error() {
    assert_eq!(
        truecolor_encode(&[], usize::MAX / 2, 4, 4, &EncodeOptions::default()),
        Err(TrueColorError::InvalidDimensions {
            width: usize::MAX / 2,
            height: 4
        })
    );
}

#[test]
fn test_end_to_end_red() {
    let grid = PixelGrid::from_rows(vec![vec![Pixel::new(255, 0, 0, 255)]]).unwrap();
    assert_eq!(
        encode(&grid, &EncodeOptions::default()),
        "\x1b[48;2;255;0;0m  \n\x1b[0m"
    );
}

#[test]
fn test_runs_restart_on_each_row() {
    let grid = PixelGrid::filled(2, 2, A);
    let out = encode(&grid, &EncodeOptions::default());
    assert_eq!(count_codes(&out), 2);
    assert_eq!(
        out,
        "\x1b[48;2;10;20;30m    \n\x1b[48;2;10;20;30m    \n\x1b[0m"
    );
}

#[test]
fn test_gap_policy_reemit() {
    let out = encode(&row(&[A, GAP, A]), &EncodeOptions::default());
    assert_eq!(count_codes(&out), 2);
    assert_eq!(
        out,
        "\x1b[48;2;10;20;30m    \x1b[48;2;10;20;30m  \n\x1b[0m"
    );
}

#[test]
fn test_gap_policy_continue_run() {
    let opts = EncodeOptions {
        gap_policy: GapPolicy::ContinueRun,
        ..EncodeOptions::default()
    };
    let out = encode(&row(&[A, GAP, A, GAP, B]), &opts);
    assert_eq!(count_codes(&out), 2);
    assert_eq!(
        out,
        "\x1b[48;2;10;20;30m        \x1b[48;2;200;100;0m  \n\x1b[0m"
    );
}

#[test]
fn test_alpha_is_ignored_for_run_equality() {
    let out = encode(
        &row(&[Pixel::new(1, 1, 1, 255), Pixel::new(1, 1, 1, 3)]),
        &EncodeOptions::default(),
    );
    assert_eq!(count_codes(&out), 1);
}

#[test]
fn test_foreground_and_custom_glyphs() {
    let opts = EncodeOptions {
        ground: Ground::Foreground,
        glyph: "██".to_string(),
        invisible_glyph: "..".to_string(),
        ..EncodeOptions::default()
    };
    let out = encode(&row(&[GAP, B, B]), &opts);
    assert_eq!(out, "..\x1b[38;2;200;100;0m████\n\x1b[0m");
}

#[test]
fn test_empty_grid_encodes_to_empty_string() {
    let grid = PixelGrid::from_raw(&[], 0, 0, 4).unwrap();
    assert_eq!(encode(&grid, &EncodeOptions::default()), "");
    assert_eq!(
        truecolor_encode(&[], 0, 0, 4, &EncodeOptions::default()),
        Ok(String::new())
    );
}

#[test]
fn test_channel_count_checked_at_ingestion() {
    let rgb = vec![0u8; 12];
    assert_eq!(
        truecolor_encode(&rgb, 2, 2, 3, &EncodeOptions::default()),
        Err(TrueColorError::InvalidChannelCount { channels: 3 })
    );
}

#[test]
fn test_decoded_png_round_trip() {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    let mut img = RgbaImage::from_pixel(4, 3, Rgba([0, 0, 0, 0]));
    img.put_pixel(1, 1, Rgba([255, 0, 0, 255]));
    img.put_pixel(2, 1, Rgba([255, 0, 0, 255]));

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    let (width, height) = decoded.dimensions();
    let grid =
        PixelGrid::from_raw(&decoded.into_raw(), width as usize, height as usize, 4).unwrap();

    let out = encode(&trim(&grid).unwrap(), &EncodeOptions::default());
    assert_eq!(out, "\x1b[48;2;255;0;0m    \n\x1b[0m");
}
