#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use truecolor_art::{encode, trim, EncodeOptions, GapPolicy, Ground, PixelGrid, RESET};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    channels: u8,
    pixels: Vec<u8>,
    foreground: bool,
    continue_run: bool,
    clear_gaps: bool,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).min(64);
    let height = (input.height as usize).min(64);
    let channels = input.channels as usize % 6;

    let expected_size = width * height * channels;
    if input.pixels.len() < expected_size {
        return;
    }

    // Ingestion must reject anything that isn't RGBA, never panic
    let Ok(grid) = PixelGrid::from_raw(&input.pixels[..expected_size], width, height, channels)
    else {
        return;
    };

    let opts = EncodeOptions {
        ground: if input.foreground {
            Ground::Foreground
        } else {
            Ground::Background
        },
        gap_policy: if input.continue_run {
            GapPolicy::ContinueRun
        } else {
            GapPolicy::ReEmit
        },
        clear_gaps: input.clear_gaps,
        ..EncodeOptions::default()
    };

    let out = encode(&grid, &opts);
    if height > 0 {
        assert!(out.ends_with(RESET));
        assert_eq!(out.matches('\n').count(), height);
    }

    if let Ok(trimmed) = trim(&grid) {
        assert!(trimmed.width() <= width && trimmed.height() <= height);
        assert_eq!(trim(&trimmed).as_ref(), Ok(&trimmed));
    }
});
