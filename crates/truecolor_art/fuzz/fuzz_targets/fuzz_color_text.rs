#![no_main]

use libfuzzer_sys::fuzz_target;
use truecolor_art::{parse_color_text, to_color_text};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // The parser should never panic, and whatever it accepts must print back
    // to text it accepts again.
    if let Ok(grid) = parse_color_text(text) {
        let reparsed = parse_color_text(&to_color_text(&grid));
        assert_eq!(reparsed.as_ref(), Ok(&grid));
    }
});
