use std::io::Write;

use crossterm::style::Color;
use valentine_journey::letter::{LetterScene, LETTER_BODY, LETTER_GREETING, POEM_PLACEHOLDER};

use super::{draw_border, draw_centered, draw_hint, wrap, C_HINT, C_TEXT, C_TITLE};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw<W: Write>(
    out: &mut W,
    letter: &LetterScene,
    now_ms: u64,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    draw_border(out, width, height)?;
    let text_width = width.saturating_sub(8) as usize;

    let mut row = 3;
    draw_centered(out, LETTER_GREETING, row, width, C_TITLE)?;
    row += 2;
    for paragraph in LETTER_BODY {
        for line in wrap(paragraph, text_width) {
            draw_centered(out, &line, row, width, C_TEXT)?;
            row += 1;
        }
    }
    row += 1;

    if letter.loading {
        let frame = SPINNER[(now_ms / 150) as usize % SPINNER.len()];
        draw_centered(out, frame, row, width, Color::Magenta)?;
        row += 1;
    } else if letter.revealed {
        for line in letter.poem.lines().flat_map(|l| wrap(l, text_width)) {
            draw_centered(out, &line, row, width, Color::Magenta)?;
            row += 1;
        }
    } else {
        draw_centered(out, POEM_PLACEHOLDER, row, width, C_HINT)?;
        row += 1;
    }
    row += 1;

    let button = format!("[ {} ]", letter.button_label());
    let color = if letter.loading { C_HINT } else { Color::Red };
    draw_centered(out, &button, row, width, color)?;

    draw_centered(out, "Made with ♥ for You", height.saturating_sub(3), width, C_HINT)?;
    draw_hint(out, "ENTER / G : Poem   Q : Quit", width, height)
}
