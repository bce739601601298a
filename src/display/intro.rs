use std::io::Write;

use crossterm::style::Color;
use valentine_journey::app::IntroScene;

use super::{draw_border, draw_centered, draw_hint, C_TEXT, C_TITLE};

pub fn draw<W: Write>(
    out: &mut W,
    intro: &IntroScene,
    now_ms: u64,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    draw_border(out, width, height)?;

    let cy = height / 2;
    // Heart bobs one row every 1.5 s.
    let bob = ((now_ms.saturating_sub(intro.shown_at_ms) / 1500) % 2) as u16;
    draw_centered(out, "♥", cy.saturating_sub(5 + bob), width, Color::Red)?;

    draw_centered(out, "Happy Valentine's", cy.saturating_sub(2), width, C_TITLE)?;
    draw_centered(out, "Day My Love", cy.saturating_sub(1), width, Color::Magenta)?;
    draw_centered(out, "[ Enter our world ]", cy + 2, width, C_TEXT)?;

    draw_hint(out, "ENTER / SPACE : Start   Q : Quit", width, height)
}
