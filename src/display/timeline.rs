use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use valentine_journey::entities::Memory;
use valentine_journey::timeline::{TimelineScene, CLOSING_MESSAGE};

use super::{draw_border, draw_centered, draw_hint, wrap, C_HINT, C_TEXT, C_TITLE};

const C_DATE: Color = Color::Magenta;
const C_SELECTED: Color = Color::Yellow;
const C_GAUGE: Color = Color::Red;

/// Rows taken by one collapsed card: date, title, description, spacer.
const CARD_ROWS: u16 = 4;

pub fn draw<W: Write>(
    out: &mut W,
    t: &TimelineScene,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    draw_border(out, width, height)?;
    draw_centered(out, "Our time together", 0, width, C_TITLE)?;
    draw_gauge(out, t, height)?;

    if t.expanded {
        if let Some(memory) = t.selected_memory() {
            draw_expanded(out, memory, width, height)?;
        }
        return draw_hint(out, "ENTER / ESC : Close", width, height);
    }

    // Scroll so the selected card stays on screen.
    let visible = (height.saturating_sub(4) / CARD_ROWS).max(1) as usize;
    let first = t.selected.saturating_sub(visible.saturating_sub(1));
    let text_width = width.saturating_sub(8) as usize;

    let mut row = 2;
    for (i, memory) in t.memories.iter().enumerate().skip(first).take(visible) {
        draw_card(out, memory, i == t.selected, row, text_width)?;
        row += CARD_ROWS;
    }
    if t.memories.len() < first + visible {
        draw_closing(out, t.on_closing_message(), row, width, height)?;
    }

    let hint = if t.can_advance() {
        "↑ ↓ : Scroll   ENTER : Open   → / N : Continue   Q : Quit"
    } else {
        "↑ ↓ : Scroll   ENTER : Open   Q : Quit"
    };
    draw_hint(out, hint, width, height)
}

/// Vertical progress line on the left wall.
fn draw_gauge<W: Write>(out: &mut W, t: &TimelineScene, height: u16) -> std::io::Result<()> {
    let span = height.saturating_sub(4);
    let filled = (t.progress() * span as f32).round() as u16;
    out.queue(style::SetForegroundColor(C_GAUGE))?;
    for row in 0..filled.min(span) {
        out.queue(cursor::MoveTo(0, 2 + row))?;
        out.queue(Print("┃"))?;
    }
    Ok(())
}

fn draw_card<W: Write>(
    out: &mut W,
    memory: &Memory,
    selected: bool,
    row: u16,
    text_width: usize,
) -> std::io::Result<()> {
    let marker = if selected { "▶ " } else { "  " };
    out.queue(cursor::MoveTo(3, row))?;
    out.queue(style::SetForegroundColor(if selected { C_SELECTED } else { C_DATE }))?;
    out.queue(Print(format!("{marker}◷ {}", memory.date)))?;

    out.queue(cursor::MoveTo(5, row + 1))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print(&memory.title))?;

    // Collapsed cards show only the first wrapped line.
    if let Some(line) = wrap(&memory.description, text_width).first() {
        out.queue(cursor::MoveTo(5, row + 2))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

fn draw_closing<W: Write>(
    out: &mut W,
    selected: bool,
    row: u16,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let color = if selected { C_TITLE } else { C_HINT };
    for (i, line) in CLOSING_MESSAGE.iter().enumerate() {
        let r = row + i as u16;
        if r >= height.saturating_sub(2) {
            break;
        }
        draw_centered(out, line, r, width, color)?;
    }
    Ok(())
}

fn draw_expanded<W: Write>(
    out: &mut W,
    memory: &Memory,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let text_width = width.saturating_sub(10) as usize;
    let mut row = (height / 2).saturating_sub(4);

    draw_centered(out, &memory.date, row, width, C_DATE)?;
    row += 1;
    draw_centered(out, &memory.title, row, width, C_SELECTED)?;
    row += 2;
    for line in wrap(&memory.description, text_width) {
        draw_centered(out, &line, row, width, C_TEXT)?;
        row += 1;
    }
    row += 1;
    draw_centered(out, &format!("📷 {}", memory.image), row, width, C_HINT)?;
    Ok(())
}
