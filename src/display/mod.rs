/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// application.  No scene logic is performed; this module only translates
/// state into terminal commands.

mod game;
mod intro;
mod letter;
mod timeline;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use valentine_journey::app::{ActiveScene, App};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkMagenta;
const C_TITLE: Color = Color::Magenta;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Inner play area (inside the border), in terminal cells.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Field {
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Field {
            left: 1,
            top: 2,
            width: width.saturating_sub(2),
            height: height.saturating_sub(4),
        }
    }

    /// Cell for a position given in field percentages, or `None` when it
    /// falls outside the visible area.
    pub fn cell(&self, x_pct: f32, y_pct: f32) -> Option<(u16, u16)> {
        if !(0.0..100.0).contains(&y_pct) || self.width == 0 || self.height == 0 {
            return None;
        }
        let col = (x_pct.clamp(0.0, 99.9) / 100.0 * self.width as f32) as u16;
        let row = (y_pct / 100.0 * self.height as f32) as u16;
        Some((self.left + col, self.top + row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    app: &App,
    now_ms: u64,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match &app.active {
        ActiveScene::Intro(intro) => intro::draw(out, intro, now_ms, width, height)?,
        ActiveScene::Timeline(t) => timeline::draw(out, t, width, height)?,
        ActiveScene::Game(g) => game::draw(out, g, Field::for_terminal(width, height), width, height)?,
        ActiveScene::Letter(l) => letter::draw(out, l, now_ms, width, height)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Shared helpers ────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("╭{}╮", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("╰{}╯", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    text: &str,
    row: u16,
    width: u16,
    color: Color,
) -> std::io::Result<()> {
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, text: &str, width: u16, height: u16) -> std::io::Result<()> {
    draw_centered(out, text, height.saturating_sub(1), width, C_HINT)
}

/// Greedy word wrap.  Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
