use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use valentine_journey::compute::{PLAYER_Y, WIN_SCORE};
use valentine_journey::entities::{GameItem, GameStatus, ItemKind};
use valentine_journey::game::GameScene;

use super::{draw_border, draw_centered, draw_hint, Field};

const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_HEART: Color = Color::Magenta;
const C_GEM: Color = Color::Cyan;
const C_BOMB: Color = Color::Red;

pub fn draw<W: Write>(
    out: &mut W,
    game: &GameScene,
    field: Field,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    draw_border(out, width, height)?;
    draw_hud(out, game, width)?;

    for item in &game.state.items {
        draw_item(out, item, field)?;
    }
    draw_player(out, game, field)?;

    if game.show_start_hint() {
        draw_centered(out, "Collect Hearts & Gems!", height / 2, width, Color::White)?;
    }

    match game.state.status {
        GameStatus::Playing => {
            draw_hint(out, "Mouse / ← → : Move   Q : Quit", width, height)?;
        }
        GameStatus::Won => draw_won(out, width, height)?,
        GameStatus::Lost => draw_lost(out, game, width, height)?,
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &GameScene, width: u16) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {} / {}", game.state.score, WIN_SCORE)))?;

    let time = format!("Time: {}s", game.state.time_left);
    out.queue(cursor::MoveTo(
        width.saturating_sub(time.chars().count() as u16 + 1),
        0,
    ))?;
    out.queue(Print(&time))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_item<W: Write>(out: &mut W, item: &GameItem, field: Field) -> std::io::Result<()> {
    let Some((col, row)) = field.cell(item.x, item.y) else {
        return Ok(());
    };
    let (symbol, color) = match item.kind {
        ItemKind::Heart => ("♥", C_HEART),
        ItemKind::Gem => ("◆", C_GEM),
        ItemKind::Bomb => ("✹", C_BOMB),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(symbol))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, game: &GameScene, field: Field) -> std::io::Result<()> {
    // Basket (1 row, 5 cols) centred on the player position:
    //   \_♥_/
    let Some((col, row)) = field.cell(game.state.player_x, PLAYER_Y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col.saturating_sub(2).max(field.left), row))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print("\\_♥_/"))?;
    Ok(())
}

// ── End-of-round overlays ─────────────────────────────────────────────────────

fn draw_won<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Yellow),
        ("║       YOU  WIN!      ║", Color::Yellow),
        ("╚══════════════════════╝", Color::Yellow),
        ("You caught all the love there is!", Color::Magenta),
        ("On to the next page...", Color::DarkGrey),
    ];
    draw_box(out, lines, width, height)
}

fn draw_lost<W: Write>(
    out: &mut W,
    game: &GameScene,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Score: {} / {}", game.state.score, WIN_SCORE);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Grey),
        ("║      TRY  AGAIN      ║", Color::Grey),
        ("╚══════════════════════╝", Color::Grey),
        (&score_line, Color::Yellow),
        ("Not quite enough love yet, have another go", Color::White),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_box(out, lines, width, height)
}

fn draw_box<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        draw_centered(out, msg, start_row + i as u16, width, *color)?;
    }
    Ok(())
}
