mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use valentine_journey::app::{App, Command};
use valentine_journey::compute::pointer_to_percent;
use valentine_journey::config::AppConfig;
use valentine_journey::entities::Scene;
use valentine_journey::poem::GeminiPoet;
use valentine_journey::timeline::default_memories;

use display::Field;

// ── Logging ───────────────────────────────────────────────────────────────────

/// stdout belongs to the game screen, so log records go to a file.
fn log_path() -> PathBuf {
    if let Ok(path) = std::env::var("VALENTINE_LOG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".valentine_journey.log")
}

fn init_logging() -> Result<()> {
    let path = log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Input translation ─────────────────────────────────────────────────────────

enum Input {
    Command(Command),
    /// Esc: closes whatever is open, quits otherwise.
    Back,
    Quit,
}

fn translate_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        KeyCode::Esc => Input::Back,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Command(Command::Confirm),
        KeyCode::Up => Input::Command(Command::Up),
        KeyCode::Down => Input::Command(Command::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Input::Command(Command::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Input::Command(Command::Right),
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Input::Command(Command::Next),
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Command(Command::Reset),
        KeyCode::Char('g') | KeyCode::Char('G') => Input::Command(Command::Generate),
        _ => return None,
    };
    Some(input)
}

fn translate_mouse(mouse: MouseEvent, field: Field) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
            let pct = pointer_to_percent(mouse.column as i32, field.left as i32, field.width);
            Some(Input::Command(Command::Pointer(pct)))
        }
        _ => None,
    }
}

// ── Main loop ─────────────────────────────────────────────────────────────────

fn run_loop<W: Write>(
    out: &mut W,
    app: &mut App,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> Result<()> {
    let mut rng = thread_rng();
    let clock = Instant::now();
    let (mut width, mut height) = terminal::size()?;

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let input = match ev {
                Event::Key(key) => translate_key(key),
                Event::Mouse(mouse) => translate_mouse(mouse, Field::for_terminal(width, height)),
                Event::Resize(w, h) => {
                    width = w;
                    height = h;
                    None
                }
                _ => None,
            };
            match input {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Back) => {
                    if !app.handle(Command::Back, now_ms) {
                        return Ok(());
                    }
                }
                Some(Input::Command(command)) => {
                    app.handle(command, now_ms);
                }
                None => {}
            }
        }

        app.update(now_ms, &mut rng);

        display::render(out, app, now_ms, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;
    let config = AppConfig::load();
    log::info!("starting (frame {} ms)", config.frame_ms);

    let memories = if config.memories.is_empty() {
        default_memories()
    } else {
        config.memories.clone()
    };
    let poet = Arc::new(GeminiPoet::new(config.poem.clone()));
    let mut app = App::new(memories, poet, 0);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the main loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run_loop(&mut out, &mut app, &rx, Duration::from_millis(config.frame_ms.max(1)));

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if app.scene() == Scene::Letter {
        log::info!("journey completed");
    }
    result
}
