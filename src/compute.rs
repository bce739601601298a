/// Pure mini-game logic.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, a clock reading and an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG.

use rand::Rng;

use crate::entities::{GameItem, GameState, GameStatus, ItemKind};

// ── Tuning ───────────────────────────────────────────────────────────────────

/// Length of one round, in seconds.
pub const GAME_DURATION: u32 = 30;
/// Score needed when the countdown expires to win the round.
pub const WIN_SCORE: u32 = 1500;
/// Minimum gap between two spawns, in milliseconds.
pub const SPAWN_INTERVAL_MS: u64 = 600;

/// Player position is kept this far away from either edge.
pub const PLAYER_MIN_X: f32 = 5.0;
pub const PLAYER_MAX_X: f32 = 95.0;
/// Starting player position.
pub const PLAYER_START_X: f32 = 50.0;
/// Horizontal step applied by one arrow-key press.
pub const PLAYER_KEY_STEP: f32 = 4.0;

/// Items spawn here, above the visible field.
pub const SPAWN_Y: f32 = -10.0;
/// Vertical position of the player's catcher, percent of field height.
pub const PLAYER_Y: f32 = 85.0;
/// Catch band (exclusive on both ends).
pub const CATCH_TOP: f32 = 80.0;
pub const CATCH_BOTTOM: f32 = 92.0;
/// Horizontal reach of the catcher.
pub const CATCH_REACH: f32 = 10.0;
/// Items at or beyond this depth are dropped.
pub const OFFSCREEN_Y: f32 = 110.0;

// ── Item tables ──────────────────────────────────────────────────────────────

/// Fall speed, percent of field height per tick.
pub fn speed_for(kind: ItemKind) -> f32 {
    match kind {
        ItemKind::Heart => 0.6,
        ItemKind::Gem => 0.8,
        ItemKind::Bomb => 0.9,
    }
}

/// Signed score change when an item is caught.
pub fn score_delta(kind: ItemKind) -> i32 {
    match kind {
        ItemKind::Heart => 100,
        ItemKind::Gem => 300,
        ItemKind::Bomb => -200,
    }
}

/// Map a uniform draw in `[0, 1)` onto an item kind.
///
/// Thresholds are checked top-down, so the partition is
/// `(0.8, 1)` bomb, `(0.6, 0.8]` gem, `[0, 0.6]` heart.
pub fn kind_for_draw(draw: f64) -> ItemKind {
    if draw > 0.8 {
        ItemKind::Bomb
    } else if draw > 0.6 {
        ItemKind::Gem
    } else {
        ItemKind::Heart
    }
}

fn apply_delta(score: u32, delta: i32) -> u32 {
    if delta >= 0 {
        score.saturating_add(delta as u32)
    } else {
        score.saturating_sub(delta.unsigned_abs())
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state of a freshly mounted game scene.
pub fn init_state() -> GameState {
    GameState {
        items: Vec::new(),
        score: 0,
        time_left: GAME_DURATION,
        player_x: PLAYER_START_X,
        status: GameStatus::Playing,
        last_spawn_ms: None,
        next_id: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn clamp_player_x(x: f32) -> f32 {
    if x.is_nan() {
        return PLAYER_START_X;
    }
    x.clamp(PLAYER_MIN_X, PLAYER_MAX_X)
}

/// Convert a pointer column into a percentage of the play-field width.
/// Columns outside the field produce values outside `[0, 100]`; callers
/// clamp afterwards.
pub fn pointer_to_percent(column: i32, field_left: i32, field_width: u16) -> f32 {
    if field_width == 0 {
        return PLAYER_START_X;
    }
    (column - field_left) as f32 / field_width as f32 * 100.0
}

/// Place the player at a raw horizontal sample.  Ignored unless playing.
pub fn move_player_to(state: &GameState, raw_x: f32) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    GameState {
        player_x: clamp_player_x(raw_x),
        ..state.clone()
    }
}

pub fn nudge_player(state: &GameState, step: f32) -> GameState {
    move_player_to(state, state.player_x + step)
}

/// Restart a lost round.  Any other status is returned unchanged.
pub fn reset(state: &GameState) -> GameState {
    if state.status != GameStatus::Lost {
        return state.clone();
    }
    GameState {
        items: Vec::new(),
        score: 0,
        time_left: GAME_DURATION,
        status: GameStatus::Playing,
        last_spawn_ms: None,
        ..state.clone()
    }
}

// ── Countdown ────────────────────────────────────────────────────────────────

/// One countdown step.  Reaching zero freezes the timer and resolves the
/// round against `WIN_SCORE`.
pub fn countdown(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    if state.time_left <= 1 {
        let status = if state.score >= WIN_SCORE {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        return GameState {
            time_left: 0,
            status,
            ..state.clone()
        };
    }
    GameState {
        time_left: state.time_left - 1,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Create a new item at the top of the field.
pub fn spawn_item(id: u64, rng: &mut impl Rng) -> GameItem {
    let kind = kind_for_draw(rng.gen::<f64>());
    GameItem {
        id,
        x: rng.gen::<f32>() * (PLAYER_MAX_X - PLAYER_MIN_X) + PLAYER_MIN_X,
        y: SPAWN_Y,
        kind,
        speed: speed_for(kind),
    }
}

/// True when an item sits inside the catch band and within reach of the player.
pub fn is_caught(item: &GameItem, player_x: f32) -> bool {
    item.y > CATCH_TOP && item.y < CATCH_BOTTOM && (item.x - player_x).abs() < CATCH_REACH
}

/// Advance the simulation by one frame.  `now_ms` is the frame's clock
/// reading; all randomness comes through `rng` so callers control
/// determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, now_ms: u64, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Spawn on cadence ──────────────────────────────────────────────────
    let mut items = state.items.clone();
    let mut next_id = state.next_id;
    let mut last_spawn_ms = state.last_spawn_ms;

    let due = match state.last_spawn_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) > SPAWN_INTERVAL_MS,
    };
    if due {
        items.push(spawn_item(next_id, rng));
        next_id += 1;
        last_spawn_ms = Some(now_ms);
    }

    // ── 2. Advance, catch, cull ──────────────────────────────────────────────
    let mut score = state.score;
    let items: Vec<GameItem> = items
        .into_iter()
        .map(|item| GameItem {
            y: item.y + item.speed,
            ..item
        })
        .filter(|item| {
            if is_caught(item, state.player_x) {
                score = apply_delta(score, score_delta(item.kind));
                return false;
            }
            item.y < OFFSCREEN_Y
        })
        .collect();

    GameState {
        items,
        score,
        last_spawn_ms,
        next_id,
        ..state.clone()
    }
}
