/// All game entity types — pure data, no logic.

use serde::{Deserialize, Serialize};

// ── Scenes ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    Intro,
    Timeline,
    Game,
    Letter,
}

impl Scene {
    /// The scene that follows this one, or `None` for the final scene.
    pub fn next(self) -> Option<Scene> {
        match self {
            Scene::Intro => Some(Scene::Timeline),
            Scene::Timeline => Some(Scene::Game),
            Scene::Game => Some(Scene::Letter),
            Scene::Letter => None,
        }
    }
}

/// Signals a scene sends up to the scene controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// Move forward; carries the scene that emitted the request.
    Advance(Scene),
}

// ── Mini-game ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Heart,
    Gem,
    Bomb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A falling item. Coordinates are percentages of the play field.
#[derive(Clone, Debug, PartialEq)]
pub struct GameItem {
    pub id: u64,
    pub x: f32,
    /// Negative while above the field, above 100 once it has fallen out.
    pub y: f32,
    pub kind: ItemKind,
    pub speed: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire mini-game state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub items: Vec<GameItem>,
    pub score: u32,
    /// Seconds left on the countdown.
    pub time_left: u32,
    /// Player position, percent of field width.
    pub player_x: f32,
    pub status: GameStatus,
    /// Clock reading (ms) of the most recent spawn.
    pub last_spawn_ms: Option<u64>,
    /// Identifier handed to the next spawned item.
    pub next_id: u64,
}

// ── Timeline content ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub date: String,
    pub title: String,
    pub description: String,
    /// Path or URL of the photo shown with this memory.
    pub image: String,
}
