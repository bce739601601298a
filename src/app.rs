//! Application shell: the scene controller plus the one live scene value.

use std::sync::Arc;

use rand::Rng;

use crate::entities::{Memory, Scene, SceneEvent};
use crate::game::GameScene;
use crate::letter::LetterScene;
use crate::poem::PoemSource;
use crate::scene::SceneController;
use crate::timeline::TimelineScene;

/// Input already translated out of terminal events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Confirm,
    Back,
    Up,
    Down,
    Left,
    Right,
    Next,
    /// Pointer over the play field, as a percentage of its width.
    Pointer(f32),
    Reset,
    Generate,
}

/// Title card.  Holds no state besides when it appeared, for the pulse.
pub struct IntroScene {
    pub shown_at_ms: u64,
}

pub enum ActiveScene {
    Intro(IntroScene),
    Timeline(TimelineScene),
    Game(GameScene),
    Letter(LetterScene),
}

impl ActiveScene {
    fn teardown(&mut self) {
        if let ActiveScene::Game(game) = self {
            game.teardown();
        }
    }
}

pub struct App {
    controller: SceneController,
    pub active: ActiveScene,
    memories: Vec<Memory>,
    poet: Arc<dyn PoemSource>,
}

impl App {
    pub fn new(memories: Vec<Memory>, poet: Arc<dyn PoemSource>, now_ms: u64) -> Self {
        Self {
            controller: SceneController::new(),
            active: ActiveScene::Intro(IntroScene {
                shown_at_ms: now_ms,
            }),
            memories,
            poet,
        }
    }

    pub fn scene(&self) -> Scene {
        self.controller.current()
    }

    /// Run timers and background work for the live scene.
    pub fn update(&mut self, now_ms: u64, rng: &mut impl Rng) {
        let event = match &mut self.active {
            ActiveScene::Game(game) => game.update(now_ms, rng),
            ActiveScene::Letter(letter) => {
                letter.poll();
                None
            }
            ActiveScene::Intro(_) | ActiveScene::Timeline(_) => None,
        };
        if let Some(event) = event {
            self.dispatch(event, now_ms);
        }
    }

    /// Apply one command.  Returns `false` when the command had no use in
    /// the current scene, which lets the caller treat an unused `Back` as quit.
    pub fn handle(&mut self, command: Command, now_ms: u64) -> bool {
        let mut consumed = true;
        let event = match (&mut self.active, command) {
            (ActiveScene::Intro(_), Command::Confirm) => Some(SceneEvent::Advance(Scene::Intro)),

            (ActiveScene::Timeline(t), Command::Up) => {
                t.scroll_up();
                None
            }
            (ActiveScene::Timeline(t), Command::Down) => {
                t.scroll_down();
                None
            }
            (ActiveScene::Timeline(t), Command::Confirm) => {
                t.toggle_expanded();
                None
            }
            (ActiveScene::Timeline(t), Command::Right | Command::Next) => t.next(),
            (ActiveScene::Timeline(t), Command::Back) => {
                consumed = t.close();
                None
            }

            (ActiveScene::Game(g), Command::Pointer(x)) => {
                g.pointer(x);
                None
            }
            (ActiveScene::Game(g), Command::Left) => {
                g.nudge_left();
                None
            }
            (ActiveScene::Game(g), Command::Right) => {
                g.nudge_right();
                None
            }
            (ActiveScene::Game(g), Command::Reset | Command::Confirm) => {
                g.reset(now_ms);
                None
            }

            (ActiveScene::Letter(l), Command::Generate | Command::Confirm) => {
                l.request_poem();
                None
            }

            _ => {
                consumed = false;
                None
            }
        };
        if let Some(event) = event {
            self.dispatch(event, now_ms);
        }
        consumed
    }

    fn dispatch(&mut self, event: SceneEvent, now_ms: u64) {
        match event {
            SceneEvent::Advance(from) => {
                if self.controller.advance(from) {
                    self.active.teardown();
                    self.active = self.build(now_ms);
                }
            }
        }
    }

    fn build(&self, now_ms: u64) -> ActiveScene {
        match self.controller.current() {
            Scene::Intro => ActiveScene::Intro(IntroScene {
                shown_at_ms: now_ms,
            }),
            Scene::Timeline => ActiveScene::Timeline(TimelineScene::new(self.memories.clone())),
            Scene::Game => ActiveScene::Game(GameScene::new(now_ms)),
            Scene::Letter => ActiveScene::Letter(LetterScene::new(Arc::clone(&self.poet))),
        }
    }
}
