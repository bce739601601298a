//! The game scene: owns the mini-game state and the timers that drive it.

use rand::Rng;

use crate::compute::{self, GAME_DURATION, PLAYER_KEY_STEP};
use crate::entities::{GameState, GameStatus, Scene, SceneEvent};
use crate::timer::{FrameLoop, Interval, Timeout};

/// Countdown granularity.
pub const COUNTDOWN_PERIOD_MS: u64 = 1000;
/// Pause between winning and moving on to the letter.
pub const WIN_ADVANCE_DELAY_MS: u64 = 2000;
/// The start hint stays up while this many seconds have not yet elapsed.
const HINT_SECONDS: u32 = 2;

pub struct GameScene {
    pub state: GameState,
    frame_loop: FrameLoop,
    countdown: Interval,
    auto_advance: Option<Timeout>,
}

impl GameScene {
    pub fn new(now_ms: u64) -> Self {
        Self {
            state: compute::init_state(),
            frame_loop: FrameLoop::started(),
            countdown: Interval::start(now_ms, COUNTDOWN_PERIOD_MS),
            auto_advance: None,
        }
    }

    /// Run everything that is due at `now_ms`: the frame tick, any countdown
    /// steps, then the win timeout.
    pub fn update(&mut self, now_ms: u64, rng: &mut impl Rng) -> Option<SceneEvent> {
        if self.frame_loop.begin_frame() {
            self.state = compute::tick(&self.state, now_ms, rng);
        }

        while self.countdown.poll(now_ms) {
            self.state = compute::countdown(&self.state);
            if self.state.status != GameStatus::Playing {
                self.finish_round(now_ms);
            }
        }

        let fired = self
            .auto_advance
            .as_mut()
            .is_some_and(|timeout| timeout.poll(now_ms));
        fired.then_some(SceneEvent::Advance(Scene::Game))
    }

    fn finish_round(&mut self, now_ms: u64) {
        self.frame_loop.cancel();
        self.countdown.cancel();
        match self.state.status {
            GameStatus::Won => {
                log::info!("round won with {} points", self.state.score);
                self.auto_advance = Some(Timeout::arm(now_ms, WIN_ADVANCE_DELAY_MS));
            }
            GameStatus::Lost => {
                log::info!("round lost with {} points", self.state.score);
            }
            GameStatus::Playing => {}
        }
    }

    /// Pointer sample already converted to a field percentage.
    pub fn pointer(&mut self, raw_x: f32) {
        self.state = compute::move_player_to(&self.state, raw_x);
    }

    pub fn nudge_left(&mut self) {
        self.state = compute::nudge_player(&self.state, -PLAYER_KEY_STEP);
    }

    pub fn nudge_right(&mut self) {
        self.state = compute::nudge_player(&self.state, PLAYER_KEY_STEP);
    }

    /// Retry after a loss.  Returns whether a new round started.
    pub fn reset(&mut self, now_ms: u64) -> bool {
        if self.state.status != GameStatus::Lost {
            return false;
        }
        self.state = compute::reset(&self.state);
        self.frame_loop.restart();
        self.countdown.restart(now_ms);
        log::info!("round restarted");
        true
    }

    /// Cancel every timer this scene owns.  Called before the scene is
    /// replaced; a torn-down scene never reports another event.
    pub fn teardown(&mut self) {
        self.frame_loop.cancel();
        self.countdown.cancel();
        if let Some(timeout) = self.auto_advance.as_mut() {
            timeout.cancel();
        }
    }

    pub fn show_start_hint(&self) -> bool {
        self.state.status == GameStatus::Playing && self.state.time_left > GAME_DURATION - HINT_SECONDS
    }

    pub fn is_ticking(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn advance_pending(&self) -> bool {
        self.auto_advance.as_ref().is_some_and(Timeout::is_armed)
    }
}
