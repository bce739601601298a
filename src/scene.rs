//! Forward-only scene controller.

use crate::entities::Scene;

/// Holds which scene is active.  Scene-internal state lives elsewhere and
/// is rebuilt on every transition.
#[derive(Clone, Debug)]
pub struct SceneController {
    current: Scene,
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneController {
    pub fn new() -> Self {
        Self {
            current: Scene::Intro,
        }
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Move to the scene after `from`.
    ///
    /// Returns `false` and leaves the controller untouched when `from` is
    /// not the active scene (a stale signal) or when there is nothing after
    /// it.
    pub fn advance(&mut self, from: Scene) -> bool {
        if from != self.current {
            log::debug!("ignoring stale advance from {:?} (active: {:?})", from, self.current);
            return false;
        }
        match self.current.next() {
            Some(next) => {
                log::info!("scene {:?} -> {:?}", self.current, next);
                self.current = next;
                true
            }
            None => false,
        }
    }
}
