//! Memory timeline scene.

use crate::entities::{Memory, Scene, SceneEvent};

/// Lines of the message shown after the last memory.
pub const CLOSING_MESSAGE: [&str; 6] = [
    "To the one I love",
    "Thank you for coming into my life and giving every day a meaning.",
    "Good days or bad days, having you beside me makes everything better.",
    "You may not be perfect, and neither am I,",
    "but we are perfect for each other.",
    "Happy Valentine's Day 2026",
];

pub fn default_memories() -> Vec<Memory> {
    let memory = |date: &str, title: &str, description: &str, image: &str| Memory {
        date: date.into(),
        title: title.into(),
        description: description.into(),
        image: image.into(),
    };
    vec![
        memory(
            "The beginning",
            "Not love at first sight",
            "But the longer I knew you, the clearer it was you were the one I had been looking for.",
            "./photo_1.jpg",
        ),
        memory(
            "First date",
            "You said exactly what you thought",
            "No pretending, no putting on a show. I love that honesty.",
            "./photo_2.jpg",
        ),
        memory(
            "The hard times",
            "We chose to talk, not run",
            "Good relationships don't come from never arguing, but from fixing things together.",
            "./photo_3.jpg",
        ),
        memory(
            "Now",
            "Still as silly as ever",
            "And I still love watching you do crazy things without knowing how cute you are.",
            "./photo_4.jpg",
        ),
    ]
}

pub struct TimelineScene {
    pub memories: Vec<Memory>,
    /// Cursor position; `memories.len()` is the closing message.
    pub selected: usize,
    /// Full-screen view of the selected memory.
    pub expanded: bool,
    reached_end: bool,
}

impl TimelineScene {
    pub fn new(memories: Vec<Memory>) -> Self {
        let reached_end = memories.is_empty();
        Self {
            memories,
            selected: 0,
            expanded: false,
            reached_end,
        }
    }

    fn last_position(&self) -> usize {
        self.memories.len()
    }

    pub fn on_closing_message(&self) -> bool {
        self.selected == self.last_position()
    }

    pub fn selected_memory(&self) -> Option<&Memory> {
        self.memories.get(self.selected)
    }

    pub fn can_advance(&self) -> bool {
        self.reached_end
    }

    /// Fraction of the timeline scrolled through, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.memories.is_empty() {
            return 1.0;
        }
        self.selected as f32 / self.last_position() as f32
    }

    pub fn scroll_down(&mut self) {
        if self.expanded {
            return;
        }
        self.selected = (self.selected + 1).min(self.last_position());
        if self.on_closing_message() {
            self.reached_end = true;
        }
    }

    pub fn scroll_up(&mut self) {
        if self.expanded {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the selected memory, or close it if already open.
    pub fn toggle_expanded(&mut self) {
        if self.expanded {
            self.expanded = false;
        } else if self.selected_memory().is_some() {
            self.expanded = true;
        }
    }

    /// Returns `true` if a card was open and is now closed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    /// Move on to the game once the closing message has been seen;
    /// until then the request just scrolls.
    pub fn next(&mut self) -> Option<SceneEvent> {
        if self.expanded {
            return None;
        }
        if self.reached_end {
            return Some(SceneEvent::Advance(Scene::Timeline));
        }
        self.scroll_down();
        None
    }
}
