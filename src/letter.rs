//! Closing letter scene with the on-demand poem.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::poem::{PoemSource, FALLBACK_FAILED};

pub const LETTER_GREETING: &str = "To my dearest,";
pub const LETTER_BODY: [&str; 4] = [
    "Thank you for always being by my side. Every moment with you is the most special one.",
    "Like a game with endless beautiful outfits to collect,",
    "my love for you keeps growing, all the way to infinity.",
    "Happy Valentine's Day.",
];
pub const POEM_PLACEHOLDER: &str = "Press the button below to let the magic of love work...";

pub struct LetterScene {
    poet: Arc<dyn PoemSource>,
    pub poem: String,
    pub loading: bool,
    pub revealed: bool,
    pending: Option<Receiver<String>>,
}

impl LetterScene {
    pub fn new(poet: Arc<dyn PoemSource>) -> Self {
        Self {
            poet,
            poem: String::new(),
            loading: false,
            revealed: false,
            pending: None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.revealed {
            "Write a new poem"
        } else {
            "Conjure a love poem"
        }
    }

    /// Start a poem request on a worker thread.  Ignored while one is
    /// already in flight; returns whether a request was started.
    pub fn request_poem(&mut self) -> bool {
        if self.loading {
            return false;
        }
        let (tx, rx) = mpsc::channel();
        let poet = Arc::clone(&self.poet);
        thread::spawn(move || {
            // Receiver gone means the scene was torn down; nothing to do.
            let _ = tx.send(poet.generate());
        });
        self.pending = Some(rx);
        self.loading = true;
        true
    }

    /// Collect a finished request, if any.  Returns `true` when the poem changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_ref() else {
            return false;
        };
        let text = match rx.try_recv() {
            Ok(text) => text,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                log::error!("poem worker exited without a result");
                FALLBACK_FAILED.to_string()
            }
        };
        self.pending = None;
        self.poem = text;
        self.loading = false;
        self.revealed = true;
        true
    }
}
