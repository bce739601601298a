use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use valentine_journey::letter::LetterScene;
use valentine_journey::poem::{PoemSource, FALLBACK_FAILED};

/// Hands out poems only when the test releases them.
struct GatedPoet {
    release: Mutex<Receiver<String>>,
    calls: AtomicUsize,
}

impl GatedPoet {
    fn new() -> (Arc<Self>, Sender<String>) {
        let (tx, rx) = mpsc::channel();
        let poet = Arc::new(GatedPoet {
            release: Mutex::new(rx),
            calls: AtomicUsize::new(0),
        });
        (poet, tx)
    }
}

impl PoemSource for GatedPoet {
    fn generate(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.lock().unwrap().recv().unwrap()
    }
}

struct PanickingPoet;

impl PoemSource for PanickingPoet {
    fn generate(&self) -> String {
        panic!("poet exploded");
    }
}

fn poll_until_done(letter: &mut LetterScene) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !letter.poll() {
        assert!(Instant::now() < deadline, "poem never arrived");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn fresh_letter_shows_placeholder() {
    let (poet, _tx) = GatedPoet::new();
    let letter = LetterScene::new(poet);
    assert!(!letter.loading);
    assert!(!letter.revealed);
    assert_eq!(letter.button_label(), "Conjure a love poem");
}

#[test]
fn second_request_while_loading_is_ignored() {
    let (poet, tx) = GatedPoet::new();
    let mut letter = LetterScene::new(poet.clone());

    assert!(letter.request_poem());
    assert!(letter.loading);
    assert!(!letter.request_poem());
    assert!(!letter.poll());

    tx.send("Roses are red".into()).unwrap();
    poll_until_done(&mut letter);
    assert_eq!(poet.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn poem_is_revealed_verbatim_and_can_be_regenerated() {
    let (poet, tx) = GatedPoet::new();
    let mut letter = LetterScene::new(poet.clone());

    letter.request_poem();
    tx.send("Line one\nLine two".into()).unwrap();
    poll_until_done(&mut letter);
    assert_eq!(letter.poem, "Line one\nLine two");
    assert!(!letter.loading);
    assert!(letter.revealed);
    assert_eq!(letter.button_label(), "Write a new poem");

    assert!(letter.request_poem());
    tx.send("Another".into()).unwrap();
    poll_until_done(&mut letter);
    assert_eq!(letter.poem, "Another");
    assert_eq!(poet.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn dead_worker_yields_fallback() {
    let mut letter = LetterScene::new(Arc::new(PanickingPoet));
    letter.request_poem();
    poll_until_done(&mut letter);
    assert_eq!(letter.poem, FALLBACK_FAILED);
    assert!(!letter.loading);
}
