use valentine_journey::entities::{Scene, SceneEvent};
use valentine_journey::timeline::{default_memories, TimelineScene};

#[test]
fn default_timeline_has_four_memories_in_order() {
    let memories = default_memories();
    assert_eq!(memories.len(), 4);
    assert_eq!(memories[0].date, "The beginning");
    assert_eq!(memories[3].date, "Now");
    assert!(memories.iter().all(|m| !m.image.is_empty()));
}

#[test]
fn next_scrolls_until_closing_message_then_advances() {
    let mut t = TimelineScene::new(default_memories());
    assert!(!t.can_advance());
    for _ in 0..4 {
        assert_eq!(t.next(), None);
    }
    assert!(t.on_closing_message());
    assert!(t.can_advance());
    assert_eq!(t.next(), Some(SceneEvent::Advance(Scene::Timeline)));
}

#[test]
fn reaching_the_end_is_remembered_after_scrolling_back() {
    let mut t = TimelineScene::new(default_memories());
    for _ in 0..10 {
        t.scroll_down();
    }
    assert_eq!(t.selected, 4);
    t.scroll_up();
    t.scroll_up();
    assert_eq!(t.selected, 2);
    assert_eq!(t.next(), Some(SceneEvent::Advance(Scene::Timeline)));
}

#[test]
fn scroll_up_stops_at_first_card() {
    let mut t = TimelineScene::new(default_memories());
    t.scroll_up();
    assert_eq!(t.selected, 0);
}

#[test]
fn expanded_card_blocks_navigation() {
    let mut t = TimelineScene::new(default_memories());
    t.toggle_expanded();
    assert!(t.expanded);
    t.scroll_down();
    assert_eq!(t.selected, 0);
    assert_eq!(t.next(), None);
    assert!(t.close());
    assert!(!t.close());
}

#[test]
fn closing_message_cannot_be_expanded() {
    let mut t = TimelineScene::new(default_memories());
    for _ in 0..4 {
        t.scroll_down();
    }
    t.toggle_expanded();
    assert!(!t.expanded);
}

#[test]
fn progress_tracks_cursor() {
    let mut t = TimelineScene::new(default_memories());
    assert_eq!(t.progress(), 0.0);
    t.scroll_down();
    t.scroll_down();
    assert_eq!(t.progress(), 0.5);
}

#[test]
fn empty_timeline_can_advance_immediately() {
    let mut t = TimelineScene::new(Vec::new());
    assert_eq!(t.progress(), 1.0);
    assert_eq!(t.next(), Some(SceneEvent::Advance(Scene::Timeline)));
}
