use valentine_journey::entities::Scene;
use valentine_journey::scene::SceneController;

const ORDER: [Scene; 4] = [Scene::Intro, Scene::Timeline, Scene::Game, Scene::Letter];

#[test]
fn starts_at_intro() {
    assert_eq!(SceneController::new().current(), Scene::Intro);
}

#[test]
fn valid_advances_walk_forward_and_stop_at_letter() {
    let mut c = SceneController::new();
    for n in 1..=6 {
        let from = c.current();
        let moved = c.advance(from);
        assert_eq!(moved, n <= 3);
        assert_eq!(c.current(), ORDER[n.min(3)]);
    }
}

#[test]
fn stale_advance_is_ignored() {
    let mut c = SceneController::new();
    assert!(c.advance(Scene::Intro));
    assert!(c.advance(Scene::Timeline));
    // A late signal from an earlier scene must not skip ahead.
    assert!(!c.advance(Scene::Intro));
    assert!(!c.advance(Scene::Timeline));
    assert!(!c.advance(Scene::Letter));
    assert_eq!(c.current(), Scene::Game);
}

#[test]
fn letter_has_no_successor() {
    assert_eq!(Scene::Letter.next(), None);
    assert_eq!(Scene::Intro.next(), Some(Scene::Timeline));
    assert_eq!(Scene::Timeline.next(), Some(Scene::Game));
    assert_eq!(Scene::Game.next(), Some(Scene::Letter));
}
