use std::sync::Arc;

use valentine_journey::app::{ActiveScene, App, Command};
use valentine_journey::compute::WIN_SCORE;
use valentine_journey::entities::{GameStatus, Scene};
use valentine_journey::poem::PoemSource;
use valentine_journey::timeline::default_memories;

use rand::rngs::StdRng;
use rand::SeedableRng;

struct FixedPoet;

impl PoemSource for FixedPoet {
    fn generate(&self) -> String {
        "fixed".into()
    }
}

fn make_app() -> App {
    App::new(default_memories(), Arc::new(FixedPoet), 0)
}

fn to_game(app: &mut App) {
    assert!(app.handle(Command::Confirm, 0));
    for _ in 0..5 {
        app.handle(Command::Next, 0);
    }
    assert_eq!(app.scene(), Scene::Game);
}

#[test]
fn intro_confirm_opens_timeline() {
    let mut app = make_app();
    assert_eq!(app.scene(), Scene::Intro);
    app.handle(Command::Confirm, 0);
    assert_eq!(app.scene(), Scene::Timeline);
    assert!(matches!(app.active, ActiveScene::Timeline(_)));
}

#[test]
fn back_is_unused_outside_an_open_card() {
    let mut app = make_app();
    assert!(!app.handle(Command::Back, 0));

    app.handle(Command::Confirm, 0);
    app.handle(Command::Confirm, 0); // open first card
    assert!(app.handle(Command::Back, 0));
    assert!(!app.handle(Command::Back, 0));
}

#[test]
fn winning_game_leads_to_letter_with_fresh_state() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut app = make_app();
    to_game(&mut app);

    if let ActiveScene::Game(game) = &mut app.active {
        game.state.score = WIN_SCORE;
    }
    for second in 1..=30u64 {
        app.update(second * 1000, &mut rng);
    }
    match &app.active {
        ActiveScene::Game(game) => assert_eq!(game.state.status, GameStatus::Won),
        _ => panic!("expected game scene"),
    }

    app.update(31_999, &mut rng);
    assert_eq!(app.scene(), Scene::Game);
    app.update(32_000, &mut rng);
    assert_eq!(app.scene(), Scene::Letter);
    match &app.active {
        ActiveScene::Letter(letter) => {
            assert!(!letter.revealed);
            assert!(letter.poem.is_empty());
        }
        _ => panic!("expected letter scene"),
    }
}

#[test]
fn losing_game_stays_until_retry() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut app = make_app();
    to_game(&mut app);
    for second in 1..=40u64 {
        app.update(second * 1000, &mut rng);
    }
    assert_eq!(app.scene(), Scene::Game);

    app.handle(Command::Reset, 40_000);
    match &app.active {
        ActiveScene::Game(game) => {
            assert_eq!(game.state.status, GameStatus::Playing);
            assert_eq!(game.state.time_left, 30);
        }
        _ => panic!("expected game scene"),
    }
}

#[test]
fn pointer_commands_reach_the_game() {
    let mut app = make_app();
    to_game(&mut app);
    app.handle(Command::Pointer(-50.0), 0);
    match &app.active {
        ActiveScene::Game(game) => assert_eq!(game.state.player_x, 5.0),
        _ => panic!("expected game scene"),
    }
}
