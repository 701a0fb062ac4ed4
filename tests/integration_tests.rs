//! Integration tests for the main game loop pieces: config, input latch, session

use crossterm::event::{KeyCode, KeyEvent};

use tui_maze::core::GameSession;
use tui_maze::input::{handle_key_event, should_quit, InputHandler};
use tui_maze::types::{Direction, Point, Status};
use tui_maze::Config;

/// One loop iteration the way the binary runs it: apply the latched direction, then tick.
fn step(session: &mut GameSession, input: &mut InputHandler) -> bool {
    if let Some(direction) = input.take() {
        session.set_direction(direction);
    }
    session.tick()
}

#[test]
fn test_game_lifecycle() {
    let mut session = Config::default().load_session().unwrap();
    assert_eq!(session.status(), Status::Running);
    assert_eq!(session.tick_count(), 0);

    // No input yet: the actor stands still.
    let spawn = session.actor().position();
    let mut input = InputHandler::new();
    assert!(!step(&mut session, &mut input));
    assert_eq!(session.actor().position(), spawn);

    session.end();
    assert_eq!(session.status(), Status::Over);
    assert!(session.snapshot().game_over());
}

#[test]
fn test_rapid_presses_between_ticks_coalesce() {
    let mut session = GameSession::from_rows(&["         ", "    P    ", "         "], 32).unwrap();
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Up);
    input.handle_key_press(KeyCode::Left);
    input.handle_key_press(KeyCode::Char('d'));
    assert!(step(&mut session, &mut input));

    assert_eq!(session.actor().direction(), Direction::Right);
    assert_eq!(session.actor().position(), Point::new(136, 32));
}

#[test]
fn test_direction_persists_without_new_input() {
    let mut session = GameSession::from_rows(&["P        "], 32).unwrap();
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Right);
    for _ in 0..4 {
        assert!(step(&mut session, &mut input));
    }
    assert_eq!(session.actor().x(), 32);
    assert_eq!(input.pending(), None);
}

#[test]
fn test_game_over_suspends_ticking() {
    let mut session = GameSession::from_rows(&["P        "], 32).unwrap();
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Right);
    assert!(step(&mut session, &mut input));
    session.end();

    input.handle_key_press(KeyCode::Down);
    for _ in 0..10 {
        assert!(!step(&mut session, &mut input));
    }
    assert_eq!(session.actor().position(), Point::new(8, 0));
    assert_eq!(session.actor().direction(), Direction::Right);
    assert_eq!(session.tick_count(), 1);
}

#[test]
fn test_quit_is_not_a_direction() {
    let q = KeyEvent::from(KeyCode::Char('q'));
    assert!(should_quit(q));
    assert_eq!(handle_key_event(q), None);
}
