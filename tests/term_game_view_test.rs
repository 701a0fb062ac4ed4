use tui_maze::core::GameSession;
use tui_maze::term::{actor_glyph, AnchorY, FrameBuffer, GameView, Viewport, GAME_OVER_TITLE, RUNNING_TITLE};
use tui_maze::types::Direction;

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reference_session() -> GameSession {
    GameSession::from_rows(&["X P X"], 32).unwrap()
}

#[test]
fn term_view_required_size_includes_border_and_title() {
    let session = reference_session();
    let view = GameView::default();

    // 5 tiles * 2 columns + border, 1 row + border + title line.
    assert_eq!(view.required_size(&session.snapshot()), Viewport::new(12, 4));
}

#[test]
fn term_view_renders_title_border_walls_and_actor() {
    let session = reference_session();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session.snapshot(), Viewport::new(12, 4));

    assert_eq!(fb.row_text(0), RUNNING_TITLE);
    assert_eq!(fb.row_text(1), "┌──────────┐");
    assert_eq!(fb.row_text(2), "│██  ▲▲  ██│");
    assert_eq!(fb.row_text(3), "└──────────┘");
}

#[test]
fn term_view_scales_actor_position() {
    let mut session = reference_session();
    session.set_direction(Direction::Right);
    session.tick();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session.snapshot(), Viewport::new(12, 4));

    // x = 72px is 2.25 tiles = 4.5 columns, rounded to 5.
    assert_eq!(fb.row_text(2), "│██   ▶▶ ██│");
}

#[test]
fn term_view_shows_game_over() {
    let mut session = reference_session();
    session.end();

    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(40, 10));
    let all = screen(&fb);

    assert!(all.contains(GAME_OVER_TITLE));
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains(RUNNING_TITLE));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let session = reference_session();
    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(40, 10));
    let all = screen(&fb);

    assert!(all.contains("DIR"));
    assert!(all.contains("TICK"));
    assert!(all.contains("running"));
}

#[test]
fn term_view_side_panel_shows_over_state() {
    let mut session = reference_session();
    session.end();
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(40, 20));
    assert!(screen(&fb).contains("over"));
}

#[test]
fn term_view_side_panel_keeps_wide_coordinates_apart() {
    // A lone spawn tile has no walls, so the actor can wander far off the grid.
    let mut session = GameSession::from_rows(&["P"], 32).unwrap();
    session.set_direction(Direction::Left);
    for _ in 0..1250 {
        assert!(session.tick());
    }
    session.set_direction(Direction::Up);
    assert!(session.tick());
    assert_eq!(
        (session.actor().x(), session.actor().y()),
        (-10_000, -8)
    );

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(40, 20));
    let rows: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    let x_row = rows.iter().position(|r| r.contains("x -10000"));
    let y_row = rows.iter().position(|r| r.contains("y -8"));
    assert!(x_row.is_some() && y_row.is_some(), "{rows:#?}");
    assert_eq!(y_row, x_row.map(|r| r + 1));
}

#[test]
fn term_view_centers_bundled_maze() {
    let session = tui_maze::Config::default().load_session().unwrap();
    let view = GameView::default();
    let snap = session.snapshot();
    let need = view.required_size(&snap);
    assert_eq!(need, Viewport::new(40, 14));

    let fb = view.render(&snap, Viewport::new(40, 20));
    // (20 - 14) / 2 = 3 blank rows above the title.
    assert_eq!(fb.row_text(2).trim(), "");
    assert!(fb.row_text(3).starts_with(RUNNING_TITLE));
    assert!(fb.row_text(4).starts_with('┌'));

    let glyph = actor_glyph(Direction::Up);
    // Spawn tile is column 6, row 7: inside the frame at x = 1 + 12, y = 5 + 7.
    assert_eq!(fb.get(13, 12).unwrap().ch, glyph);
    assert_eq!(fb.get(14, 12).unwrap().ch, glyph);
}

#[test]
fn term_view_clips_to_small_viewport() {
    let session = tui_maze::Config::default().load_session().unwrap();
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
}
