use tui_snake::core::{Board, GameSnapshot, GameState};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::FlowState;

fn playing_snapshot(game: &GameState) -> GameSnapshot {
    let mut snap = game.snapshot();
    snap.flow = FlowState::Playing;
    snap
}

#[test]
fn term_view_renders_wall_corners() {
    let game = GameState::default();
    let snap = playing_snapshot(&game);

    // 80x25 board plus the wall => 82x27, no room for the side panel.
    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(82, 27));

    assert_eq!(fb.get(0, 0).unwrap().ch, '#');
    assert_eq!(fb.get(81, 0).unwrap().ch, '#');
    assert_eq!(fb.get(0, 26).unwrap().ch, '#');
    assert_eq!(fb.get(81, 26).unwrap().ch, '#');
    assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_snake_and_food_inside_the_wall() {
    let game = GameState::default();
    let snap = playing_snapshot(&game);
    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(82, 27));

    // Board (x, y) lands at (x + 1, y + 1).
    assert_eq!(fb.get(11, 13).unwrap().ch, 'O');
    assert_eq!(fb.get(10, 13).unwrap().ch, 'o');
    assert_eq!(fb.get(9, 13).unwrap().ch, 'o');
    assert_eq!(fb.get(18, 3).unwrap().ch, '*');
    assert!(fb.get(11, 13).unwrap().style.bold);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let game = GameState::default();
    let mut snap = playing_snapshot(&game);
    snap.score = 1234;
    snap.speed_ms = 185;

    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(100, 30));
    let text = fb.to_text();

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LENGTH"));
    assert!(text.contains("SPEED MS"));
    assert!(text.contains("185"));
}

#[test]
fn term_view_falls_back_to_status_line_when_narrow() {
    let game = GameState::default();
    let snap = playing_snapshot(&game);

    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(82, 28));

    assert!(fb.row_text(27).starts_with("Score 0  Length 3"));
}

#[test]
fn term_view_menu_overlay_shows_title_and_keys() {
    let game = GameState::default();
    let mut snap = game.snapshot();
    snap.flow = FlowState::Menu;

    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(82, 27));
    let text = fb.to_text();

    assert!(text.contains("SNAKE"));
    assert!(text.contains("Enter to start"));
}

#[test]
fn term_view_blank_menu_hides_the_board() {
    let game = GameState::default();
    let mut snap = game.snapshot();
    snap.flow = FlowState::Menu;

    let fb = GameView::new()
        .with_blank_menu(true)
        .render(&game.board(), &snap, Viewport::new(82, 27));

    assert_eq!(fb.get(18, 3).unwrap().ch, ' ');
}

#[test]
fn term_view_paused_overlay() {
    let game = GameState::default();
    let mut snap = game.snapshot();
    snap.flow = FlowState::Paused;
    snap.paused = true;

    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(82, 27));

    assert!(fb.to_text().contains("PAUSED"));
}

#[test]
fn term_view_game_over_shows_final_score() {
    let game = GameState::default();
    let mut snap = game.snapshot();
    snap.flow = FlowState::GameOver;
    snap.score = 120;

    let fb = GameView::default().render(&game.board(), &snap, Viewport::new(82, 27));
    let text = fb.to_text();

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score 120"));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let board = Board::with_size(4, 3);
    let snap = GameSnapshot::default();

    let fb = GameView::default().render(&board, &snap, Viewport::new(3, 2));

    assert_eq!(fb.width(), 3);
    assert_eq!(fb.height(), 2);
}
