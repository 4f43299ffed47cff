use blockfall::core::GameState;
use blockfall::term::{AnchorY, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();

    // 10x2 by 20x1 cells plus the border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.board[19][0] = 4;
    snap.active = None;
    snap.ghost_y = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let mut state = GameState::with_seed(1);
    state.spawn_piece_of(PieceKind::O);
    let snap = state.snapshot();
    assert_eq!(snap.ghost_y, Some(18));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O at (4, 0): terminal columns 9..13, row 1.
    assert_eq!(fb.get(9, 1).unwrap().ch, '█');
    assert_eq!(fb.get(12, 2).unwrap().ch, '█');
    // Ghost at rows 18..19 => terminal rows 19..20.
    assert_eq!(fb.get(9, 19).unwrap().ch, '░');
    assert_eq!(fb.get(12, 20).unwrap().ch, '░');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::with_seed(987_654).snapshot();
    snap.score = 1234;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("SEED"));
    assert!(all.contains("987654"));
    assert!(all.contains("hard drop"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_pause_overlay() {
    let mut state = GameState::with_seed(1);
    state.apply_action(GameAction::TogglePause);

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut state = GameState::with_seed(1);
    for y in 0..2 {
        for x in 0..10 {
            if x != 4 && x != 5 {
                state.board_mut().set(x, y, 1);
            }
        }
    }
    state.spawn_piece_of(PieceKind::T);

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(13).contains("Press R to Restart"));
}

#[test]
fn term_view_top_anchor_starts_at_row_zero() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');

    let centered = GameView::default().render(&snap, Viewport::new(22, 40));
    assert_eq!(centered.get(0, 9).unwrap().ch, '┌');
}
