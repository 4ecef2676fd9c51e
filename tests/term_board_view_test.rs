use tui_2048::core::{seeded_rng, Board, GameSnapshot, GameState};
use tui_2048::term::{tile_colors, AnchorY, BoardView, FrameBuffer, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot(rows: [[u32; 4]; 4]) -> GameSnapshot {
    GameState::from_board(Board::from_values(rows).unwrap()).snapshot()
}

#[test]
fn term_view_renders_tile_values_inside_frame() {
    let snap = snapshot([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(40, 24));
    let frame = view.frame_rect(Viewport::new(40, 24));

    // Top-left tile starts one gap inside the frame; 7 wide, value on the middle row.
    let tile_y = frame.y + 1 + 1;
    assert!(fb.row_text(tile_y).contains('2'));
    let last_tile_y = frame.y + 1 + 3 * 4 + 1;
    assert!(fb.row_text(last_tile_y).contains("2048"));

    let cell = fb.get(frame.x + 1, frame.y + 1).unwrap();
    assert_eq!(cell.style.bg, tile_colors(2).0);
}

#[test]
fn term_view_shows_move_counter() {
    let mut snap = snapshot([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    snap.move_count = 37;
    let fb = BoardView::default().render(&snap, Viewport::new(60, 30));
    let text = screen_text(&fb);
    assert!(text.contains("MOVES 37"), "{text}");
    assert!(text.contains("2048"));
}

#[test]
fn term_view_overlays_game_over() {
    let mut rng = seeded_rng(1);
    let mut state = GameState::from_board(
        Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap(),
    );
    state.apply_move(tui_2048::types::Direction::Left, &mut rng);
    assert!(state.game_over());

    let fb = BoardView::default().render(&state.snapshot(), Viewport::new(60, 30));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("press r to restart"));
}

#[test]
fn term_view_no_overlay_while_playing() {
    let mut rng = seeded_rng(5);
    let state = GameState::new(&mut rng);
    let fb = BoardView::default().render(&state.snapshot(), Viewport::new(60, 30));
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let snap = snapshot([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    let fb = BoardView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
