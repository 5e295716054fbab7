use fruit_match::core::{SessionState, Tile};
use fruit_match::term::{AnchorY, GameView, HitTarget, Viewport};
use fruit_match::types::{Symbol, TileFace};

fn fixed_state() -> SessionState {
    use Symbol::*;
    let tiles = [
        Apple, Banana, Strawberry, Cherries, Pineapple, Apple, Watermelon, Grapes, Kiwi, Banana,
        Strawberry, Cherries, Pineapple, Watermelon, Grapes, Kiwi,
    ]
    .into_iter()
    .map(Tile::new)
    .collect();
    SessionState::from_tiles(tiles)
}

// A 16-tile deck exactly fills a 39x22 viewport:
// frame at (0,0), grid origin at (2,6), tiles 8x3 with a 1-column gap.
const VP: Viewport = Viewport {
    width: 39,
    height: 22,
};

#[test]
fn term_view_frame_fits_sixteen_tiles() {
    assert_eq!(GameView::default().frame_size(16), (39, 22));
}

#[test]
fn term_view_renders_border_corners() {
    let snap = fixed_state().snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(38, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(38, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_header_and_stats() {
    let snap = fixed_state().snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    assert!(fb.row_text(1).contains("FRUIT MEMORY MATCH"));
    let labels = fb.row_text(3);
    for name in ["TIME", "SCORE", "MOVES", "ACCURACY"] {
        assert!(labels.contains(name), "missing {name} in {labels:?}");
    }
    let values = fb.row_text(4);
    assert!(values.contains("00:00"));
    assert!(values.contains("0%"));
    assert!(fb.row_text(19).contains("[ Restart Game ]"));
}

#[test]
fn term_view_hides_symbols_until_revealed() {
    let mut state = fixed_state();
    state.activate(1);
    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    // Tile 0 is hidden: placeholder, no fruit anywhere on its face.
    assert_eq!(fb.get(5, 7).unwrap().ch, '?');
    // Tile 1 is revealed, drawn two columns wide.
    assert_eq!(fb.get(14, 7).unwrap().ch, Symbol::Banana.glyph_char());
    assert!(fb.get(15, 7).unwrap().is_continuation());
    assert_eq!(snap.face(1), Some(TileFace::Revealed));
}

#[test]
fn term_view_keeps_matched_symbols_visible() {
    let mut state = fixed_state();
    state.activate(0);
    let token = state.activate(5).token().unwrap();
    state.resolve_selection(token);
    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    // Tile 5 sits in row 1, column 1.
    assert_eq!(fb.get(5, 7).unwrap().ch, Symbol::Apple.glyph_char());
    assert_eq!(fb.get(14, 10).unwrap().ch, Symbol::Apple.glyph_char());
    assert!(fb.row_text(4).contains("10"));
    assert!(fb.row_text(4).contains("100%"));
}

#[test]
fn term_view_highlights_focused_tile() {
    let snap = fixed_state().snapshot();
    let fb = GameView::default().render(&snap, Some(2), VP);

    assert_eq!(fb.get(20, 6).unwrap().ch, '┏');
    assert_eq!(fb.get(2, 6).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_summary_when_complete() {
    let mut state = SessionState::from_tiles(vec![Tile::new(Symbol::Kiwi); 2]);
    state.tick();
    state.activate(0);
    state.activate(1);
    assert!(state.complete());

    let snap = state.snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Some(0), Viewport::new(40, 16));

    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|row| row.contains("YOU WIN!")));
    assert!(text.iter().any(|row| row.contains("Final Score:") && row.contains("10")));
    assert!(text.iter().any(|row| row.contains("Time:") && row.contains("00:01")));
    assert!(text.iter().any(|row| row.contains("[ Play Again ]")));
}

#[test]
fn hit_test_finds_tiles_and_restart() {
    let snap = fixed_state().snapshot();
    let view = GameView::default();

    assert_eq!(view.hit_test(&snap, VP, 2, 6), Some(HitTarget::Tile(0)));
    assert_eq!(view.hit_test(&snap, VP, 9, 8), Some(HitTarget::Tile(0)));
    assert_eq!(view.hit_test(&snap, VP, 10, 7), None);
    assert_eq!(view.hit_test(&snap, VP, 30, 16), Some(HitTarget::Tile(15)));
    assert_eq!(view.hit_test(&snap, VP, 11, 19), Some(HitTarget::Restart));
    assert_eq!(view.hit_test(&snap, VP, 0, 0), None);
}

#[test]
fn hit_test_skips_matched_tiles() {
    let mut state = fixed_state();
    state.activate(0);
    let token = state.activate(5).token().unwrap();
    state.resolve_selection(token);
    state.activate(1);

    let snap = state.snapshot();
    let view = GameView::default();

    // Tile 0 and tile 5 (row 1, column 1) are matched.
    assert_eq!(view.hit_test(&snap, VP, 4, 7), None);
    assert_eq!(view.hit_test(&snap, VP, 13, 10), None);
    // The revealed tile and hidden tiles stay clickable.
    assert_eq!(view.hit_test(&snap, VP, 13, 7), Some(HitTarget::Tile(1)));
    assert_eq!(view.hit_test(&snap, VP, 22, 7), Some(HitTarget::Tile(2)));
}

#[test]
fn hit_test_on_summary_only_accepts_play_again() {
    let mut state = fixed_state();
    for first in 0..16 {
        let symbol = state.tiles()[first].symbol;
        if state.tiles()[first].matched {
            continue;
        }
        let second = (first + 1..16)
            .find(|&i| state.tiles()[i].symbol == symbol)
            .unwrap();
        state.activate(first);
        let token = state.activate(second).token().unwrap();
        state.resolve_selection(token);
    }
    assert!(state.complete());

    let snap = state.snapshot();
    let view = GameView::default();

    // Modal is 28x10 centred in the frame: (5,6); its button row is y=14.
    assert_eq!(view.hit_test(&snap, VP, 12, 14), Some(HitTarget::Restart));
    assert_eq!(view.hit_test(&snap, VP, 2, 6), None);
    assert_eq!(view.hit_test(&snap, VP, 11, 19), None);
}
