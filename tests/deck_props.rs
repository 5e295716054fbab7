//! Property tests over dealt decks and arbitrary input sequences.

use proptest::prelude::*;

use fruit_match::core::{Activation, Alphabet, SessionState};
use fruit_match::engine::{Game, GameConfig};
use fruit_match::types::{Symbol, TileFace, POINTS_PER_MATCH};

#[derive(Debug, Clone)]
enum Step {
    Activate(usize),
    Advance(u32),
    Restart,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0usize..20).prop_map(Step::Activate),
        3 => (0u32..2_500).prop_map(Step::Advance),
        1 => Just(Step::Restart),
    ]
}

fn alphabet() -> impl Strategy<Value = Alphabet> {
    proptest::sample::subsequence(Symbol::ALL.to_vec(), 1..=Symbol::ALL.len())
        .prop_map(|symbols| Alphabet::new(symbols).unwrap())
}

proptest! {
    #[test]
    fn deal_has_two_of_each_symbol(seed in any::<u64>(), alphabet in alphabet()) {
        let state = SessionState::new(alphabet.clone(), seed);
        prop_assert_eq!(state.len(), alphabet.len() * 2);
        for &symbol in alphabet.symbols() {
            let count = state.tiles().iter().filter(|t| t.symbol == symbol).count();
            prop_assert_eq!(count, 2);
        }
        prop_assert!(state.tiles().iter().all(|t| !t.matched));
    }

    #[test]
    fn same_seed_same_deck(seed in any::<u64>()) {
        let a = SessionState::new(Alphabet::fruits(), seed);
        let b = SessionState::new(Alphabet::fruits(), seed);
        prop_assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn invariants_hold_for_any_input(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..120)) {
        let mut game = Game::new(&GameConfig::default().with_seed(seed));

        for step in steps {
            let before = game.session().clone();
            match step {
                Step::Activate(index) => {
                    let outcome = game.activate(index);
                    if let Activation::Ignored(_) = outcome {
                        prop_assert_eq!(game.session(), &before);
                    }
                }
                Step::Advance(ms) => {
                    game.advance(ms);
                    prop_assert!(game.session().elapsed_seconds() >= before.elapsed_seconds());
                }
                Step::Restart => game.restart(),
            }

            let s = game.session();
            prop_assert!(s.selection().len() <= 2);
            prop_assert_eq!(s.score() % POINTS_PER_MATCH, 0);
            prop_assert_eq!(s.score() as usize, s.matched_pairs() * POINTS_PER_MATCH as usize);
            prop_assert!(s.matched_pairs() <= s.total_pairs());
            prop_assert!(s.accuracy() <= 100);
            prop_assert_eq!(s.running(), !s.complete());
            prop_assert_eq!(s.complete(), s.tiles().iter().all(|t| t.matched));

            // Matched tiles always come in pairs of one symbol.
            for &symbol in s.alphabet().symbols() {
                let matched = s.tiles().iter().filter(|t| t.symbol == symbol && t.matched).count();
                prop_assert!(matched == 0 || matched == 2);
            }

            // Only selected tiles may be face up without being matched.
            for i in 0..s.len() {
                if s.tile_face(i) == Some(TileFace::Revealed) {
                    prop_assert!(s.selection().contains(&i));
                }
            }
        }
    }
}
