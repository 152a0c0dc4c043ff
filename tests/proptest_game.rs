//! Property-based tests for deck generation, bonus decay, and the
//! selection protocol.

use std::time::Duration;

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memorize::cards::{Card, CardId, DeckGenerator};
use memorize::core::{GameConfig, GameRng, ManualClock, Timestamp};
use memorize::game::{ChooseOutcome, MemoryGame};
use memorize::ranks::{codec, Rank};
use memorize::storage::MemoryStore;

type Game = MemoryGame<usize, MemoryStore>;

fn new_game(pairs: usize, seed: u64) -> Game {
    let config = GameConfig::default().with_levels(vec![pairs]).with_seed(seed);
    MemoryGame::new(config, |i: usize| i, MemoryStore::new(), ManualClock::new()).unwrap()
}

fn partner_of(game: &Game, id: CardId) -> CardId {
    let content = *game.card(id).unwrap().content();
    game.cards()
        .iter()
        .find(|c| *c.content() == content && c.id() != id)
        .map(|c| c.id())
        .unwrap()
}

fn open_count(game: &Game) -> usize {
    game.cards().iter().filter(|c| c.is_face_up() && !c.is_matched()).count()
}

// ---------------------------------------------------------------------------
// Deck generation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn deck_has_two_of_each(pairs in 0usize..40, seed in any::<u64>()) {
        let mut deck = DeckGenerator::new(GameRng::new(seed), Duration::from_secs(6));
        let cards = deck.generate(pairs, &|i: usize| i);

        prop_assert_eq!(cards.len(), pairs * 2);

        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        let mut ids: Vec<u32> = Vec::new();
        for card in &cards {
            *counts.entry(*card.content()).or_default() += 1;
            ids.push(card.id().raw());
            prop_assert!(!card.is_face_up());
            prop_assert!(!card.is_matched());
        }
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));

        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), pairs * 2);
    }
}

// ---------------------------------------------------------------------------
// Bonus decay
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn bonus_never_increases_while_open(steps in prop::collection::vec(0u64..3000, 1..20)) {
        let mut card = Card::new(CardId::new(0), (), Duration::from_secs(6));
        card.flip_up(Timestamp::ZERO);

        let mut now = Timestamp::ZERO;
        let mut last = card.remaining_bonus_fraction(now);
        for step in steps {
            now = now + Duration::from_millis(step);
            let fraction = card.remaining_bonus_fraction(now);
            prop_assert!(fraction <= last);
            prop_assert!((0.0..=1.0).contains(&fraction));
            last = fraction;
        }
    }

    #[test]
    fn bonus_frozen_once_stopped(
        open_ms in 0u64..10_000,
        later_ms in 0u64..100_000,
        matched in any::<bool>(),
    ) {
        let mut card = Card::new(CardId::new(0), (), Duration::from_secs(6));
        card.flip_up(Timestamp::ZERO);

        let stop = Timestamp::from_millis(open_ms);
        if matched {
            card.mark_matched(stop);
        } else {
            card.flip_down(stop);
        }

        let at_stop = card.remaining_bonus_fraction(stop);
        let later = card.remaining_bonus_fraction(stop + Duration::from_millis(later_ms));
        prop_assert_eq!(at_stop, later);
    }
}

// ---------------------------------------------------------------------------
// Selection protocol
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn fresh_choice_leaves_one_open(pairs in 1usize..12, seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let mut game = new_game(pairs, seed);
        let id = game.cards()[pick.index(pairs * 2)].id();

        prop_assert_eq!(game.choose_at(id, Timestamp::ZERO), ChooseOutcome::Opened);
        prop_assert_eq!(open_count(&game), 1);
        prop_assert_eq!(game.open_card_id(), Some(id));
    }

    #[test]
    fn match_scores_between_1_and_21(
        pairs in 1usize..12,
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
        wait_ms in 0u64..20_000,
    ) {
        let mut game = new_game(pairs, seed);
        let first = game.cards()[pick.index(pairs * 2)].id();
        let second = partner_of(&game, first);

        game.choose_at(first, Timestamp::ZERO);
        let before = game.points();
        let outcome = game.choose_at(second, Timestamp::from_millis(wait_ms));

        let gained = game.points() - before;
        prop_assert_eq!(outcome, ChooseOutcome::Matched { points: gained });
        prop_assert!((1..=21).contains(&gained));
        prop_assert!(game.card(first).unwrap().is_matched());
        prop_assert!(game.card(second).unwrap().is_matched());
    }

    #[test]
    fn mismatch_leaves_both_open(pairs in 2usize..12, seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let mut game = new_game(pairs, seed);
        let first = game.cards()[pick.index(pairs * 2)].id();
        let content = *game.card(first).unwrap().content();
        let second = game
            .cards()
            .iter()
            .find(|c| *c.content() != content)
            .map(|c| c.id())
            .unwrap();

        game.choose_at(first, Timestamp::ZERO);
        prop_assert_eq!(game.choose_at(second, Timestamp::from_secs(1)), ChooseOutcome::Mismatched);

        for id in [first, second] {
            let card = game.card(id).unwrap();
            prop_assert!(card.is_face_up());
            prop_assert!(!card.is_matched());
        }
        prop_assert_eq!(game.points(), 0);
    }

    #[test]
    fn random_play_keeps_invariants(pairs in 1usize..8, seed in any::<u64>(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..60)) {
        let mut game = new_game(pairs, seed);
        let mut matched_before = 0;

        for (step, pick) in picks.into_iter().enumerate() {
            let id = game.cards()[pick.index(pairs * 2)].id();
            game.choose_at(id, Timestamp::from_millis(step as u64 * 500));

            // Matched cards only accumulate, and never more than 2 are open
            let matched = game.cards().iter().filter(|c| c.is_matched()).count();
            prop_assert!(matched >= matched_before);
            prop_assert!(matched % 2 == 0);
            prop_assert!(open_count(&game) <= 2);
            matched_before = matched;

            prop_assert_eq!(game.done(), matched == pairs * 2);
        }
    }
}

// ---------------------------------------------------------------------------
// Leaderboard codec
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn codec_preserves_records(records in prop::collection::vec(("[a-z]{0,8}", any::<u32>()), 0..20)) {
        let ranks: Vec<Rank> = records.into_iter().map(|(id, points)| Rank::new(id, points)).collect();
        let bytes = codec::encode(&ranks).unwrap();
        prop_assert_eq!(codec::decode(&bytes).unwrap(), ranks);
    }
}
