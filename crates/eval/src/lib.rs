// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Showhand poker hand classifier.
//!
//! Classifies five cards hands into the ten poker categories, from
//! [Category::NoMatch] to [Category::RoyalFlush], and selects the best five
//! cards out of the seven cards made by two hole cards and five community cards.
//!
//! To evaluate a player hand from card tokens use [evaluate]:
//!
//! ```
//! # use showhand_eval::*;
//! let best = evaluate(["AC", "AD"], ["AH", "KC", "KD", "2S", "7H"]).unwrap();
//! assert_eq!(best.category(), Category::FullHouse);
//! assert_eq!(best.to_string(), "FullHouse: AH KC KD AC AD");
//! ```
//!
//! Same category hands are compared with a [TieBreak] comparator, [evaluate]
//! uses the [Kickers] comparator, use [select_best] to pass a different one.
//! Each [detect] function checks a single category on its own.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
mod classify;
pub mod detect;
mod error;
mod select;
mod tiebreak;

pub use category::Category;
pub use classify::{DETECTORS, Detector, classify, try_classify};
pub use error::EvalError;
pub use select::{BestHand, SUBSETS_COUNT, five_card_subsets, for_each_five, select_best};
pub use tiebreak::{Kickers, TieBreak};

// Reexport cards types.
pub use showhand_cards::{Card, CardError, Deck, Hand, Rank, Suit};

/// Selects the best five cards for the hole and community card tokens.
///
/// The tokens are validated as a single set and there must be seven cards in
/// total, same category hands are compared with [Kickers]. The community cards
/// come before the hole cards, so when two subsets tie the one with more
/// community cards is found first.
pub fn evaluate<H, C, S, T>(hole: H, community: C) -> Result<BestHand, EvalError>
where
    H: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let hand = Hand::complete(hole, community)?;
    log::debug!("Evaluating {hand}");
    select_best(hand.cards(), &Kickers)
}
