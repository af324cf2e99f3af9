// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Best five cards selection out of seven cards.
use log::{debug, trace};
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use showhand_cards::{Card, CardError};

use crate::{Category, EvalError, TieBreak, classify};

/// Number of five cards subsets of seven cards.
pub const SUBSETS_COUNT: usize = 21;

/// Creates the table of the indices of the five cards subsets of seven cards.
///
/// Each subset leaves out two cards, subsets are in lexicographic order
/// starting with `[0, 1, 2, 3, 4]`.
const fn make_subsets() -> [[usize; 5]; SUBSETS_COUNT] {
    let mut out = [[0usize; 5]; SUBSETS_COUNT];
    let mut n = 0;

    // Leaves out cards i and j with i < j, from the last pair to the first.
    let mut i = 6;
    while i > 0 {
        i -= 1;

        let mut j = 7;
        while j > i + 1 {
            j -= 1;

            let mut k = 0;
            let mut idx = 0;
            while k < 7 {
                if k != i && k != j {
                    out[n][idx] = k;
                    idx += 1;
                }
                k += 1;
            }

            n += 1;
        }
    }

    out
}

const SUBSETS: [[usize; 5]; SUBSETS_COUNT] = make_subsets();

/// Returns the indices of all five cards subsets of seven cards.
pub fn five_card_subsets() -> &'static [[usize; 5]; SUBSETS_COUNT] {
    &SUBSETS
}

/// Calls the `f` closure for each five cards subset of the seven cards.
pub fn for_each_five<F>(cards: &[Card; 7], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    for subset in &SUBSETS {
        f(&subset.map(|idx| cards[idx]));
    }
}

/// The best five cards out of seven and their category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestHand {
    cards: [Card; 5],
    category: Category,
}

impl BestHand {
    fn new(cards: [Card; 5]) -> Self {
        let category = classify(&cards);
        Self { cards, category }
    }

    /// The five cards in the order they appear in the seven cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Checks if this hand is strictly better than `other`.
    fn beats<T>(&self, other: &BestHand, tie_break: &T) -> bool
    where
        T: TieBreak + ?Sized,
    {
        match self.category.cmp(&other.category) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => tie_break.compare(&self.cards, &other.cards) == Ordering::Greater,
        }
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

/// Selects the best five cards out of seven cards.
///
/// All the 21 five cards subsets are classified, a subset replaces the best one
/// found so far if it has a stronger category, or the same category and the
/// `tie_break` comparator says it's better. When neither is better the subset
/// found first is kept, so the result depends only on the cards order.
///
/// Fails with [EvalError::InvalidHandSize] if there are not seven cards and with
/// a duplicate card error if a card appears twice.
///
/// ```
/// # use showhand_eval::*;
/// let hand = Hand::parse(["4C", "4D", "4S", "4H", "3D", "3H", "2C"]).unwrap();
/// let best = select_best(hand.cards(), &Kickers).unwrap();
/// assert_eq!(best.category(), Category::FourOfAKind);
/// assert_eq!(best.to_string(), "FourOfAKind: 4C 4D 4S 4H 3D");
/// ```
pub fn select_best<T>(cards: &[Card], tie_break: &T) -> Result<BestHand, EvalError>
where
    T: TieBreak + ?Sized,
{
    let cards: &[Card; 7] = cards.try_into().map_err(|_| EvalError::InvalidHandSize {
        expected: 7,
        found: cards.len(),
    })?;

    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(CardError::DuplicateCard(card.to_string()).into());
        }
    }

    // The first subset is the initial best, the others are folded into it.
    let mut best = BestHand::new(SUBSETS[0].map(|idx| cards[idx]));
    let mut n = 0;
    for_each_five(cards, |five| {
        let candidate = BestHand::new(*five);
        trace!("Subset {n} {candidate}");
        if n > 0 && candidate.beats(&best, tie_break) {
            debug!("Subset {n} {candidate} beats {best}");
            best = candidate;
        }

        n += 1;
    });

    debug!("Selected {best}");
    Ok(best)
}
