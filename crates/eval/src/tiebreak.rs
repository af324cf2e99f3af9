// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Same category hands comparison.
use std::cmp::Ordering;

use showhand_cards::Card;

use crate::detect::{RankCounts, RankSet};

/// Compares two five cards hands of the same category.
///
/// Returns [Ordering::Greater] if `a` is the better hand, [Ordering::Less] if `b`
/// is the better hand, and [Ordering::Equal] if they split. The selector only
/// calls it for hands with the same category, an implementation doesn't need to
/// give meaningful results for hands in different categories.
///
/// Any closure with the same signature is a tie breaker:
///
/// ```
/// # use showhand_eval::*;
/// let highest_first = |a: &[Card; 5], b: &[Card; 5]| a[0].rank().cmp(&b[0].rank());
/// let hand = Hand::parse(["2C", "4S", "6D", "9H", "KC", "QD", "3H"]).unwrap();
/// assert!(select_best(hand.cards(), &highest_first).is_ok());
/// ```
pub trait TieBreak {
    /// Compares hand `a` with hand `b`.
    fn compare(&self, a: &[Card; 5], b: &[Card; 5]) -> Ordering;
}

impl<F> TieBreak for F
where
    F: Fn(&[Card; 5], &[Card; 5]) -> Ordering,
{
    fn compare(&self, a: &[Card; 5], b: &[Card; 5]) -> Ordering {
        self(a, b)
    }
}

/// Compares same category hands by ranks.
///
/// Ranks are grouped by how many times they appear, the groups are compared
/// from the largest to the smallest and from the highest rank to the lowest, so
/// a full house compares the triple before the pair and a pair compares the
/// pair before the kickers. In a wheel straight the Ace counts as a one.
/// Suits never break a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kickers;

impl Kickers {
    /// The ranks values of a hand in comparison order.
    ///
    /// A hand has at most five distinct ranks, unused positions are zero.
    pub fn ranking(hand: &[Card; 5]) -> [u8; 5] {
        // The Ace plays low.
        if hand.iter().map(Card::rank).collect::<RankSet>().is_wheel() {
            return [5, 4, 3, 2, 1];
        }

        // Largest group first, highest rank first within groups of the same size.
        let counts = RankCounts::new(hand);
        let mut ranking = [0; 5];
        let mut idx = 0;
        for size in (1..=hand.len() as u8).rev() {
            for (value, _) in counts.iter().rev().filter(|&(_, count)| count == size) {
                ranking[idx] = value;
                idx += 1;
            }
        }

        ranking
    }
}

impl TieBreak for Kickers {
    fn compare(&self, a: &[Card; 5], b: &[Card; 5]) -> Ordering {
        Self::ranking(a).cmp(&Self::ranking(b))
    }
}
