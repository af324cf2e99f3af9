// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand category detectors.
//!
//! Each detector checks a single category on a set of cards and doesn't look at
//! any other category, so a royal flush is also a straight flush, a flush and a
//! straight. Use [classify](fn@crate::classify) to get the strongest category of a
//! five cards hand.
//!
//! The detectors are meant to be called with five cards, the flush and straight
//! flush detectors also work on larger sets.
use showhand_cards::{Card, Rank, Suit};

/// The rank value of the Ace.
const ACE: u8 = Rank::Ace as u8;

/// The lowest straight that doesn't use the Ace ends with a Six.
const SIX: u8 = Rank::Six as u8;

/// Number of cards for each rank value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RankCounts([u8; 15]);

impl RankCounts {
    /// Counts the cards by rank.
    pub(crate) fn new(cards: &[Card]) -> Self {
        cards.iter().fold(Self::default(), |mut counts, card| {
            counts.0[card.rank().value() as usize] += 1;
            counts
        })
    }

    /// The number of ranks that appear exactly `n` times.
    fn ranks_with(&self, n: u8) -> usize {
        self.0.iter().filter(|&&count| count == n).count()
    }

    /// Iterates (rank value, count) for the ranks in the hand, lowest rank first.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(value, count)| (value as u8, *count))
    }
}

/// A set of distinct rank values, bit `v` is set if rank value `v` is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RankSet(u16);

impl RankSet {
    /// The ranks of a wheel straight, A-2-3-4-5.
    const WHEEL: RankSet = RankSet(1 << 2 | 1 << 3 | 1 << 4 | 1 << 5 | 1 << ACE);

    /// The ranks of a royal flush, T-J-Q-K-A.
    const BROADWAY: RankSet = RankSet(0b11111 << Rank::Ten as u8);

    fn insert(&mut self, rank: Rank) {
        self.0 |= 1 << rank.value();
    }

    /// Number of distinct ranks.
    fn len(&self) -> u32 {
        self.0.count_ones()
    }

    fn contains_all(&self, other: RankSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Checks for five consecutive ranks, the Ace plays low only in the wheel.
    pub(crate) fn has_straight(&self) -> bool {
        let run = (SIX..=ACE).any(|high| self.contains_all(RankSet(0b11111 << (high - 4))));
        run || self.is_wheel()
    }

    /// Checks for the A-2-3-4-5 ranks.
    pub(crate) fn is_wheel(&self) -> bool {
        self.contains_all(Self::WHEEL)
    }
}

impl FromIterator<Rank> for RankSet {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        iter.into_iter().fold(RankSet::default(), |mut set, rank| {
            set.insert(rank);
            set
        })
    }
}

/// Groups the cards ranks by suit.
fn suit_groups(cards: &[Card]) -> [RankSet; 4] {
    cards.iter().fold([RankSet::default(); 4], |mut groups, card| {
        groups[suit_index(card.suit())].insert(card.rank());
        groups
    })
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Spades => 1,
        Suit::Diamonds => 2,
        Suit::Hearts => 3,
    }
}

/// Checks for exactly one pair of cards with the same rank.
pub fn is_one_pair(cards: &[Card]) -> bool {
    RankCounts::new(cards).ranks_with(2) == 1
}

/// Checks for at least two pairs of different ranks.
pub fn is_two_pair(cards: &[Card]) -> bool {
    RankCounts::new(cards).ranks_with(2) >= 2
}

/// Checks for exactly one rank that appears three times.
pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    RankCounts::new(cards).ranks_with(3) == 1
}

/// Checks for five consecutive distinct ranks, or the A-2-3-4-5 wheel.
pub fn is_straight(cards: &[Card]) -> bool {
    cards.iter().map(Card::rank).collect::<RankSet>().has_straight()
}

/// Checks for five or more cards of the same suit.
pub fn is_flush(cards: &[Card]) -> bool {
    let counts = cards.iter().fold([0u8; 4], |mut counts, card| {
        counts[suit_index(card.suit())] += 1;
        counts
    });

    counts.iter().any(|&count| count >= 5)
}

/// Checks for a rank that appears three or more times and a different rank
/// that appears two or more times.
pub fn is_full_house(cards: &[Card]) -> bool {
    let counts = RankCounts::new(cards);
    counts.iter().any(|(triple, count)| {
        count >= 3 && counts.iter().any(|(pair, count)| pair != triple && count >= 2)
    })
}

/// Checks for exactly one rank that appears four times.
pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    RankCounts::new(cards).ranks_with(4) == 1
}

/// Checks for five consecutive ranks, or the wheel, within a single suit.
pub fn is_straight_flush(cards: &[Card]) -> bool {
    suit_groups(cards)
        .iter()
        .any(|group| group.len() >= 5 && group.has_straight())
}

/// Checks for T, J, Q, K, A within a single suit.
pub fn is_royal_flush(cards: &[Card]) -> bool {
    suit_groups(cards)
        .iter()
        .any(|group| group.contains_all(RankSet::BROADWAY))
}
