// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! A validated set of cards.
use ahash::AHashSet;
use serde::Serialize;
use std::fmt;

use crate::{Card, CardError};

/// An ordered sequence of distinct cards.
///
/// Cards keep the order in which they were added, two cards are the same card
/// only if both rank and suit match, so `AC` and `AH` can be in the same hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Parses a hand from card tokens.
    pub fn parse<I, S>(tokens: I) -> Result<Hand, CardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hand = Hand::default();
        hand.extend_tokens(tokens)?;
        Ok(hand)
    }

    /// Builds the evaluation set from the hole and community tokens.
    ///
    /// The community cards come first followed by the hole cards, the two groups
    /// are checked for duplicates as a single set.
    ///
    /// ```
    /// # use showhand_cards::{CardError, Hand};
    /// let hand = Hand::complete(["AC", "KD"], ["2C", "3D", "4H"]).unwrap();
    /// assert_eq!(hand.to_string(), "2C 3D 4H AC KD");
    ///
    /// let err = Hand::complete(["AC", "KD"], ["2C", "AC", "4H"]).unwrap_err();
    /// assert_eq!(err, CardError::DuplicateCard("AC".to_string()));
    /// ```
    pub fn complete<H, C, S, T>(hole: H, community: C) -> Result<Hand, CardError>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut hand = Hand::parse(community)?;
        hand.extend_tokens(hole)?;
        Ok(hand)
    }

    /// Creates a hand from cards that have already been parsed.
    pub fn from_cards(cards: &[Card]) -> Result<Hand, CardError> {
        let mut seen = AHashSet::with_capacity(cards.len());
        for card in cards {
            if !seen.insert(*card) {
                return Err(CardError::DuplicateCard(card.to_string()));
            }
        }

        Ok(Hand {
            cards: cards.to_vec(),
        })
    }

    /// Parses the tokens and appends them to this hand.
    ///
    /// New cards are checked against the cards already in the hand and against
    /// each other, on error the hand is left unchanged.
    pub fn extend_tokens<I, S>(&mut self, tokens: I) -> Result<(), CardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = self.cards.iter().copied().collect::<AHashSet<_>>();
        let mut added = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            let card = Card::parse(token)?;
            if !seen.insert(card) {
                return Err(CardError::DuplicateCard(token.to_string()));
            }

            added.push(card);
        }

        self.cards.extend(added);
        Ok(())
    }

    /// The hand cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the hand contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn parse_hand() {
        let hand = Hand::parse(["TC", "JC", "QC", "KC", "AC"]).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.cards()[0], Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(hand.cards()[4], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(hand.to_string(), "TC JC QC KC AC");
    }

    #[test]
    fn parse_reports_first_bad_token() {
        let err = Hand::parse(["TC", "1C", "AX"]).unwrap_err();
        assert!(matches!(err, CardError::InvalidRank { rank: '1', .. }));

        let err = Hand::parse(["TC", "AX", "1C"]).unwrap_err();
        assert!(matches!(err, CardError::InvalidSuit { suit: 'X', .. }));
    }

    #[test]
    fn duplicates_by_identity() {
        // Same rank different suits is fine.
        let hand = Hand::parse(["AC", "AD", "AH", "AS"]).unwrap();
        assert_eq!(hand.len(), 4);

        let err = Hand::parse(["AC", "KD", "AC"]).unwrap_err();
        assert_eq!(err, CardError::DuplicateCard("AC".to_string()));
    }

    #[test]
    fn complete_checks_both_groups() {
        let hand = Hand::complete(["AC", "KD"], ["2C", "3D", "4H", "5S", "6C"]).unwrap();
        assert_eq!(hand.len(), 7);
        assert_eq!(hand.to_string(), "2C 3D 4H 5S 6C AC KD");

        let err = Hand::complete(["AC", "KD"], ["2C", "3D", "4H", "5S", "AC"]).unwrap_err();
        assert_eq!(err, CardError::DuplicateCard("AC".to_string()));

        let err = Hand::complete(["AC", "AC"], ["2C", "3D", "4H", "5S", "6C"]).unwrap_err();
        assert_eq!(err, CardError::DuplicateCard("AC".to_string()));
    }

    #[test]
    fn extend_is_atomic() {
        let mut hand = Hand::parse(["AC", "KD"]).unwrap();

        let err = hand.extend_tokens(["2C", "3D", "KD"]).unwrap_err();
        assert_eq!(err, CardError::DuplicateCard("KD".to_string()));
        assert_eq!(hand.len(), 2);

        let err = hand.extend_tokens(["2C", "3"]).unwrap_err();
        assert_eq!(err, CardError::InvalidCardFormat("3".to_string()));
        assert_eq!(hand.len(), 2);

        hand.extend_tokens(["2C", "3D"]).unwrap();
        assert_eq!(hand.len(), 4);
        assert!(hand.contains(Card::new(Rank::Trey, Suit::Diamonds)));
    }

    #[test]
    fn from_cards_rejects_duplicates() {
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        assert_eq!(Hand::from_cards(&[ac, kd]).unwrap().cards(), &[ac, kd]);
        assert_eq!(
            Hand::from_cards(&[ac, kd, ac]),
            Err(CardError::DuplicateCard("AC".to_string()))
        );
    }

    #[test]
    fn reparse_display() {
        let hand = Hand::parse(["9H", "TS", "2D", "AC"]).unwrap();
        assert_eq!(Hand::parse(hand.to_string().split_whitespace()), Ok(hand));
    }
}
