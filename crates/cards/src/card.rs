// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker card definitions and token parsing.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is a plain `(rank, suit)` value, it is written and parsed as a two
/// characters token with the rank first and the suit second:
///
/// ```
/// # use showhand_cards::{Card, Rank, Suit};
/// let card = "TC".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(card.to_string(), "TC");
/// ```
///
/// Cards are ordered by rank first and suit second.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a two characters card token like `"AH"` or `"7C"`.
    ///
    /// The rank must be one of `23456789TJQKA` and the suit one of `CSDH`,
    /// anything else is rejected.
    pub fn parse(token: &str) -> Result<Card, CardError> {
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidCardFormat(token.to_string()));
        };

        let rank = Rank::from_char(r).ok_or_else(|| CardError::InvalidRank {
            token: token.to_string(),
            rank: r,
        })?;

        let suit = Suit::from_char(s).ok_or_else(|| CardError::InvalidSuit {
            token: token.to_string(),
            suit: s,
        })?;

        Ok(Card::new(rank, suit))
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Card::parse(&token)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank, the discriminant is the rank value with the Ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value in 2..=14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Converts a rank character, returns `None` if the character is not a rank.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts].into_iter()
    }

    /// Converts a suit character, returns `None` if the character is not a suit.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn parse_all_cards() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            }
        }
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn parse_invalid_format() {
        for token in ["", "A", "ACE", "10C", "AC "] {
            assert_eq!(
                Card::parse(token),
                Err(CardError::InvalidCardFormat(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn parse_invalid_rank() {
        assert_eq!(
            Card::parse("1C"),
            Err(CardError::InvalidRank {
                token: "1C".to_string(),
                rank: '1'
            })
        );

        // Lower case ranks are not coerced.
        assert!(matches!(
            Card::parse("aC"),
            Err(CardError::InvalidRank { rank: 'a', .. })
        ));
    }

    #[test]
    fn parse_invalid_suit() {
        assert_eq!(
            Card::parse("AX"),
            Err(CardError::InvalidSuit {
                token: "AX".to_string(),
                suit: 'X'
            })
        );

        assert!(matches!(
            Card::parse("Ac"),
            Err(CardError::InvalidSuit { suit: 'c', .. })
        ));
    }

    #[test]
    fn rank_checked_before_suit() {
        assert!(matches!(
            Card::parse("XX"),
            Err(CardError::InvalidRank { rank: 'X', .. })
        ));
    }

    #[test]
    fn card_ordering() {
        let two = Card::new(Rank::Deuce, Suit::Hearts);
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        assert!(ace > two);

        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert!(ah > ac);
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Queen, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"QS\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

        assert!(serde_json::from_str::<Card>("\"QX\"").is_err());
        assert!(serde_json::from_str::<Card>("\"Q\"").is_err());
    }
}
