// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Showhand playing cards types.
//!
//! This crate defines the card types and the strict parsing of two characters
//! card tokens:
//!
//! ```
//! # use showhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("AH".parse::<Card>(), Ok(ah));
//! assert!("1H".parse::<Card>().is_err());
//! ```
//!
//! a [Hand] type that holds a sequence of distinct cards:
//!
//! ```
//! # use showhand_cards::Hand;
//! let hand = Hand::complete(["AH", "AD"], ["2C", "7S", "9D", "JH", "KC"]).unwrap();
//! assert_eq!(hand.len(), 7);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showhand_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole = [deck.deal(), deck.deal()];
//! assert!(hole.iter().all(Option::is_some));
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod error;
mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::CardError;
pub use hand::Hand;
