// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Card parsing errors.
use thiserror::Error;

/// Errors returned when parsing card tokens into cards and hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not exactly two characters long.
    #[error("invalid card {0:?}, expected a rank and a suit character")]
    InvalidCardFormat(String),

    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid rank {rank:?} in card {token:?}")]
    InvalidRank {
        /// The rejected token.
        token: String,
        /// The rejected rank character.
        rank: char,
    },

    /// The suit character is not one of `CSDH`.
    #[error("invalid suit {suit:?} in card {token:?}")]
    InvalidSuit {
        /// The rejected token.
        token: String,
        /// The rejected suit character.
        suit: char,
    },

    /// The same card appears more than once in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(String),
}
