// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use showhand_cards::CardError;

/// Errors returned by the classifier and the best five cards selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card token or the cards set is invalid.
    #[error(transparent)]
    Card(#[from] CardError),

    /// The number of cards doesn't match what the operation expects.
    #[error("invalid hand size {found}, expected {expected} cards")]
    InvalidHandSize {
        /// The number of cards the operation needs.
        expected: usize,
        /// The number of cards given.
        found: usize,
    },
}
