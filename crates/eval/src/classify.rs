// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use showhand_cards::Card;

use crate::{Category, EvalError, detect::*};

/// A category detector.
pub type Detector = fn(&[Card]) -> bool;

/// The category detectors from the strongest to the weakest category.
///
/// A hand in a category also matches some of the weaker detectors, the first
/// matching detector in this order gives the hand category.
pub const DETECTORS: [(Category, Detector); 9] = [
    (Category::RoyalFlush, is_royal_flush),
    (Category::StraightFlush, is_straight_flush),
    (Category::FourOfAKind, is_four_of_a_kind),
    (Category::FullHouse, is_full_house),
    (Category::Flush, is_flush),
    (Category::Straight, is_straight),
    (Category::ThreeOfAKind, is_three_of_a_kind),
    (Category::TwoPair, is_two_pair),
    (Category::OnePair, is_one_pair),
];

/// Returns the strongest category of a five cards hand.
///
/// ```
/// # use showhand_eval::*;
/// let hand = Hand::parse(["2C", "2S", "2D", "5H", "5C"]).unwrap();
/// let cards: &[Card; 5] = hand.cards().try_into().unwrap();
/// assert_eq!(classify(cards), Category::FullHouse);
/// ```
pub fn classify(hand: &[Card; 5]) -> Category {
    DETECTORS
        .iter()
        .find(|(_, detect)| detect(hand))
        .map(|(category, _)| *category)
        .unwrap_or(Category::NoMatch)
}

/// Like [classify] for a slice, fails if the slice doesn't have five cards.
pub fn try_classify(cards: &[Card]) -> Result<Category, EvalError> {
    let hand: &[Card; 5] = cards.try_into().map_err(|_| EvalError::InvalidHandSize {
        expected: 5,
        found: cards.len(),
    })?;

    Ok(classify(hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use showhand_cards::{Deck, Hand};

    fn classify_str(tokens: &str) -> Category {
        let hand = Hand::parse(tokens.split_whitespace()).unwrap();
        try_classify(hand.cards()).unwrap()
    }

    #[test]
    fn classify_each_category() {
        assert_eq!(classify_str("TC JC QC KC AC"), Category::RoyalFlush);
        assert_eq!(classify_str("9C TC JC QC KC"), Category::StraightFlush);
        assert_eq!(classify_str("AD 2D 3D 4D 5D"), Category::StraightFlush);
        assert_eq!(classify_str("7C 7S 7D 7H KC"), Category::FourOfAKind);
        assert_eq!(classify_str("2C 2S 2D 5H 5C"), Category::FullHouse);
        assert_eq!(classify_str("2H 7H 9H JH KH"), Category::Flush);
        assert_eq!(classify_str("5C 6S 7D 8H 9C"), Category::Straight);
        assert_eq!(classify_str("AC 2D 3H 4S 5C"), Category::Straight);
        assert_eq!(classify_str("7C 7S 7D 9H KC"), Category::ThreeOfAKind);
        assert_eq!(classify_str("2C 2S 5D 5H KC"), Category::TwoPair);
        assert_eq!(classify_str("2C 2S 5D 9H KC"), Category::OnePair);
        assert_eq!(classify_str("2C 4S 6D 9H KC"), Category::NoMatch);
    }

    #[test]
    fn card_order_doesnt_matter() {
        assert_eq!(classify_str("AC KC QC JC TC"), Category::RoyalFlush);
        assert_eq!(classify_str("5C 2S 5H 2D 2C"), Category::FullHouse);
        assert_eq!(classify_str("5C 3D AH 2S 4C"), Category::Straight);
    }

    #[test]
    fn classify_after_reparse() {
        for tokens in ["TC JC QC KC AC", "2C 2S 2D 5H 5C", "AC 2D 3H 4S 5C"] {
            let hand = Hand::parse(tokens.split_whitespace()).unwrap();
            let reparsed = Hand::parse(hand.to_string().split_whitespace()).unwrap();
            assert_eq!(
                try_classify(hand.cards()).unwrap(),
                try_classify(reparsed.cards()).unwrap()
            );
        }
    }

    #[test]
    fn try_classify_size() {
        let hand = Hand::parse(["2C", "2S", "2D", "5H"]).unwrap();
        assert_eq!(
            try_classify(hand.cards()),
            Err(EvalError::InvalidHandSize {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn classify_all_hands() {
        // Number of 5 cards hands for each category, indexed by category.
        const EXPECTED: [usize; 10] = [
            1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4,
        ];

        let deck = Deck::default();
        let cards = deck.cards();
        let n = cards.len();
        let mut counts = [0usize; 10];

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let category = classify(&hand);

                            // Never weaker than what the detectors match.
                            if is_royal_flush(&hand) {
                                assert_eq!(category, Category::RoyalFlush);
                            }

                            counts[category as usize] += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(counts, EXPECTED);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}
