// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
// ...
//
// No Match:        1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```

use std::time::Instant;

use showhand_eval::*;

#[rustfmt::skip]
fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];

    let deck = Deck::default();
    let cards = deck.cards();
    let n = cards.len();

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                        counts[classify(&hand) as usize] += 1;
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("No Match:        {}", counts[Category::NoMatch as usize]);
    println!("One Pair:        {}", counts[Category::OnePair as usize]);
    println!("Two Pair:        {}", counts[Category::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[Category::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[Category::Straight as usize]);
    println!("Flush:           {}", counts[Category::Flush as usize]);
    println!("Full House:      {}", counts[Category::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[Category::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[Category::StraightFlush as usize]);
    println!("Royal Flush:     {}", counts[Category::RoyalFlush as usize]);
}
