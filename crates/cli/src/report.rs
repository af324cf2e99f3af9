// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Commands output.
use anyhow::Result;
use serde::Serialize;
use std::fmt;

use showhand_eval::{BestHand, Category, Hand};

/// The result of a command.
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report {
    /// The best five cards for a player.
    Eval {
        hole: Hand,
        board: Hand,
        best: BestHand,
    },
    /// The category of a five cards hand.
    Classify { hand: Hand, category: Category },
}

impl Report {
    /// Prints the report as text or as JSON.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            println!("{self}");
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Eval { hole, board, best } => {
                writeln!(f, "Hole:  {hole}")?;
                writeln!(f, "Board: {board}")?;
                write!(f, "Best:  {best}")
            }
            Report::Classify { hand, category } => write!(f, "{hand}: {category}"),
        }
    }
}
