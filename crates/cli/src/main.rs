// Copyright (C) 2025 Showhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Showhand CLI, classifies poker hands and selects the best five cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{error, info};
use rand::prelude::*;
use std::process::ExitCode;

use showhand_eval::{Card, Deck, Hand, Kickers, select_best, try_classify};

mod report;
use report::Report;

#[derive(Debug, Parser)]
#[clap(name = "showhand", version, about = "Poker hands classifier")]
struct Cli {
    /// Print the results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Log verbosity, repeat for more details.
    #[clap(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Selects the best five cards out of the hole and community cards.
    Eval {
        /// The two hole cards, for example `AC KD`.
        #[clap(long, num_args = 2, required = true)]
        hole: Vec<String>,
        /// The five community cards.
        #[clap(long, short, num_args = 5, required = true)]
        board: Vec<String>,
    },
    /// Classifies a five cards hand.
    Classify {
        /// The five cards, for example `2C 2S 2D 5H 5C`.
        #[clap(num_args = 5, required = true)]
        cards: Vec<String>,
    },
    /// Deals a random hand and selects its best five cards.
    Deal {
        /// The shuffle seed, deals a different hand on each run if not set.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

/// Settings shared by all commands.
#[derive(Debug, Clone, Copy)]
struct Config {
    /// Print JSON instead of text.
    json: bool,
    /// The default log level.
    log_level: log::LevelFilter,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let log_level = match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        Self {
            json: cli.json,
            log_level,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    env_logger::builder()
        .filter_level(config.log_level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: Config) -> Result<()> {
    let report = match command {
        Command::Eval { hole, board } => evaluate(&hole, &board)?,
        Command::Classify { cards } => {
            let hand = Hand::parse(&cards)?;
            let category = try_classify(hand.cards())?;
            Report::Classify { hand, category }
        }
        Command::Deal { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let (hole, board) = deal(&mut rng)?;
            evaluate_hands(hole, board)?
        }
    };

    report.print(config.json)
}

/// Validates the tokens and selects the best five cards.
fn evaluate(hole: &[String], board: &[String]) -> Result<Report> {
    // Hole and community cards are checked for duplicates together.
    let hand = Hand::complete(hole, board).context("Invalid cards")?;
    let (board, hole) = hand.cards().split_at(board.len());
    evaluate_hands(Hand::from_cards(hole)?, Hand::from_cards(board)?)
}

fn evaluate_hands(hole: Hand, board: Hand) -> Result<Report> {
    info!("Evaluating hole {hole} board {board}");

    let cards = [board.cards(), hole.cards()].concat();
    let best = select_best(&cards, &Kickers)?;
    Ok(Report::Eval { hole, board, best })
}

/// Deals two hole cards and five community cards.
fn deal<R: Rng>(rng: &mut R) -> Result<(Hand, Hand)> {
    let mut deck = Deck::new_and_shuffled(rng);
    let mut deal_n = |n: usize| -> Result<Vec<Card>> {
        (0..n)
            .map(|_| deck.deal().context("Deck is empty"))
            .collect()
    };

    let hole = Hand::from_cards(&deal_n(2)?)?;
    let board = Hand::from_cards(&deal_n(5)?)?;
    Ok((hole, board))
}
