//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Texas Hold'em at the terminal: play against bots with a coach, or let the
/// bots play each other.
#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Texas Hold'em trainer")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against AI opponents, with coaching after each decision
    Play {
        /// Seats at the table, you included (2-9)
        #[arg(long)]
        players: Option<usize>,
        /// Starting chips per seat
        #[arg(long)]
        stack: Option<u32>,
        #[arg(long)]
        small_blind: Option<u32>,
        #[arg(long)]
        big_blind: Option<u32>,
        /// calling_station, tight_passive, loose_aggressive or mixed
        #[arg(long)]
        opponents: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many hands (default: until you quit or bust)
        #[arg(long)]
        hands: Option<u32>,
        /// Seconds to decide before you are checked or folded
        #[arg(long)]
        timeout: Option<u64>,
        /// Skip the decision analysis
        #[arg(long)]
        no_coach: bool,
    },
    /// Let AI opponents play each other
    Sim {
        #[arg(long)]
        hands: u32,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        stack: Option<u32>,
        #[arg(long)]
        opponents: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write the hand history as JSONL to this file
        #[arg(long)]
        output: Option<String>,
        /// Print every action as it happens
        #[arg(long)]
        verbose: bool,
    },
    /// Describe cards: two hole cards, or a 5-7 card hand
    Eval {
        /// Card notation, e.g. `As Kd` or `AsKd Qh Jh Th`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = [
            vec!["holdem", "cfg"],
            vec!["holdem", "play"],
            vec!["holdem", "play", "--players", "4", "--no-coach", "--seed", "7"],
            vec!["holdem", "sim", "--hands", "3"],
            vec!["holdem", "eval", "As", "Kd"],
        ];
        for args in commands {
            assert!(HoldemCli::try_parse_from(&args).is_ok(), "failed: {:?}", args);
        }
    }

    #[test]
    fn sim_requires_hand_count_and_eval_requires_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "sim"]).is_err());
        assert!(HoldemCli::try_parse_from(["holdem", "eval"]).is_err());
    }

    #[test]
    fn play_blinds_use_kebab_case_flags() {
        let cli = HoldemCli::try_parse_from([
            "holdem",
            "play",
            "--small-blind",
            "25",
            "--big-blind",
            "50",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                small_blind,
                big_blind,
                ..
            } => assert_eq!((small_blind, big_blind), (Some(25), Some(50))),
            other => panic!("unexpected {:?}", other),
        }
    }
}
