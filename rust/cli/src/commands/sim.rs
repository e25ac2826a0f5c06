//! Simulation command handler: AI opponents playing each other.
//!
//! The whole session is reproducible from its seed. With `--output`, each
//! hand is appended to a JSONL hand history.
//!
//! # Environment Variables
//!
//! - `HOLDEM_SIM_BREAK_AFTER`: stop after N hands and report an interruption

use std::io::Write;
use std::sync::mpsc;

use holdem_ai::{OpponentKind, build, into_source};
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, TableConfig};
use holdem_engine::events::GameEvent;
use holdem_engine::logger::{HandLogger, HandRecord};
use tracing::info;

use super::{TableOverrides, resolve_config};
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub hands: u32,
    pub players: Option<usize>,
    pub stack: Option<u32>,
    pub opponents: Option<String>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub verbose: bool,
}

/// Runs up to `opts.hands` hands between AI seats.
///
/// Stops early, successfully, once fewer than two seats have chips.
/// Returns `CliError::Interrupted` when `HOLDEM_SIM_BREAK_AFTER` cuts the
/// run short.
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = resolve_config(TableOverrides {
        players: opts.players,
        stack: opts.stack,
        opponents: opts.opponents,
        seed: opts.seed,
        ..TableOverrides::default()
    })?;
    let kind: OpponentKind = cfg.opponents.parse()?;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "sim: hands={} players={} opponents={} seed={}",
        opts.hands, cfg.players, kind, seed
    )?;

    let table = TableConfig {
        small_blind: cfg.small_blind,
        big_blind: cfg.big_blind,
        ..TableConfig::default()
    };
    let mut engine = Engine::new(Deck::new_with_seed(seed), table);
    for seat in 0..cfg.players {
        let ai = build(kind, seat, seed);
        let name = format!("{} #{}", ai.name(), seat + 1);
        engine.add_seat(name, cfg.starting_stack, into_source(ai));
    }

    let events = if opts.verbose {
        let (tx, rx) = mpsc::channel::<GameEvent>();
        engine.subscribe(tx);
        Some(rx)
    } else {
        None
    };

    let mut logger = opts.output.as_deref().map(HandLogger::create).transpose()?;

    let break_after = std::env::var("HOLDEM_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    let mut completed = 0u32;
    while completed < opts.hands {
        if engine.funded_seats() < 2 {
            ui::display_warning(err, "Stopped early: only one player has chips left")?;
            break;
        }
        let result = engine.play_hand()?;
        if let Some(rx) = &events {
            for event in rx.try_iter() {
                if let GameEvent::Message(m) = event {
                    writeln!(out, "{}", m)?;
                }
            }
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&HandRecord::from_result(id, Some(seed), &result))?;
        }
        completed += 1;

        if break_after == Some(completed) {
            writeln!(out, "Interrupted: saved {}/{}", completed, opts.hands)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{}",
                completed, opts.hands
            )));
        }
    }

    info!(hands = completed, seed, "simulation finished");
    writeln!(out, "Simulated: {} hands", completed)?;
    writeln!(out, "Final stacks:")?;
    for p in engine.players() {
        writeln!(out, "  {:<24} {}", p.name(), p.stack())?;
    }
    Ok(())
}
