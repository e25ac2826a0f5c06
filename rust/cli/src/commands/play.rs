//! # Play Command
//!
//! Interactive play: one human seat against AI opponents, with the coach
//! judging each of the human's decisions.
//!
//! The engine runs on a worker thread and talks to this thread through two
//! channels. Engine events come in and are rendered here; the human's
//! actions go out to the seat's [`ChannelActionSource`]. If the human takes
//! longer than the timeout, the seat checks when that is free and folds
//! otherwise. Each reply names the prompt it answers, so an answer typed
//! after the timeout is ignored by later prompts.
//!
//! Typing `q` (or closing stdin) ends the session after the current hand;
//! the rest of that hand is played out with the same check-or-fold default.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use holdem_ai::coach::{Coach, recommend};
use holdem_ai::stats::SessionStats;
use holdem_ai::{OpponentKind, build, into_source};
use holdem_engine::analysis::DecisionReport;
use holdem_engine::cards::HoleCards;
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, TableConfig};
use holdem_engine::events::GameEvent;
use holdem_engine::game::GameState;
use holdem_engine::player::PlayerAction;
use holdem_engine::source::{ChannelActionSource, SeatReply};
use tracing::{debug, info};

use super::{TableOverrides, resolve_config};
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, check_action, parse_player_action};

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub players: Option<usize>,
    pub stack: Option<u32>,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub opponents: Option<String>,
    pub seed: Option<u64>,
    /// Hands to play; `None` plays until the human quits or busts
    pub hands: Option<u32>,
    pub timeout: Option<u64>,
    pub coach: bool,
}

/// Messages from the engine thread.
enum UiMsg {
    Event(GameEvent),
    HandDone {
        hand_number: u64,
        won: bool,
        delta: i64,
        stack: u32,
    },
    Finished(Result<String, String>),
}

const HUMAN_NAME: &str = "You";
/// The human always takes the first seat.
const HUMAN_SEAT: usize = 0;

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when the session ends normally, the human quitting included
/// * `Err(CliError)` for invalid options, an aborted hand or I/O errors
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = resolve_config(TableOverrides {
        players: opts.players,
        stack: opts.stack,
        small_blind: opts.small_blind,
        big_blind: opts.big_blind,
        opponents: opts.opponents,
        seed: opts.seed,
        timeout: opts.timeout,
    })?;
    let kind: OpponentKind = cfg.opponents.parse()?;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: players={} opponents={} blinds={}/{} stack={} seed={}",
        cfg.players, kind, cfg.small_blind, cfg.big_blind, cfg.starting_stack, seed
    )?;
    writeln!(
        out,
        "Commands: fold, check, call, bet <amount>, raise <to>, allin, hint, q"
    )?;

    let (ui_tx, ui_rx) = mpsc::channel::<UiMsg>();
    let (action_tx, action_rx) = mpsc::channel::<SeatReply>();
    let quit = Arc::new(AtomicBool::new(false));

    let table = TableConfig {
        small_blind: cfg.small_blind,
        big_blind: cfg.big_blind,
        human_timeout: Duration::from_secs(cfg.timeout_secs),
    };
    let session = Session {
        table,
        seed,
        kind,
        players: cfg.players,
        stack: cfg.starting_stack,
        hands: opts.hands,
        coach: opts.coach,
    };
    let worker_quit = Arc::clone(&quit);
    let worker = thread::spawn(move || session.run(action_rx, ui_tx, worker_quit));

    let mut stats = SessionStats::new(cfg.starting_stack);
    let outcome = drive_ui(&ui_rx, action_tx, &quit, &mut stats, out, err, stdin);
    // the worker sees the quit flag or the closed channel and winds down
    quit.store(true, Ordering::SeqCst);
    drop(ui_rx);
    let _ = worker.join();

    writeln!(out, "{}", stats.summary())?;
    outcome
}

/// Everything the engine thread needs to build its table.
struct Session {
    table: TableConfig,
    seed: u64,
    kind: OpponentKind,
    players: usize,
    stack: u32,
    hands: Option<u32>,
    coach: bool,
}

impl Session {
    fn run(self, action_rx: Receiver<SeatReply>, ui_tx: Sender<UiMsg>, quit: Arc<AtomicBool>) {
        let timeout = self.table.human_timeout;
        let mut engine = Engine::new(Deck::new_with_seed(self.seed), self.table);
        let human = engine.add_human_seat(
            HUMAN_NAME,
            self.stack,
            ChannelActionSource::new(action_rx, timeout),
        );
        for seat in 1..self.players {
            let ai = build(self.kind, seat, self.seed);
            let name = format!("{} #{}", ai.name(), seat);
            engine.add_seat(name, self.stack, into_source(ai));
        }
        if self.coach {
            engine.set_analyzer(Coach::new());
        }
        let sink_tx = ui_tx.clone();
        engine.subscribe(move |e: &GameEvent| {
            let _ = sink_tx.send(UiMsg::Event(e.clone()));
        });

        let mut played = 0u32;
        let finished = loop {
            if quit.load(Ordering::SeqCst) {
                break Ok("You left the table".to_string());
            }
            if self.hands.is_some_and(|h| played >= h) {
                break Ok(format!("Played {} hands", played));
            }
            if engine.players()[human].stack() == 0 {
                break Ok("You are out of chips".to_string());
            }
            if engine.funded_seats() < 2 {
                break Ok("You won every chip at the table!".to_string());
            }
            let before = engine.players()[human].stack();
            let result = match engine.play_hand() {
                Ok(r) => r,
                Err(e) => break Err(e.to_string()),
            };
            played += 1;
            let after = engine.players()[human].stack();
            let done = UiMsg::HandDone {
                hand_number: result.hand_number,
                won: result.winners.contains(&human),
                delta: i64::from(after) - i64::from(before),
                stack: after,
            };
            if ui_tx.send(done).is_err() {
                break Ok("Display closed".to_string());
            }
        };
        info!(hands = played, "play session finished");
        let _ = ui_tx.send(UiMsg::Finished(finished));
    }
}

/// Renders engine events and answers the human's turns until the engine
/// thread reports that the session is over.
fn drive_ui(
    ui_rx: &Receiver<UiMsg>,
    action_tx: Sender<SeatReply>,
    quit: &AtomicBool,
    stats: &mut SessionStats,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut action_tx = Some(action_tx);
    let mut pending: VecDeque<UiMsg> = VecDeque::new();
    let mut last_state: Option<Box<GameState>> = None;
    let mut hole: Option<HoleCards> = None;
    let mut last_report: Option<Box<DecisionReport>> = None;
    // prompts seen for the human seat; replies carry this number
    let mut prompts = 0u64;

    loop {
        let msg = match pending.pop_front() {
            Some(m) => m,
            None => match ui_rx.recv() {
                Ok(m) => m,
                Err(_) => return Err(CliError::Engine("engine thread stopped".to_string())),
            },
        };
        match msg {
            UiMsg::Event(GameEvent::StateChanged(state)) => {
                if let Some(h) = state
                    .players()
                    .iter()
                    .find(|p| p.id() == HUMAN_SEAT)
                    .and_then(|p| p.hole_cards())
                {
                    hole = Some(h);
                }
                last_state = Some(state);
            }
            UiMsg::Event(GameEvent::Message(m)) => writeln!(out, "{}", m)?,
            UiMsg::Event(GameEvent::Analysis(report)) => {
                stats.record_decision(&report);
                ui::render_report(out, &report)?;
                last_report = Some(report);
            }
            UiMsg::Event(GameEvent::AwaitingAction { seat }) if seat == HUMAN_SEAT => {
                prompts += 1;
                let (Some(tx), Some(state)) = (action_tx.as_ref(), last_state.as_deref()) else {
                    continue;
                };
                match ask_human(state, ui_rx, &mut pending, out, err, stdin)? {
                    Turn::Act(action) => {
                        // a closed channel means the engine already moved on
                        let _ = tx.send(SeatReply {
                            request: prompts,
                            action,
                        });
                    }
                    Turn::TimedOut => {}
                    Turn::Quit => {
                        quit.store(true, Ordering::SeqCst);
                        // dropping the sender makes the seat check or fold at once
                        action_tx = None;
                        writeln!(out, "Leaving after this hand...")?;
                    }
                }
            }
            UiMsg::Event(_) => {}
            UiMsg::HandDone {
                hand_number,
                won,
                delta,
                stack,
            } => {
                ui::render_hand_delta(out, hand_number, delta)?;
                if let Some(h) = hole.take() {
                    stats.record_hand_result(&h, delta, won);
                }
                stats.update_chips(stack);
                if let Some(last) = last_report.take() {
                    for tip in stats.end_of_hand_tips(&last) {
                        writeln!(out, "  Tip: {}", tip)?;
                    }
                }
                writeln!(out)?;
            }
            UiMsg::Finished(Ok(reason)) => {
                writeln!(out, "{}", reason)?;
                return Ok(());
            }
            UiMsg::Finished(Err(e)) => return Err(CliError::Engine(e)),
        }
    }
}

enum Turn {
    Act(PlayerAction),
    TimedOut,
    Quit,
}

/// Prompts until the human enters a legal action, asks to quit, or runs out
/// of time.
fn ask_human(
    state: &GameState,
    ui_rx: &Receiver<UiMsg>,
    pending: &mut VecDeque<UiMsg>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Turn, CliError> {
    let Some(idx) = state.players().iter().position(|p| p.id() == HUMAN_SEAT) else {
        return Ok(Turn::TimedOut);
    };
    writeln!(out)?;
    ui::render_table(out, state, HUMAN_SEAT)?;
    loop {
        write!(out, "{}", ui::prompt_line(state, idx))?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(Turn::Quit);
        };
        // the engine is blocked on this seat, so any event means time ran out
        if let Ok(msg) = ui_rx.try_recv() {
            pending.push_back(msg);
            ui::display_warning(err, "time is up, your seat acted automatically")?;
            return Ok(Turn::TimedOut);
        }
        match parse_player_action(&line) {
            ParseResult::Quit => return Ok(Turn::Quit),
            ParseResult::Hint => match recommend(state, idx) {
                Some(rec) => writeln!(out, "{}", rec.summary())?,
                None => writeln!(out, "No recommendation available")?,
            },
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action(action) => match check_action(state, idx, action) {
                Ok(action) => {
                    debug!(?action, "human action accepted");
                    return Ok(Turn::Act(action));
                }
                Err(msg) => ui::write_error(err, &msg)?,
            },
        }
    }
}
