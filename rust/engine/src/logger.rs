use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::HandResult;
use crate::game::Street;
use crate::player::PlayerAction;

/// Records a single player action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Table seat of the acting player
    pub player_id: usize,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action as applied, after clamping
    pub action: PlayerAction,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Session seed used for deck shuffling
    pub seed: Option<u64>,
    /// Button seat for the hand
    pub button: usize,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Hand result summary
    pub result: Option<String>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn from_result(hand_id: String, seed: Option<u64>, result: &HandResult) -> Self {
        let summary = result
            .payouts
            .iter()
            .map(|(seat, amount)| format!("seat {seat} +{amount}"))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            hand_id,
            seed,
            button: result.button,
            actions: result.actions.clone(),
            board: result.board.clone(),
            result: Some(summary),
            ts: None,
            meta: None,
            showdown: Some(ShowdownInfo {
                winners: result.winners.clone(),
                payouts: result.payouts.clone(),
                category: result
                    .winning_hand
                    .as_ref()
                    .map(|h| h.category.name().to_string()),
                split: result.split,
                notes: result.winning_hand.as_ref().map(|h| h.describe()),
            }),
        }
    }
}

/// How the pot was awarded.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won a share of the pot
    pub winners: Vec<usize>,
    /// `(seat, chips)` per winner
    #[serde(default)]
    pub payouts: Vec<(usize, u32)>,
    /// Winning category; absent when nobody had to show
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub split: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one JSON line per hand.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that writes nothing, with a fixed id date.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
