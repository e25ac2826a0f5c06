use std::sync::mpsc::Sender;

use crate::analysis::DecisionReport;
use crate::game::GameState;

/// Notifications published by the engine while a hand runs. Sinks see them
/// in exactly the order they were produced.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Snapshot after a change to the hand
    StateChanged(Box<GameState>),
    /// Human-readable line about the hand
    Message(String),
    /// Analysis of the human seat's last decision
    Analysis(Box<DecisionReport>),
    /// The given table seat is about to be asked for an action
    AwaitingAction { seat: usize },
}

pub trait EventSink: Send {
    fn emit(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn emit(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Forwards clones to a channel. A dropped receiver is ignored so a closed
/// UI never stalls the hand.
impl EventSink for Sender<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}
