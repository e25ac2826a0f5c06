//! Where seat decisions come from.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::game::GameState;
use crate::player::PlayerAction;

/// Decides an action for the player at `idx` in `state`.
///
/// The returned action should be legal; the engine only clamps it (see
/// [`crate::rules::normalize_action`]).
pub trait ActionSource: Send {
    fn decide(&mut self, state: &GameState, idx: usize) -> PlayerAction;
}

impl<F> ActionSource for F
where
    F: FnMut(&GameState, usize) -> PlayerAction + Send,
{
    fn decide(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        self(state, idx)
    }
}

/// A human answer to one prompt of a [`ChannelActionSource`].
///
/// `request` counts the seat's prompts from 1, in the order the engine emits
/// [`GameEvent::AwaitingAction`](crate::events::GameEvent::AwaitingAction) for
/// that seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatReply {
    pub request: u64,
    pub action: PlayerAction,
}

/// Blocking provider for an interactive seat, fed through a channel.
///
/// If no action arrives within the timeout, or the sending side is gone, the
/// seat checks when that is free and folds otherwise. A reply to an earlier,
/// timed-out prompt is dropped, so a late answer never lands on a later
/// decision.
pub struct ChannelActionSource {
    rx: Receiver<SeatReply>,
    timeout: Duration,
    request: u64,
}

impl ChannelActionSource {
    pub fn new(rx: Receiver<SeatReply>, timeout: Duration) -> Self {
        Self {
            rx,
            timeout,
            request: 0,
        }
    }

    fn fallback(state: &GameState, idx: usize) -> PlayerAction {
        if state.can_check(idx) {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }
}

impl ActionSource for ChannelActionSource {
    fn decide(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        self.request += 1;
        let deadline = Instant::now() + self.timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(reply) if reply.request == self.request => return reply.action,
                Ok(reply) => {
                    warn!(
                        idx,
                        request = self.request,
                        late = reply.request,
                        "dropped reply to an expired prompt"
                    );
                }
                Err(RecvTimeoutError::Timeout) => {
                    let action = Self::fallback(state, idx);
                    warn!(idx, timeout_ms = self.timeout.as_millis() as u64, ?action, "human action timed out");
                    return action;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    let action = Self::fallback(state, idx);
                    warn!(idx, ?action, "human action channel closed");
                    return action;
                }
            }
        }
    }
}
