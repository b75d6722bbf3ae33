//! The one-shot initialization gate.
//!
//! Tracks how far a manager's initialization has progressed: managers
//! enter `AwaitingHost` at construction and reach `Patched` once the host
//! has signalled readiness and the interception points exist. The state
//! machine only moves forward; `Patched` is terminal.

use tokio::sync::watch;

/// Initialization states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GateState {
    /// Nothing has happened yet.
    Uninitialized,
    /// Waiting on the host's readiness signal.
    AwaitingHost,
    /// Interception points are installed (or adopted); operations may run.
    Patched,
}

/// One-shot forward-only state machine with broadcast observation.
#[derive(Debug)]
pub struct InitGate {
    tx: watch::Sender<GateState>,
}

impl InitGate {
    /// Creates a gate in the `Uninitialized` state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(GateState::Uninitialized);
        Self { tx }
    }

    /// The current state.
    pub fn state(&self) -> GateState {
        *self.tx.borrow()
    }

    /// Moves the gate forward to `next`. Backward transitions are ignored,
    /// so the gate never re-enters an earlier state.
    pub fn advance(&self, next: GateState) {
        self.tx.send_modify(|state| {
            if next > *state {
                *state = next;
            }
        });
    }
}

impl Default for InitGate {
    fn default() -> Self {
        Self::new()
    }
}
