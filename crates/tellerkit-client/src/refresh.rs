//! The refresh gate: coalesces concurrent token refreshes into one.
//!
//! When an access token expires, every in-flight request gets a 401 in the
//! same window. Only one of them may actually call the refresh endpoint;
//! the rest must wait for that one call to settle and then share its
//! outcome. This module owns that invariant.
//!
//! The gate is an explicit value owned by the [`ApiClient`](crate::ApiClient)
//! — not process-global state — so independent clients (and tests) never
//! interfere with each other.
//!
//! # Invariants
//!
//! - At most one refresh is in flight per gate at any time.
//! - Every caller that joins while a refresh is in flight observes the
//!   same settled outcome, success or failure.
//! - The gate always returns to idle when the refresh settles, no matter
//!   how many waiters there were — including when the leader is dropped
//!   mid-flight, in which case waiters settle with a failure instead of
//!   hanging.

use std::sync::Mutex;

use tellerkit_protocol::AuthTokens;
use tokio::sync::watch;

use crate::RefreshError;

/// What a settled refresh produced. `Clone` so one outcome can fan out to
/// every waiter.
pub(crate) type RefreshOutcome = Result<AuthTokens, RefreshError>;

type OutcomeReceiver = watch::Receiver<Option<RefreshOutcome>>;

/// What `join()` hands back: lead the refresh, or wait on the one in flight.
pub(crate) enum RefreshTicket<'g> {
    /// No refresh was in flight — this caller runs it and must settle.
    Leader(RefreshPermit<'g>),
    /// A refresh is already in flight — await its outcome.
    Waiter(OutcomeReceiver),
}

/// Coalesces concurrent refresh attempts into a single in-flight call.
///
/// The slot holds the broadcast channel of the in-flight refresh; `None`
/// means idle. A plain `std::sync::Mutex` is enough because `join` and
/// `clear` are synchronous and the lock is never held across an await.
pub(crate) struct RefreshGate {
    slot: Mutex<Option<OutcomeReceiver>>,
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Joins the gate: the first caller becomes the leader, everyone else
    /// a waiter on the same outcome.
    pub(crate) fn join(&self) -> RefreshTicket<'_> {
        let mut slot = self.slot.lock().expect("gate lock");
        if let Some(rx) = slot.as_ref() {
            return RefreshTicket::Waiter(rx.clone());
        }
        let (tx, rx) = watch::channel(None);
        *slot = Some(rx);
        RefreshTicket::Leader(RefreshPermit {
            gate: self,
            tx,
            settled: false,
        })
    }

    fn clear(&self) {
        *self.slot.lock().expect("gate lock") = None;
    }

    #[cfg(test)]
    fn is_idle(&self) -> bool {
        self.slot.lock().expect("gate lock").is_none()
    }
}

/// The leader's obligation to settle the refresh it started.
///
/// Dropping the permit without calling [`settle`](Self::settle) counts as
/// a failed refresh: the gate returns to idle and waiters receive an
/// "abandoned" error. That keeps cancellation of the leading request from
/// stranding everyone else.
pub(crate) struct RefreshPermit<'g> {
    gate: &'g RefreshGate,
    tx: watch::Sender<Option<RefreshOutcome>>,
    settled: bool,
}

impl RefreshPermit<'_> {
    /// Settles the refresh: reopens the gate, then broadcasts the outcome
    /// to every waiter. Reopening first means a 401 that arrives after
    /// settlement starts a fresh cycle instead of consuming a stale one.
    pub(crate) fn settle(mut self, outcome: RefreshOutcome) {
        self.settled = true;
        self.gate.clear();
        let _ = self.tx.send(Some(outcome));
    }
}

impl Drop for RefreshPermit<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.gate.clear();
            let _ = self.tx.send(Some(Err(RefreshError::abandoned())));
        }
    }
}

/// Waiter side: suspends until the in-flight refresh settles.
pub(crate) async fn await_outcome(mut rx: OutcomeReceiver) -> RefreshOutcome {
    loop {
        if let Some(outcome) = rx.borrow_and_update().clone() {
            return outcome;
        }
        if rx.changed().await.is_err() {
            // Sender gone without a value: treat like an abandoned leader.
            return Err(RefreshError::abandoned());
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
