//! Cancellable delayed events.
//!
//! The controller never sleeps. It hands out a [`Schedule`] and the event
//! loop passes it to [`Timers`], which spawns one tokio sleep per request and
//! reports the [`TimerId`] back once the delay has elapsed.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Leaves the loading screen.
    Loading,
    /// Ends the feedback window after an answer is confirmed.
    Feedback,
}

/// A request to deliver `id` back to the controller after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub id: TimerId,
    pub kind: TimerKind,
    pub after: Duration,
}

/// Pending timers, each retained as a task handle until it fires or is
/// cancelled. Dropping `Timers` aborts everything still pending.
pub struct Timers {
    tx: mpsc::UnboundedSender<TimerId>,
    rx: mpsc::UnboundedReceiver<TimerId>,
    pending: HashMap<TimerId, JoinHandle<()>>,
}

impl Timers {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: HashMap::new(),
        }
    }

    /// Start the delay. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, schedule: Schedule) {
        let Schedule { id, kind, after } = schedule;
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(id);
        });

        debug!(timer = %id, ?kind, delay_ms = after.as_millis() as u64, "timer scheduled");
        if let Some(previous) = self.pending.insert(id, handle) {
            previous.abort();
        }
    }

    /// Returns false if the timer already fired or was never scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.remove(&id) {
            Some(handle) => {
                handle.abort();
                debug!(timer = %id, "timer cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (id, handle) in self.pending.drain() {
            handle.abort();
            trace!(timer = %id, "timer cancelled");
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Next fired timer without waiting. Ids cancelled after their task
    /// already sent are skipped.
    pub fn try_recv(&mut self) -> Option<TimerId> {
        while let Ok(id) = self.rx.try_recv() {
            if self.pending.remove(&id).is_some() {
                return Some(id);
            }
        }
        None
    }

    /// Wait for the next fired timer. Never resolves while nothing is
    /// pending.
    pub async fn recv(&mut self) -> Option<TimerId> {
        loop {
            let id = self.rx.recv().await?;
            if self.pending.remove(&id).is_some() {
                return Some(id);
            }
        }
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
