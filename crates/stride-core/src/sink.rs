//! Delivery of completed sessions to the log sink.
//!
//! The session player never waits on storage. When a session completes it
//! drops the record into a [`CompletionOutbox`], an unbounded channel whose
//! send never blocks. A [`SinkDispatcher`] drains the channel on its own task
//! and hands each record to a [`SessionLogSink`]. Delivery is at most once:
//! a failed or timed-out write is logged and counted, never retried, and never
//! reported back to the player.

use std::{sync::Arc, time::Duration};

use log::{debug, warn};
use tokio::{
    sync::mpsc,
    task::{self, JoinHandle},
    time,
};

use crate::{
    error::{Result, StrideError},
    models::CompletedSessionRecord,
};

/// Upper bound on a single sink write before it is abandoned.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Destination for completed session records.
///
/// Implementations may block; the dispatcher calls them on the blocking
/// thread pool.
pub trait SessionLogSink: Send + Sync + 'static {
    fn record(&self, record: &CompletedSessionRecord) -> Result<()>;
}

impl<F> SessionLogSink for F
where
    F: Fn(&CompletedSessionRecord) -> Result<()> + Send + Sync + 'static,
{
    fn record(&self, record: &CompletedSessionRecord) -> Result<()> {
        self(record)
    }
}

/// Sending half of the completion channel held by a session player.
#[derive(Debug, Clone)]
pub struct CompletionOutbox {
    sender: mpsc::UnboundedSender<CompletedSessionRecord>,
}

impl CompletionOutbox {
    /// Creates an outbox together with the receiver that drains it.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CompletedSessionRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queues a record without waiting. Returns false if nobody is listening
    /// anymore, in which case the record is lost.
    pub fn deliver(&self, record: CompletedSessionRecord) -> bool {
        match self.sender.send(record) {
            Ok(()) => true,
            Err(mpsc::error::SendError(record)) => {
                warn!(
                    "Dropping completed session '{}': log sink is gone",
                    record.workout_title
                );
                false
            }
        }
    }
}

/// Counters reported by a dispatcher when it shuts down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    pub delivered: u32,
    pub failed: u32,
}

/// Background task that forwards outbox records to a sink.
pub struct SinkDispatcher {
    outbox: CompletionOutbox,
    task: JoinHandle<DeliveryStats>,
}

impl SinkDispatcher {
    /// Spawns a dispatcher on the current tokio runtime with the default
    /// per-record timeout.
    pub fn spawn<S: SessionLogSink>(sink: S) -> Self {
        Self::spawn_with_timeout(sink, DEFAULT_DELIVERY_TIMEOUT)
    }

    /// Spawns a dispatcher that abandons any single write after `timeout`.
    pub fn spawn_with_timeout<S: SessionLogSink>(sink: S, timeout: Duration) -> Self {
        let (outbox, receiver) = CompletionOutbox::channel();
        let task = tokio::spawn(drain(Arc::new(sink), receiver, timeout));
        Self { outbox, task }
    }

    /// Outbox to hand to a session player.
    pub fn outbox(&self) -> CompletionOutbox {
        self.outbox.clone()
    }

    /// Stops accepting records and waits until every queued record has been
    /// attempted. Outboxes handed out earlier must be dropped for this to
    /// return.
    pub async fn shutdown(self) -> Result<DeliveryStats> {
        let Self { outbox, task } = self;
        drop(outbox);
        task.await.map_err(StrideError::join)
    }
}

async fn drain<S: SessionLogSink>(
    sink: Arc<S>,
    mut receiver: mpsc::UnboundedReceiver<CompletedSessionRecord>,
    timeout: Duration,
) -> DeliveryStats {
    let mut stats = DeliveryStats::default();

    while let Some(record) = receiver.recv().await {
        let title = record.workout_title.clone();
        match deliver_one(sink.clone(), record, timeout).await {
            Ok(()) => {
                debug!("Logged completed session '{title}'");
                stats.delivered += 1;
            }
            Err(e) => {
                warn!("Failed to log completed session '{title}': {e}");
                stats.failed += 1;
            }
        }
    }

    stats
}

async fn deliver_one<S: SessionLogSink>(
    sink: Arc<S>,
    record: CompletedSessionRecord,
    timeout: Duration,
) -> Result<()> {
    let write = task::spawn_blocking(move || sink.record(&record));

    match time::timeout(timeout, write).await {
        Ok(joined) => joined.map_err(StrideError::join)?,
        Err(_) => Err(StrideError::Delivery {
            message: format!("write timed out after {}ms", timeout.as_millis()),
        }),
    }
}
