//! Async task management for non-blocking table operations.
//!
//! Saves (and the demo's simulated initial load) run as background tokio
//! tasks so the UI keeps rendering and handling keys while they are in
//! flight. Results come back to the main event loop through a channel.
//!
//! # Architecture
//!
//! 1. The table hands out a `PendingSave` in response to a key press
//! 2. Instead of awaiting inline, the loop spawns it via `TaskSpawner`
//! 3. The main loop continues rendering and handling events
//! 4. When the task completes, it sends a `TaskMessage` through the channel
//! 5. The main loop polls the channel with `try_recv()` and hands the
//!    result back to the table

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::table::{PendingSave, Record};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum TaskMessage<R: Record> {
    /// A row save finished.
    SaveFinished {
        /// The saved row.
        id: R::Id,
        /// `Err` holds the display form of the callback's error.
        result: Result<(), String>,
    },

    /// The initial record collection is available.
    RecordsLoaded(Vec<R>),
}

/// Spawns background tasks for async operations.
///
/// Each method spawns a tokio task that sends its result through the
/// channel. Send errors mean the receiver is gone (shutdown) and are
/// ignored.
pub struct TaskSpawner<R: Record> {
    tx: mpsc::UnboundedSender<TaskMessage<R>>,
}

impl<R: Record> Clone for TaskSpawner<R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<R: Record + Send> TaskSpawner<R> {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<TaskMessage<R>>) -> Self {
        Self { tx }
    }

    /// Spawn a save handed out by the table.
    pub fn spawn_save(&self, pending: PendingSave<R::Id>) {
        let tx = self.tx.clone();
        debug!(id = ?pending.id(), "Spawning save");
        tokio::spawn(async move {
            let (id, result) = pending.run().await;
            let _ = tx.send(TaskMessage::SaveFinished { id, result });
        });
    }

    /// Spawn a load that delivers `records` after `delay`.
    pub fn spawn_load(&self, records: Vec<R>, delay: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(TaskMessage::RecordsLoaded(records));
        });
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel<R: Record + Send>(
) -> (mpsc::UnboundedReceiver<TaskMessage<R>>, TaskSpawner<R>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
