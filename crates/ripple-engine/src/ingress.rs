//! Bounded command queue between input threads and the step loop.
//!
//! [`CommandSender`] handles are cheap to clone and may live on any
//! thread. The owner of the [`IngressQueue`] drains it once per frame,
//! before stepping, so every mutation lands between two steps and in the
//! order it was sent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use ripple_core::{Command, IngressError};
use smallvec::SmallVec;

use crate::config::ConfigError;

/// Commands drained in one frame. Interactive input rarely exceeds a
/// handful per frame, so these stay on the stack.
pub type CommandBatch = SmallVec<[Command; 8]>;

/// Bounded FIFO of pending commands.
///
/// # Examples
///
/// ```
/// use ripple_core::{Command, GridCoord};
/// use ripple_engine::IngressQueue;
///
/// let mut queue = IngressQueue::new(4).unwrap();
/// let tx = queue.sender();
/// tx.send(Command::AddSource(GridCoord::new(3, 3))).unwrap();
/// tx.send(Command::ClearWalls).unwrap();
///
/// let batch = queue.drain();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[1], Command::ClearWalls);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct IngressQueue {
    tx: Sender<Command>,
    rx: Receiver<Command>,
    capacity: usize,
    rejected: Arc<AtomicU64>,
}

/// Cloneable, `Send` handle for queueing commands.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: Sender<Command>,
    rejected: Arc<AtomicU64>,
}

impl IngressQueue {
    /// Create a queue holding at most `capacity` commands.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::IngressQueueZero);
        }
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Ok(Self {
            tx,
            rx,
            capacity,
            rejected: Arc::new(AtomicU64::new(0)),
        })
    }

    /// A new handle for sending commands into this queue.
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
            rejected: Arc::clone(&self.rejected),
        }
    }

    /// Queue a command from the owning thread.
    pub fn push(&self, cmd: Command) -> Result<(), IngressError> {
        try_send(&self.tx, &self.rejected, cmd)
    }

    /// Remove every queued command, oldest first.
    ///
    /// Only commands already queued when the call starts are taken, so a
    /// sender that keeps pushing cannot stall the frame.
    pub fn drain(&mut self) -> CommandBatch {
        let pending = self.rx.len();
        self.rx.try_iter().take(pending).collect()
    }

    /// Commands currently queued.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Maximum number of queued commands.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total sends rejected because the queue was full.
    pub fn rejections(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }
}

impl CommandSender {
    /// Queue a command without blocking.
    ///
    /// Returns [`IngressError::QueueFull`] when the queue is at capacity
    /// and [`IngressError::Disconnected`] once the queue has been dropped.
    pub fn send(&self, cmd: Command) -> Result<(), IngressError> {
        try_send(&self.tx, &self.rejected, cmd)
    }
}

fn try_send(tx: &Sender<Command>, rejected: &AtomicU64, cmd: Command) -> Result<(), IngressError> {
    tx.try_send(cmd).map_err(|e| match e {
        TrySendError::Full(_) => {
            rejected.fetch_add(1, Ordering::Relaxed);
            IngressError::QueueFull
        }
        TrySendError::Disconnected(_) => IngressError::Disconnected,
    })
}
