//! Fixed-cadence background driver.
//!
//! [`RealtimeWorld`] moves a [`WaveWorld`] onto a dedicated tick thread
//! and runs it at `tick_rate_hz`. Input reaches the world only through
//! the command queue, drained at the start of every frame.
//!
//! ```text
//! Input thread(s)                 Tick thread
//!     |                               |
//!     |--send(cmd)------------------->| queue.drain(), world.apply()
//!     |   [bounded(max_ingress)]      | world.step(elapsed_ms)
//!     |                               | renderer.render(snapshot)
//!     |<--Frame-----------------------| frame_tx.try_send(frame)
//!     |   [bounded(1), lossy]         | park_timeout(budget - elapsed)
//! ```
//!
//! The driving time is the wall-clock milliseconds elapsed since the
//! thread started, read once per frame.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use ripple_core::{Command, IngressError, TickId};
use ripple_render::Renderer;
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, RealtimeConfig, WorldConfig};
use crate::ingress::{CommandSender, IngressQueue};
use crate::metrics::StepMetrics;
use crate::world::WaveWorld;

/// One rendered frame published by the tick thread.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Tick the frame shows.
    pub tick: TickId,
    /// Grid columns (pixel width).
    pub nx: i32,
    /// Grid rows (pixel height).
    pub ny: i32,
    /// RGBA8 pixels, row-major. Empty when rendering is disabled.
    pub pixels: Vec<u8>,
    /// Metrics of the step that produced the frame.
    pub metrics: StepMetrics,
}

/// A [`WaveWorld`] stepping on a background thread.
///
/// Dropping the handle shuts the thread down.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use ripple_core::{Command, GridCoord};
/// use ripple_engine::{RealtimeConfig, RealtimeWorld, WorldConfig};
///
/// let mut rt = RealtimeWorld::new(WorldConfig::new(128, 96), RealtimeConfig::default()).unwrap();
/// rt.send(Command::AddSource(GridCoord::new(64, 48))).unwrap();
/// if let Some(frame) = rt.recv_frame_timeout(Duration::from_secs(1)) {
///     assert_eq!(frame.pixels.len(), 128 * 96 * 4);
/// }
/// let world = rt.shutdown().unwrap();
/// assert_eq!(world.sources().len(), 1);
/// ```
pub struct RealtimeWorld {
    sender: CommandSender,
    frame_rx: Receiver<Frame>,
    shutdown_flag: Arc<AtomicBool>,
    dropped_frames: Arc<AtomicU64>,
    tick_thread: Option<JoinHandle<WaveWorld>>,
}

struct TickThreadState {
    world: WaveWorld,
    queue: IngressQueue,
    frame_tx: Sender<Frame>,
    shutdown_flag: Arc<AtomicBool>,
    dropped_frames: Arc<AtomicU64>,
    tick_budget: Duration,
    render: bool,
}

impl RealtimeWorld {
    /// Build a world from `config` and start stepping it.
    pub fn new(config: WorldConfig, realtime: RealtimeConfig) -> Result<Self, ConfigError> {
        let world = WaveWorld::new(config)?;
        Self::spawn(world, realtime)
    }

    /// Start stepping an existing world.
    pub fn spawn(world: WaveWorld, realtime: RealtimeConfig) -> Result<Self, ConfigError> {
        realtime.validate()?;
        let queue = world.ingress_queue()?;
        let sender = queue.sender();
        let (frame_tx, frame_rx) = crossbeam_channel::bounded(1);
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let dropped_frames = Arc::new(AtomicU64::new(0));

        let state = TickThreadState {
            world,
            queue,
            frame_tx,
            shutdown_flag: Arc::clone(&shutdown_flag),
            dropped_frames: Arc::clone(&dropped_frames),
            tick_budget: Duration::from_secs_f64(1.0 / realtime.tick_rate_hz),
            render: realtime.render,
        };
        let tick_thread = thread::Builder::new()
            .name("ripple-tick".into())
            .spawn(move || state.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("tick thread: {e}"),
            })?;
        info!(tick_rate_hz = realtime.tick_rate_hz, "realtime tick thread started");

        Ok(Self {
            sender,
            frame_rx,
            shutdown_flag,
            dropped_frames,
            tick_thread: Some(tick_thread),
        })
    }

    /// Queue a command for the next frame.
    pub fn send(&self, cmd: Command) -> Result<(), IngressError> {
        self.sender.send(cmd)
    }

    /// A handle for sending commands from other threads.
    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    /// The newest frame published so far, if any is waiting.
    pub fn try_latest_frame(&self) -> Option<Frame> {
        self.frame_rx.try_iter().last()
    }

    /// Block until a frame arrives or `timeout` passes.
    ///
    /// Returns `None` on timeout or once the tick thread has stopped.
    pub fn recv_frame_timeout(&self, timeout: Duration) -> Option<Frame> {
        self.frame_rx.recv_timeout(timeout).ok()
    }

    /// Frames discarded because the consumer had not taken the previous
    /// one.
    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames.load(Ordering::Relaxed)
    }

    /// Whether the tick thread is still running.
    pub fn is_running(&self) -> bool {
        self.tick_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Stop the tick thread and recover the world.
    ///
    /// Returns `None` if the thread panicked or was already shut down.
    pub fn shutdown(&mut self) -> Option<WaveWorld> {
        let handle = self.tick_thread.take()?;
        self.shutdown_flag.store(true, Ordering::Release);
        // The thread may be parked waiting out its frame budget.
        handle.thread().unpark();
        match handle.join() {
            Ok(world) => {
                info!(
                    tick = world.current_tick().0,
                    dropped_frames = self.dropped_frames(),
                    "realtime tick thread stopped"
                );
                Some(world)
            }
            Err(_) => {
                warn!("realtime tick thread panicked");
                None
            }
        }
    }
}

impl Drop for RealtimeWorld {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl TickThreadState {
    fn run(mut self) -> WaveWorld {
        let renderer = Renderer::new();
        let epoch = Instant::now();
        while !self.shutdown_flag.load(Ordering::Acquire) {
            let frame_start = Instant::now();
            let time = epoch.elapsed().as_secs_f64() * 1000.0;
            let metrics = self.world.frame_at(&mut self.queue, time).clone();

            let pixels = if self.render {
                renderer.render(&self.world.snapshot())
            } else {
                Vec::new()
            };
            let grid = self.world.grid();
            self.publish(Frame {
                tick: metrics.tick,
                nx: grid.nx(),
                ny: grid.ny(),
                pixels,
                metrics,
            });

            if let Some(remaining) = self.tick_budget.checked_sub(frame_start.elapsed()) {
                thread::park_timeout(remaining);
            }
        }
        debug!(tick = self.world.current_tick().0, "tick loop exiting");
        self.world
    }

    fn publish(&self, frame: Frame) {
        match self.frame_tx.try_send(frame) {
            Ok(()) => {}
            Err(TrySendError::Full(frame)) => {
                self.dropped_frames.fetch_add(1, Ordering::Relaxed);
                trace!(tick = frame.tick.0, "frame dropped, consumer lagging");
            }
            // The handle is gone; shutdown follows shortly.
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}
