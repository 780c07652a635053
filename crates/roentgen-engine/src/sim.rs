//! Public simulation API and lifecycle control.
//!
//! [`RadiationSimulation`] is constructed once per process and handed to
//! whatever emits radiation — an explicit service object rather than a
//! global instance. Round lifecycle events map onto [`start`] and
//! [`stop`]; both are silent no-ops off the authoritative host.
//!
//! [`start`]: RadiationSimulation::start
//! [`stop`]: RadiationSimulation::stop

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use roentgen_core::{Pulse, SourceId, TileGrid, WorldPoint};

use crate::config::{ConfigError, EngineConfig};
use crate::processor::PulseProcessor;
use crate::worker::TickWorker;

/// Server-authoritative radiation simulation service.
///
/// Producers submit pulses from any thread via
/// [`request_pulse`](Self::request_pulse); a dedicated worker thread
/// drains the inbox once per tick and commits deposits through the grid
/// adapter. The inbox outlives the worker, so pulses submitted while the
/// engine is stopped are retained and processed after the next start —
/// an explicit policy, not an accident (see DESIGN.md).
pub struct RadiationSimulation {
    grid: Arc<dyn TileGrid + Send + Sync>,
    pulse_tx: Sender<Pulse>,
    pulse_rx: Receiver<Pulse>,
    running: Arc<AtomicBool>,
    tick_delay_ms: Arc<AtomicU64>,
    ticks: Arc<AtomicU64>,
    min_trace_strength: f32,
    authoritative: bool,
    /// Join handle of the live worker. The mutex serializes lifecycle
    /// transitions so two workers can never run at once.
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl RadiationSimulation {
    /// Create a stopped simulation over `grid`.
    pub fn new(
        grid: Arc<dyn TileGrid + Send + Sync>,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (pulse_tx, pulse_rx) = crossbeam_channel::unbounded();
        Ok(Self {
            grid,
            pulse_tx,
            pulse_rx,
            running: Arc::new(AtomicBool::new(false)),
            tick_delay_ms: Arc::new(AtomicU64::new(config.tick_delay_ms)),
            ticks: Arc::new(AtomicU64::new(0)),
            min_trace_strength: config.min_trace_strength,
            authoritative: config.authoritative,
            worker: Mutex::new(None),
        })
    }

    /// Enqueue a pulse for the next tick.
    ///
    /// Callable from any thread; never blocks beyond the channel send.
    /// FIFO per producer; pulses are consumed exactly once.
    pub fn request_pulse(&self, location: WorldPoint, strength: f32, source: SourceId) {
        // Cannot disconnect: we hold the receiver for our own lifetime.
        let _ = self.pulse_tx.send(Pulse::new(location, strength, source));
    }

    /// Start the tick worker. No-op off the authoritative host.
    ///
    /// Restart semantics: an already-running worker is stopped and joined
    /// first, so exactly one worker ever runs. Queued pulses survive the
    /// restart.
    pub fn start(&self) {
        if !self.authoritative {
            return;
        }
        let mut slot = self.worker.lock().unwrap();
        self.stop_locked(&mut slot);

        self.running.store(true, Ordering::Release);
        let worker = TickWorker::new(
            PulseProcessor::new(Arc::clone(&self.grid), self.min_trace_strength),
            self.pulse_rx.clone(),
            Arc::clone(&self.running),
            Arc::clone(&self.tick_delay_ms),
            Arc::clone(&self.ticks),
        );
        let handle = thread::Builder::new()
            .name("roentgen-tick".into())
            .spawn(move || worker.run())
            .expect("failed to spawn tick thread");
        *slot = Some(handle);
        log::info!("radiation tick worker started");
    }

    /// Stop the tick worker and wait for it to exit.
    ///
    /// Idempotent, and a no-op off the authoritative host. The worker
    /// finishes its current batch, observes the cleared flag at the next
    /// tick boundary, and returns; queued pulses are retained for the
    /// next start.
    pub fn stop(&self) {
        if !self.authoritative {
            return;
        }
        let mut slot = self.worker.lock().unwrap();
        self.stop_locked(&mut slot);
    }

    fn stop_locked(&self, slot: &mut Option<JoinHandle<()>>) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = slot.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                log::error!("radiation tick worker panicked");
            } else {
                log::info!("radiation tick worker stopped");
            }
        }
    }

    /// Round-start hook: starts the simulation.
    pub fn on_round_started(&self) {
        self.start();
    }

    /// Round-end hook: stops the simulation.
    pub fn on_round_ended(&self) {
        self.stop();
    }

    /// Set the minimum tick interval in milliseconds; takes effect from
    /// the next tick onward.
    pub fn set_tick_delay(&self, milliseconds: u64) {
        self.tick_delay_ms.store(milliseconds, Ordering::Relaxed);
    }

    /// Whether the tick worker is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ticks completed since construction. Monotonic across restarts.
    pub fn tick_count(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Pulses waiting in the inbox.
    pub fn pending_pulses(&self) -> usize {
        self.pulse_rx.len()
    }

    /// The grid this simulation deposits into.
    pub fn grid(&self) -> &Arc<dyn TileGrid + Send + Sync> {
        &self.grid
    }
}

impl Drop for RadiationSimulation {
    fn drop(&mut self) {
        // Teardown stops the worker regardless of the authority flag;
        // a non-authoritative instance never has one to stop.
        if let Ok(mut slot) = self.worker.lock() {
            self.stop_locked(&mut slot);
        }
    }
}
