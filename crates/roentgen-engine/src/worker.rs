//! The dedicated tick thread.
//!
//! Owns a [`PulseProcessor`] exclusively (moved in via `thread::spawn`).
//! Each tick: drain the inbox into the working list, process every pulse,
//! then park for whatever remains of the tick budget. An overrunning tick
//! rolls straight into the next iteration — radiation lags behind real
//! time but stays correct.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use roentgen_core::Pulse;

use crate::processor::PulseProcessor;

/// State owned by the tick thread's main loop.
pub(crate) struct TickWorker {
    processor: PulseProcessor,
    inbox: Receiver<Pulse>,
    running: Arc<AtomicBool>,
    tick_delay_ms: Arc<AtomicU64>,
    ticks: Arc<AtomicU64>,
    /// Working batch, reused across ticks. Never shared: producers only
    /// ever touch the channel.
    working: Vec<Pulse>,
}

impl TickWorker {
    pub fn new(
        processor: PulseProcessor,
        inbox: Receiver<Pulse>,
        running: Arc<AtomicBool>,
        tick_delay_ms: Arc<AtomicU64>,
        ticks: Arc<AtomicU64>,
    ) -> Self {
        Self {
            processor,
            inbox,
            running,
            tick_delay_ms,
            ticks,
            working: Vec::new(),
        }
    }

    /// Main tick loop. Runs until the running flag clears; the flag is
    /// checked once per iteration, so the current batch always completes
    /// before exit.
    pub fn run(mut self) {
        while self.running.load(Ordering::Acquire) {
            let tick_start = Instant::now();

            while let Ok(pulse) = self.inbox.try_recv() {
                self.working.push(pulse);
            }
            for pulse in self.working.drain(..) {
                self.processor.process(&pulse);
            }

            self.ticks.fetch_add(1, Ordering::Release);

            let budget = Duration::from_millis(self.tick_delay_ms.load(Ordering::Relaxed));
            if let Some(remaining) = budget.checked_sub(tick_start.elapsed()) {
                // park_timeout instead of sleep: stop() unparks the
                // thread for a prompt exit instead of waiting out the
                // budget. A spurious wakeup just starts the next tick
                // early.
                std::thread::park_timeout(remaining);
            }
        }
    }
}
