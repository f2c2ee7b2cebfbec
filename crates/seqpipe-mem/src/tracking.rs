//! Lightweight peak-outstanding tracking hooks.
//!
//! Keep this optional and cheap. Downstream can wire to OpenTelemetry/Prom
//! if desired.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct PeakTracker {
    peak: AtomicUsize,
}

impl PeakTracker {
    pub fn new() -> Self {
        Self {
            peak: AtomicUsize::new(0),
        }
    }

    /// Record a new "outstanding segments" value; updates peak if higher.
    pub fn record(&self, outstanding: usize) {
        let mut cur = self.peak.load(Ordering::Relaxed);
        while outstanding > cur {
            match self.peak.compare_exchange(
                cur,
                outstanding,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => cur = observed,
            }
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}
