//! Encoder events waiting to be read by the bus master
//!
//! The master reads movement and button presses with two separate
//! commands. Draining the encoder always collects both, so whatever the
//! current command does not ask for is parked here until the other command
//! comes in.

use portable_atomic::{AtomicI8, AtomicU8, Ordering};

use crate::encoder::{EncoderReport, EncoderState, MAX_BUTTON_PRESSES};

/// Accumulated, not yet reported encoder events
pub struct PendingInput {
    detents: AtomicI8,
    presses: AtomicU8,
}

impl Default for PendingInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingInput {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            detents: AtomicI8::new(0),
            presses: AtomicU8::new(0),
        }
    }

    /// Add a drained report
    ///
    /// Detents saturate at the `i8` range, presses at
    /// [`MAX_BUTTON_PRESSES`].
    pub fn absorb(&self, report: EncoderReport) {
        if report.detents != 0 {
            let _ = self
                .detents
                .fetch_update(Ordering::AcqRel, Ordering::Relaxed, |d| {
                    Some(d.saturating_add(report.detents))
                });
        }
        if report.presses != 0 {
            let _ = self
                .presses
                .fetch_update(Ordering::AcqRel, Ordering::Relaxed, |p| {
                    Some(p.saturating_add(report.presses).min(MAX_BUTTON_PRESSES))
                });
        }
    }

    /// Drain `encoder` into the accumulator
    pub fn collect(&self, encoder: &EncoderState) -> EncoderReport {
        let report = encoder.drain();
        self.absorb(report);
        report
    }

    /// Take the accumulated detents, leaving zero
    pub fn take_detents(&self) -> i8 {
        self.detents.swap(0, Ordering::AcqRel)
    }

    /// Take the accumulated presses, leaving zero
    pub fn take_presses(&self) -> u8 {
        self.presses.swap(0, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_independent() {
        let pending = PendingInput::new();
        pending.absorb(EncoderReport {
            detents: -2,
            presses: 3,
        });

        assert_eq!(pending.take_presses(), 3);
        assert_eq!(pending.take_presses(), 0);
        assert_eq!(pending.take_detents(), -2);
        assert_eq!(pending.take_detents(), 0);
    }

    #[test]
    fn test_saturation() {
        let pending = PendingInput::new();
        for _ in 0..3 {
            pending.absorb(EncoderReport {
                detents: 100,
                presses: 100,
            });
        }
        assert_eq!(pending.take_detents(), i8::MAX);
        assert_eq!(pending.take_presses(), MAX_BUTTON_PRESSES);
    }

    #[test]
    fn test_collect_from_encoder() {
        let encoder = EncoderState::new();
        encoder.on_button_edge();
        encoder.on_button_edge();

        let pending = PendingInput::new();
        let report = pending.collect(&encoder);
        assert_eq!(report.presses, 2);
        assert_eq!(pending.take_presses(), 2);
    }
}
