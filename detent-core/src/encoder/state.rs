//! Encoder state shared between edge handlers and the main loop

use detent_hal::gpio::InputPin;
use portable_atomic::{AtomicU8, Ordering};

use super::table::{QuadratureSample, TransitionKey};

/// Cap of the button press counter
pub const MAX_BUTTON_PRESSES: u8 = 127;

/// Raw position steps per detent
pub const STEPS_PER_DETENT: u8 = 4;

/// Movement and presses collected by one [`EncoderState::drain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderReport {
    /// Whole detents moved, clockwise positive
    pub detents: i8,
    /// Button presses, at most [`MAX_BUTTON_PRESSES`]
    pub presses: u8,
}

impl EncoderReport {
    /// Returns true if nothing happened
    pub fn is_empty(&self) -> bool {
        self.detents == 0 && self.presses == 0
    }

    /// The single word older bus masters expect
    ///
    /// Older firmware packed the detent delta into the high byte and then
    /// overwrote the whole word with the press count, so only bits 0..=6
    /// (presses) ever reached the master. This keeps that layout; use the
    /// fields directly for anything new.
    pub fn legacy_word(&self) -> u16 {
        u16::from(self.presses & 0x7F)
    }
}

/// Encoder state
///
/// Lives in a `static` for the whole program. The edge handlers are the
/// only writers of `prev_reading`, `position` and `button_presses`;
/// [`drain`](Self::drain) is the only writer of `last_processed`. Every
/// field is a single byte, so plain loads and stores are atomic. The one
/// read-modify-write that crosses contexts, reading and clearing the press
/// counter, is a single `swap`.
pub struct EncoderState {
    prev_reading: AtomicU8,
    position: AtomicU8,
    last_processed: AtomicU8,
    button_presses: AtomicU8,
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderState {
    /// Create encoder state for a knob resting at a detent
    ///
    /// If the knob is not actually at rest, the first edge decodes wrong
    /// by at most one step and the next detent realigns it.
    pub const fn new() -> Self {
        Self {
            prev_reading: AtomicU8::new(QuadratureSample::AT_REST.bits()),
            position: AtomicU8::new(0),
            last_processed: AtomicU8::new(0),
            button_presses: AtomicU8::new(0),
        }
    }

    /// Handle an edge on either quadrature line
    ///
    /// Returns true when the position reached a detent other than the
    /// last processed one, meaning [`drain`](Self::drain) should run soon.
    pub fn on_quadrature_edge(&self, sample: QuadratureSample) -> bool {
        let prev = QuadratureSample::from_bits(self.prev_reading.load(Ordering::Relaxed));
        let delta = TransitionKey::new(prev, sample).delta();

        let position = self
            .position
            .load(Ordering::Relaxed)
            .wrapping_add(delta as u8);
        self.position.store(position, Ordering::Release);
        self.prev_reading.store(sample.bits(), Ordering::Relaxed);

        position % STEPS_PER_DETENT == 0
            && position != self.last_processed.load(Ordering::Acquire)
    }

    /// Sample both lines and handle the edge
    pub fn on_quadrature_pins<A: InputPin, B: InputPin>(&self, a: &A, b: &B) -> bool {
        self.on_quadrature_edge(QuadratureSample::from_levels(a.is_high(), b.is_high()))
    }

    /// Handle a press edge on the button line
    pub fn on_button_edge(&self) {
        // Err means already saturated
        let _ = self
            .button_presses
            .fetch_update(Ordering::AcqRel, Ordering::Relaxed, |presses| {
                (presses < MAX_BUTTON_PRESSES).then(|| presses + 1)
            });
    }

    /// Collect the movement and presses since the previous call
    ///
    /// Movement is only reported in whole detents: the position has to be
    /// at least 4 steps away from the last processed detent before one is
    /// counted, so bouncing around a detent never reports anything.
    pub fn drain(&self) -> EncoderReport {
        let mut last = self.last_processed.load(Ordering::Relaxed);
        let mut detents: i8 = 0;

        loop {
            let diff = self.position.load(Ordering::Acquire).wrapping_sub(last) as i8;
            if diff < -3 {
                last = last.wrapping_sub(STEPS_PER_DETENT);
                detents = detents.saturating_sub(1);
            } else if diff > 3 {
                last = last.wrapping_add(STEPS_PER_DETENT);
                detents = detents.saturating_add(1);
            } else {
                break;
            }
            self.last_processed.store(last, Ordering::Release);
        }

        let presses = self.button_presses.swap(0, Ordering::AcqRel);

        EncoderReport {
            detents,
            presses: presses.min(MAX_BUTTON_PRESSES),
        }
    }

    /// Raw position counter, 4 steps per detent
    pub fn position(&self) -> u8 {
        self.position.load(Ordering::Acquire)
    }
}
