//! Shared state and inter-task signals
//!
//! The encoder and measurement state is written from edge tasks and read
//! by the bus task, so it lives in statics built from atomics. Signals use
//! embassy-sync primitives.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use detent_core::{EncoderState, MeasurementCell, PendingInput};

/// Raw encoder state, fed by the edge tasks
pub static ENCODER: EncoderState = EncoderState::new();

/// Encoder events drained but not yet read by the bus master
pub static PENDING_INPUT: PendingInput = PendingInput::new();

/// Last hopper measurement
pub static MEASUREMENT: MeasurementCell = MeasurementCell::new();

/// The encoder reached a new detent and should be drained
pub static DRAIN_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
