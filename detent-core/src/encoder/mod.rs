//! Rotary encoder decoding
//!
//! The encoder idles with both lines high and runs through one full
//! quadrature cycle per detent. Clockwise, line A goes low before line B
//! and comes back high first as well:
//!
//! ```text
//!   Clockwise:            Counterclockwise:
//!   __.   ._____          ____.   ._____
//! A   |___|             A     |___|
//!   ____.   .___          __.   .___
//! B     |___|           B   |___|
//!           ^                     ^
//!           detent                detent
//! ```
//!
//! Both edges of both lines are decoded into a raw position that moves 4
//! steps per detent. Detent events are derived from that position in the
//! main loop, which keeps the edge handlers tiny and makes the decoding
//! immune to contact bounce on a single line.

pub mod state;
pub mod table;

pub use state::{EncoderReport, EncoderState, MAX_BUTTON_PRESSES, STEPS_PER_DETENT};
pub use table::{QuadratureSample, TransitionKey, TRANSITION_DELTA};
