//! Board-agnostic core logic for the Detent interface board
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Rotary encoder decoding and detent aggregation
//! - Hopper sensor measurement bookkeeping
//! - Display power-up sequence
//! - Product command dispatcher for the bus transport
//! - Board configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod config;
pub mod display;
pub mod encoder;
pub mod hopper;
pub mod input;

pub use commands::BoardCommands;
pub use config::BoardConfig;
pub use encoder::{EncoderReport, EncoderState, QuadratureSample};
pub use hopper::{HopperLevel, Measurement, MeasurementCell};
pub use input::PendingInput;
