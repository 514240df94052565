//! Detent Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. The board logic in `detent-core` only talks to
//! pins and watchdogs through these traits, which keeps it testable on the
//! host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (detent-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  detent-hal-  │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::TargetConfig`] - I2C target (slave) addressing
//! - [`watchdog::Watchdog`] - Hardware watchdog used for self-reset

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod watchdog;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use i2c::{TargetAddress, TargetConfig, TargetError};
pub use watchdog::Watchdog;
