//! STM32F0-specific HAL for the Detent firmware
//!
//! This crate implements the `detent-hal` traits on top of embassy-stm32
//! for STM32F0 series chips:
//!
//! - STM32F042K6 (interface board)
//! - STM32F042F6
//!
//! # Features
//!
//! - `stm32f042k6` - Enable support for STM32F042K6T6
//! - `stm32f042f6` - Enable support for STM32F042F6P6
//! - `defmt` - Enable debug formatting in embassy-stm32 and detent-hal
//!
//! # Usage
//!
//! The firmware owns the embassy peripherals and wraps them here when it
//! hands them to board logic from `detent-core`.

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod watchdog;

// Re-export shared types from detent-hal
pub use detent_hal::{InputPin, OutputPin, TargetConfig, TargetError, Watchdog};

pub use gpio::{EdgeLine, OutputLine, PulledUpLine};
pub use watchdog::Iwdg;
