//! Board configuration
//!
//! Values come from `board.toml`, validated by the build script.

use detent_core::config::{BoardConfig, ConfigError};

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Board configuration compiled into this firmware
pub fn board_config() -> Result<BoardConfig, ConfigError> {
    BoardConfig::new(BUS_ADDRESS, HOPPER_THRESHOLD, SETTLE_MS, ADC_MAX)
}
