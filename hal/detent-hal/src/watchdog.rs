//! Hardware watchdog abstraction
//!
//! The board never feeds a watchdog during normal operation. The only
//! use is a deliberate self-reset: arm a short timeout, then stop doing
//! anything until the watchdog fires.

/// Shortest timeout used for a deliberate reset
pub const RESET_TIMEOUT_MS: u32 = 15;

/// Hardware watchdog
pub trait Watchdog {
    /// Start the watchdog with the given timeout
    ///
    /// Once armed the watchdog cannot be stopped again and the chip
    /// resets after `timeout_ms`.
    fn arm(&mut self, timeout_ms: u32);
}
