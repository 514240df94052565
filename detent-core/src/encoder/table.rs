//! Quadrature transition table
//!
//! Each edge on either encoder line is decoded by looking up the pair
//! (previous sample, current sample) in a 16-entry table. Valid single-line
//! transitions count ±1, a repeated sample counts 0.
//!
//! A transition where both lines changed at once cannot happen on a
//! working encoder, but bounce can still produce one. It means the knob
//! moved two steps in an unknown direction, so the table counts ±2 rather
//! than 0. With 0 the stored sample would move on while the count stayed
//! put, leaving the count off by two; with ±2 the count may end up off by
//! four, but stays aligned so that detents still land on multiples of 4.

/// One reading of both encoder lines
///
/// Bit 1 is line A, bit 0 is line B. The encoder idles with both lines
/// high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureSample(u8);

impl QuadratureSample {
    /// Both lines high, the state at every detent
    pub const AT_REST: Self = Self(0b11);

    /// Build a sample from the two line levels
    pub const fn from_levels(a_high: bool, b_high: bool) -> Self {
        Self((a_high as u8) << 1 | b_high as u8)
    }

    /// Build a sample from raw bits, ignoring anything above bit 1
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    /// Raw 2-bit value
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Lookup key made of the previous and the current sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionKey(u8);

impl TransitionKey {
    /// Key for moving from `prev` to `current`
    pub const fn new(prev: QuadratureSample, current: QuadratureSample) -> Self {
        Self(prev.0 << 2 | current.0)
    }

    /// Table index, always below 16
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Position change for this transition, clockwise positive
    pub const fn delta(self) -> i8 {
        TRANSITION_DELTA[self.index()]
    }
}

/// Position change indexed by `prev << 2 | current`
///
/// Clockwise, line A falls before B: 11 → 01 → 00 → 10 → 11.
#[rustfmt::skip]
pub const TRANSITION_DELTA: [i8; 16] = [
//  cur: 00  01  10  11
         0, -1,  1,  2,  // prev 00
         1,  0,  2, -1,  // prev 01
        -1, -2,  0,  1,  // prev 10
        -2,  1, -1,  0,  // prev 11
];
