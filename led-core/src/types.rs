//! Core Types für den LED-Treiber
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::config::{ALL_BITS_CLEAR, OUT_OF_BOUNDS_MESSAGE};

/// Polarität von Register-Ausgang und LED-Nummerierung
///
/// Wird bei `LedDriver::init` festgelegt und danach nicht mehr geändert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polarity {
    /// Gelöschtes Bit = LED an (active-low Verdrahtung)
    pub invert_output: bool,
    /// LED 1 liegt auf Bit 15 statt auf Bit 0
    pub invert_input: bool,
}

impl Polarity {
    pub const fn new(invert_output: bool, invert_input: bool) -> Self {
        Self {
            invert_output,
            invert_input,
        }
    }
}

/// 16-Bit Schattenkopie des Registers in Hardware-Bitreihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedBits(u16);

impl LedBits {
    pub const fn from_raw(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn set(&mut self, mask: u16) {
        self.0 |= mask;
    }

    pub fn clear(&mut self, mask: u16) {
        self.0 &= !mask;
    }

    pub fn contains(self, mask: u16) -> bool {
        self.0 & mask != 0
    }
}

impl Default for LedBits {
    fn default() -> Self {
        Self(ALL_BITS_CLEAR)
    }
}

/// Fehlerbericht für den ErrorSink
///
/// Enthält Beschreibung, den auslösenden Parameter und die Quellstelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeError {
    pub description: &'static str,
    pub parameter: i32,
    pub file: &'static str,
    pub line: u32,
}

impl RuntimeError {
    /// Bericht für eine LED-Nummer außerhalb von 1..=16
    #[track_caller]
    pub fn out_of_bounds(index: i32) -> Self {
        let location = core::panic::Location::caller();
        Self {
            description: OUT_OF_BOUNDS_MESSAGE,
            parameter: index,
            file: location.file(),
            line: location.line(),
        }
    }
}

impl core::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({}) at {}:{}",
            self.description, self.parameter, self.file, self.line
        )
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Polarity {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Polarity {{ invert_output: {}, invert_input: {} }}",
            self.invert_output,
            self.invert_input
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedBits {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LedBits({=u16:#x})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RuntimeError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} ({}) at {}:{}",
            self.description,
            self.parameter,
            self.file,
            self.line
        )
    }
}
