//! LED Core - Platform-agnostic Treiber für ein 16-Bit LED-Register
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Register-Zugriff und Fehlerbericht werden über Traits injiziert.

#![cfg_attr(not(test), no_std)]

// Logging über defmt, nur mit Feature "defmt" aktiv
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

pub mod config;
pub mod driver;
pub mod logic;
pub mod register;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use driver::LedDriver;
pub use logic::{all_on_pattern, idle_pattern, is_valid_led};
pub use register::MmioRegister;
#[cfg(feature = "defmt")]
pub use traits::DefmtErrorSink;
pub use traits::{ErrorSink, LedError, NullErrorSink, OutputRegister};
pub use types::{LedBits, Polarity, RuntimeError};
