//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Register-Zugriff und
//! Fehlerberichte ohne konkrete Implementierung.

use core::cell::Cell;

use crate::types::RuntimeError;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Kein Register übergeben bzw. `init` noch nicht erfolgreich
    NotInitialized,
    /// LED-Nummer außerhalb von 1..=16
    OutOfBounds(i32),
    /// `init` ohne Register aufgerufen
    MissingRegister,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::NotInitialized => write!(f, "LED driver not initialized"),
            LedError::OutOfBounds(index) => write!(f, "LED {index} out of bounds"),
            LedError::MissingRegister => write!(f, "no LED register supplied"),
        }
    }
}

impl core::error::Error for LedError {}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::NotInitialized => defmt::write!(fmt, "NotInitialized"),
            LedError::OutOfBounds(index) => defmt::write!(fmt, "OutOfBounds({})", index),
            LedError::MissingRegister => defmt::write!(fmt, "MissingRegister"),
        }
    }
}

/// Trait für das 16-Bit Ausgangsregister
///
/// Das Register ist write-only: der Treiber liest nie zurück.
///
/// # Implementierungen
/// - **Production:** `MmioRegister` (volatile Schreibzugriff auf eine Adresse)
/// - **Testing:** `&Cell<u16>`, `&mut u16` oder eigene Mocks
pub trait OutputRegister {
    /// Schreibt den kompletten 16-Bit Wert ins Register
    fn write(&mut self, value: u16);
}

impl OutputRegister for &mut u16 {
    fn write(&mut self, value: u16) {
        **self = value;
    }
}

impl OutputRegister for &Cell<u16> {
    fn write(&mut self, value: u16) {
        self.set(value);
    }
}

/// Trait für den externen Fehlerbericht
///
/// Wird genau einmal pro Zugriff mit ungültiger LED-Nummer aufgerufen.
pub trait ErrorSink {
    fn report(&mut self, error: &RuntimeError);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, error: &RuntimeError) {
        (**self).report(error);
    }
}

/// Verwirft alle Fehlerberichte
#[derive(Debug, Clone, Copy, Default)]
pub struct NullErrorSink;

impl ErrorSink for NullErrorSink {
    fn report(&mut self, _error: &RuntimeError) {}
}

/// Leitet Fehlerberichte an `defmt::error!` weiter
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtErrorSink;

#[cfg(feature = "defmt")]
impl ErrorSink for DefmtErrorSink {
    fn report(&mut self, error: &RuntimeError) {
        defmt::error!("{}", error);
    }
}
