//! Treiber-Konfiguration: Konstanten für das 16-Bit LED-Register

// ============================================================================
// Register-Layout
// ============================================================================

/// Anzahl der LEDs am Register (ein Bit pro LED)
pub const LED_COUNT: usize = 16;

/// Kleinste gültige logische LED-Nummer
pub const MIN_LED: i32 = 1;

/// Größte gültige logische LED-Nummer
pub const MAX_LED: i32 = 16;

/// Alle Hardware-Bits gesetzt
pub const ALL_BITS_SET: u16 = 0xFFFF;

/// Alle Hardware-Bits gelöscht
pub const ALL_BITS_CLEAR: u16 = 0x0000;

// ============================================================================
// Fehlermeldungen
// ============================================================================

/// Beschreibung, die bei ungültiger LED-Nummer an den ErrorSink geht
pub const OUT_OF_BOUNDS_MESSAGE: &str = "LED Driver: out-of-bounds LED";
