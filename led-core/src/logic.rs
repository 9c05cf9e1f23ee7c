//! Pure Bit-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::config::{ALL_BITS_CLEAR, ALL_BITS_SET, MAX_LED, MIN_LED};

/// Prüft, ob eine logische LED-Nummer im Bereich 1..=16 liegt
///
/// # Beispiele
///
/// ```
/// # use led_core::is_valid_led;
/// assert!(is_valid_led(1));
/// assert!(is_valid_led(16));
/// assert!(!is_valid_led(0));
/// assert!(!is_valid_led(17));
/// ```
pub fn is_valid_led(index: i32) -> bool {
    (MIN_LED..=MAX_LED).contains(&index)
}

/// Register-Muster, bei dem alle LEDs logisch aus sind
///
/// Bei invertiertem Ausgang bedeutet ein gesetztes Bit "aus".
///
/// ```
/// # use led_core::idle_pattern;
/// assert_eq!(idle_pattern(false), 0x0000);
/// assert_eq!(idle_pattern(true), 0xFFFF);
/// ```
pub fn idle_pattern(invert_output: bool) -> u16 {
    if invert_output {
        ALL_BITS_SET
    } else {
        ALL_BITS_CLEAR
    }
}

/// Register-Muster, bei dem alle LEDs logisch an sind
pub fn all_on_pattern(invert_output: bool) -> u16 {
    !idle_pattern(invert_output)
}

/// Hardware-Bitposition (0..=15) einer logischen LED-Nummer
///
/// Keine Bereichsprüfung: Aufrufer müssen `is_valid_led` vorher prüfen.
pub(crate) fn hardware_bit(index: i32, invert_input: bool) -> u32 {
    if invert_input {
        (MAX_LED - index) as u32
    } else {
        (index - MIN_LED) as u32
    }
}

/// Bitmaske der logischen LED-Nummer im Register
pub(crate) fn led_mask(index: i32, invert_input: bool) -> u16 {
    1 << hardware_bit(index, invert_input)
}
