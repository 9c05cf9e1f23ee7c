//! LED-Treiber für ein 16-Bit write-only Register
//!
//! Alle Operationen verändern nur die Schattenkopie und schreiben danach den
//! kompletten Wert ins Register. Abfragen lesen ausschließlich die
//! Schattenkopie.

use crate::logic::{all_on_pattern, idle_pattern, is_valid_led, led_mask};
use crate::traits::{ErrorSink, LedError, OutputRegister};
use crate::types::{LedBits, Polarity, RuntimeError};

/// Treiber für bis zu 16 LEDs an einem Register
///
/// # Generische Parameter
/// - `R: OutputRegister`: Ziel der Schreibzugriffe (Hardware oder Mock)
/// - `S: ErrorSink`: Empfänger für Berichte über ungültige LED-Nummern
///
/// # Beispiel
///
/// ```
/// # use core::cell::Cell;
/// # use led_core::{LedDriver, NullErrorSink};
/// let leds = Cell::new(0xFFFF_u16);
/// let mut driver = LedDriver::new(NullErrorSink);
///
/// driver.init(Some(&leds), false, false).unwrap();
/// assert_eq!(leds.get(), 0x0000);
///
/// driver.turn_on(1).unwrap();
/// assert_eq!(leds.get(), 0x0001);
/// assert!(driver.is_on(1));
/// ```
pub struct LedDriver<R: OutputRegister, S: ErrorSink> {
    register: Option<R>,
    shadow: LedBits,
    polarity: Polarity,
    sink: S,
}

impl<R: OutputRegister, S: ErrorSink> LedDriver<R, S> {
    /// Erstellt einen nicht initialisierten Treiber
    ///
    /// Bis zum ersten erfolgreichen `init` schlagen alle schreibenden
    /// Operationen fehl; Abfragen melden alle LEDs als aus.
    pub fn new(sink: S) -> Self {
        Self {
            register: None,
            shadow: LedBits::default(),
            polarity: Polarity::default(),
            sink,
        }
    }

    /// Übernimmt das Register und schaltet alle LEDs aus
    ///
    /// Ohne Register (`None`) wird der Treiber uninitialisiert und nichts
    /// geschrieben; Polarität und Schattenkopie bleiben unverändert.
    pub fn init(
        &mut self,
        register: Option<R>,
        invert_output: bool,
        invert_input: bool,
    ) -> Result<(), LedError> {
        self.init_with(register, Polarity::new(invert_output, invert_input))
    }

    /// Wie `init`, aber mit fertiger `Polarity`
    pub fn init_with(&mut self, register: Option<R>, polarity: Polarity) -> Result<(), LedError> {
        self.register = register;

        if self.register.is_none() {
            log_warn!("LED driver init without register");
            return Err(LedError::MissingRegister);
        }

        self.polarity = polarity;
        self.shadow = LedBits::from_raw(idle_pattern(polarity.invert_output));
        log_debug!("LED driver initialized: {}", polarity);
        self.update_hardware()
    }

    /// Schaltet eine LED (1..=16) ein
    pub fn turn_on(&mut self, index: i32) -> Result<(), LedError> {
        self.ensure_initialized()?;
        self.validate(index)?;

        let mask = led_mask(index, self.polarity.invert_input);
        if self.polarity.invert_output {
            self.shadow.clear(mask);
        } else {
            self.shadow.set(mask);
        }
        self.update_hardware()
    }

    /// Schaltet eine LED (1..=16) aus
    pub fn turn_off(&mut self, index: i32) -> Result<(), LedError> {
        self.ensure_initialized()?;
        self.validate(index)?;

        let mask = led_mask(index, self.polarity.invert_input);
        if self.polarity.invert_output {
            self.shadow.set(mask);
        } else {
            self.shadow.clear(mask);
        }
        self.update_hardware()
    }

    pub fn turn_on_all(&mut self) -> Result<(), LedError> {
        self.ensure_initialized()?;
        self.shadow = LedBits::from_raw(all_on_pattern(self.polarity.invert_output));
        self.update_hardware()
    }

    pub fn turn_off_all(&mut self) -> Result<(), LedError> {
        self.ensure_initialized()?;
        self.shadow = LedBits::from_raw(idle_pattern(self.polarity.invert_output));
        self.update_hardware()
    }

    /// Fragt ab, ob eine LED logisch an ist
    ///
    /// Ungültige Nummern werden an den ErrorSink gemeldet und gelten als aus.
    /// Braucht `&mut self`, weil der Bericht den Sink verändert.
    pub fn is_on(&mut self, index: i32) -> bool {
        if self.validate(index).is_err() {
            return false;
        }

        let lit = self
            .shadow
            .contains(led_mask(index, self.polarity.invert_input));
        lit != self.polarity.invert_output
    }

    /// Logische Negation von `is_on`, inklusive Fehlerbericht
    pub fn is_off(&mut self, index: i32) -> bool {
        !self.is_on(index)
    }

    pub fn is_initialized(&self) -> bool {
        self.register.is_some()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Zuletzt ins Register geschriebener Wert
    pub fn shadow(&self) -> u16 {
        self.shadow.raw()
    }

    pub fn error_sink(&self) -> &S {
        &self.sink
    }

    pub fn error_sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Gibt das Register zurück; der Treiber ist danach uninitialisiert
    pub fn release(&mut self) -> Option<R> {
        self.register.take()
    }

    fn ensure_initialized(&self) -> Result<(), LedError> {
        if self.register.is_some() {
            Ok(())
        } else {
            log_warn!("LED driver not initialized");
            Err(LedError::NotInitialized)
        }
    }

    fn validate(&mut self, index: i32) -> Result<(), LedError> {
        if is_valid_led(index) {
            return Ok(());
        }

        log_warn!("LED {} out of bounds", index);
        self.sink.report(&RuntimeError::out_of_bounds(index));
        Err(LedError::OutOfBounds(index))
    }

    fn update_hardware(&mut self) -> Result<(), LedError> {
        let register = self.register.as_mut().ok_or(LedError::NotInitialized)?;
        log_trace!("LED register <- {=u16:#x}", self.shadow.raw());
        register.write(self.shadow.raw());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use crate::traits::NullErrorSink;

    #[derive(Default)]
    struct LastError {
        last: Option<RuntimeError>,
        count: usize,
    }

    impl ErrorSink for LastError {
        fn report(&mut self, error: &RuntimeError) {
            self.last = Some(*error);
            self.count += 1;
        }
    }

    #[test]
    fn test_new_driver_is_uninitialized() {
        let driver: LedDriver<&Cell<u16>, _> = LedDriver::new(NullErrorSink);
        assert!(!driver.is_initialized());
        assert_eq!(driver.shadow(), 0x0000);
        assert_eq!(driver.polarity(), Polarity::default());
    }

    #[test]
    fn test_init_stores_polarity() {
        let leds = Cell::new(0u16);
        let mut driver = LedDriver::new(NullErrorSink);
        driver.init(Some(&leds), true, true).unwrap();
        assert_eq!(driver.polarity(), Polarity::new(true, true));
        assert_eq!(driver.shadow(), 0xFFFF);
    }

    #[test]
    fn test_failed_reinit_keeps_shadow_and_polarity() {
        let leds = Cell::new(0u16);
        let mut driver = LedDriver::new(NullErrorSink);
        driver.init(Some(&leds), true, false).unwrap();
        driver.turn_on(8).unwrap();

        assert_eq!(driver.init(None, false, true), Err(LedError::MissingRegister));
        assert!(!driver.is_initialized());
        assert_eq!(driver.shadow(), 0xFF7F);
        assert_eq!(driver.polarity(), Polarity::new(true, false));
        assert!(driver.is_on(8));
    }

    #[test]
    fn test_shadow_matches_register() {
        let leds = Cell::new(0xFFFF_u16);
        let mut driver = LedDriver::new(NullErrorSink);
        driver.init(Some(&leds), false, true).unwrap();
        driver.turn_on(3).unwrap();
        driver.turn_on(14).unwrap();
        assert_eq!(driver.shadow(), leds.get());
    }

    #[test]
    fn test_out_of_bounds_reported_from_driver() {
        let leds = Cell::new(0u16);
        let mut driver = LedDriver::new(LastError::default());
        driver.init(Some(&leds), false, false).unwrap();

        assert_eq!(driver.turn_off(-1), Err(LedError::OutOfBounds(-1)));

        let sink = driver.error_sink();
        assert_eq!(sink.count, 1);
        let last = sink.last.unwrap();
        assert_eq!(last.description, "LED Driver: out-of-bounds LED");
        assert_eq!(last.parameter, -1);
        assert!(last.file.ends_with("driver.rs"));
    }

    #[test]
    fn test_uninitialized_is_not_reported() {
        let mut driver: LedDriver<&Cell<u16>, _> = LedDriver::new(LastError::default());
        assert_eq!(driver.turn_on(0), Err(LedError::NotInitialized));
        assert_eq!(driver.error_sink().count, 0);
    }

    #[test]
    fn test_release_uninitializes() {
        let leds = Cell::new(0u16);
        let mut driver = LedDriver::new(NullErrorSink);
        driver.init(Some(&leds), false, false).unwrap();

        assert!(driver.release().is_some());
        assert!(!driver.is_initialized());
        assert_eq!(driver.turn_on_all(), Err(LedError::NotInitialized));
        assert_eq!(leds.get(), 0x0000);
    }
}
