//! Memory-mapped Register
//!
//! Echte Hardware-Implementierung von `OutputRegister` über volatile Writes.

use core::ptr::{self, NonNull};

use crate::traits::OutputRegister;

/// 16-Bit Register an einer festen Speicheradresse
///
/// Schreibt ausschließlich volatile, damit der Compiler keinen Zugriff
/// zusammenfasst oder weglässt.
#[derive(Debug)]
pub struct MmioRegister {
    address: NonNull<u16>,
}

impl MmioRegister {
    /// Erstellt ein Register für `address`
    ///
    /// Gibt `None` für eine Null-Adresse zurück; `LedDriver::init` meldet dann
    /// `LedError::MissingRegister`.
    ///
    /// # Safety
    /// `address` muss für 16-Bit Schreibzugriffe gültig und ausgerichtet sein,
    /// solange das Register existiert.
    pub unsafe fn new(address: *mut u16) -> Option<Self> {
        NonNull::new(address).map(|address| Self { address })
    }

    pub fn address(&self) -> *mut u16 {
        self.address.as_ptr()
    }
}

impl OutputRegister for MmioRegister {
    fn write(&mut self, value: u16) {
        // SAFETY: Gültigkeit der Adresse wird von `MmioRegister::new` gefordert
        unsafe { ptr::write_volatile(self.address.as_ptr(), value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_address_is_rejected() {
        let register = unsafe { MmioRegister::new(ptr::null_mut()) };
        assert!(register.is_none());
    }

    #[test]
    fn test_volatile_write() {
        let mut storage: u16 = 0xFFFF;
        let address = &raw mut storage;

        let mut register = unsafe { MmioRegister::new(address) }.unwrap();
        register.write(0x0080);

        assert_eq!(unsafe { ptr::read_volatile(address) }, 0x0080);
    }
}
