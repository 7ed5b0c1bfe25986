//! Persisted keyboard settings.
//!
//! The settings record is a few bytes at a fixed offset of any storage which
//! implements [`embedded_storage::Storage`], see [`eeconfig`] for the layout.

pub mod eeconfig;
mod ram_storage;

use embedded_storage::Storage;

pub use eeconfig::{EeAudioConfig, EeConfig, EeKeymapConfig};
pub use ram_storage::{DummyStorage, OutOfBounds, RamStorage};

/// Errors of settings storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError<E> {
    /// Error of the underlying storage
    Storage(E),
    /// `start_addr` plus the record offset doesn't fit in `u32`
    AddressOverflow,
}

/// Eeprom based on any storage device which implements `embedded-storage::Storage` trait
pub struct Eeprom<S: Storage> {
    storage: S,
    start_addr: u32,
}

impl<S: Storage> Eeprom<S> {
    pub fn new(storage: S, start_addr: u32) -> Self {
        Self { storage, start_addr }
    }

    /// Give the storage back, e.g. to simulate a restart
    pub fn into_inner(self) -> S {
        self.storage
    }

    fn address(&self, addr: u32) -> Result<u32, EepromError<S::Error>> {
        self.start_addr.checked_add(addr).ok_or(EepromError::AddressOverflow)
    }

    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), EepromError<S::Error>> {
        let addr = self.address(addr)?;
        self.storage.write(addr, data).map_err(EepromError::Storage)
    }

    fn read_bytes(&mut self, addr: u32, data: &mut [u8]) -> Result<(), EepromError<S::Error>> {
        let addr = self.address(addr)?;
        self.storage.read(addr, data).map_err(EepromError::Storage)
    }
}

#[cfg(test)]
mod test {
    use super::eeconfig::EECONFIG_SIZE;
    use super::*;

    #[test]
    fn test_blank_storage_is_not_initialized() {
        let mut eeprom = Eeprom::new(RamStorage::<16>::new(), 0);
        assert_eq!(eeprom.is_initialized(), Ok(false));
        assert_eq!(eeprom.read_config(), Ok(None));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut eeprom = Eeprom::new(RamStorage::<16>::new(), 4);
        let config = EeConfig {
            default_layer: 2,
            keymap_config: EeKeymapConfig::new().with_swap_lalt_lgui(true),
            audio_config: EeAudioConfig::new().with_enable(false),
        };
        eeprom.write_config(&config).unwrap();

        let mut eeprom = Eeprom::new(eeprom.into_inner(), 4);
        assert_eq!(eeprom.read_config(), Ok(Some(config)));
        assert_eq!(eeprom.get_default_layer(), Ok(2));
    }

    #[test]
    fn test_layout() {
        let mut eeprom = Eeprom::new(RamStorage::<8>::new(), 0);
        eeprom.write_config(&EeConfig::default()).unwrap();
        eeprom.set_default_layer(3).unwrap();
        let storage = eeprom.into_inner();
        assert_eq!(storage.as_bytes()[..EECONFIG_SIZE], [0xFE, 0xE6, 3, 0, 0, 1]);
    }

    #[test]
    fn test_reset() {
        let mut eeprom = Eeprom::new(RamStorage::<8>::new(), 0);
        eeprom.set_default_layer(1).unwrap();
        eeprom.set_audio_config(EeAudioConfig::new()).unwrap();
        let config = eeprom.reset().unwrap();
        assert_eq!(config, EeConfig::default());
        assert_eq!(eeprom.read_config(), Ok(Some(EeConfig::default())));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut eeprom = Eeprom::new(RamStorage::<4>::new(), 0);
        assert_eq!(
            eeprom.write_config(&EeConfig::default()),
            Err(EepromError::Storage(OutOfBounds))
        );
    }

    #[test]
    fn test_address_overflow() {
        let mut eeprom = Eeprom::new(RamStorage::<16>::new(), u32::MAX);
        // Offset 0 still fits, the storage refuses it
        assert_eq!(eeprom.get_magic(), Err(EepromError::Storage(OutOfBounds)));
        assert_eq!(eeprom.get_default_layer(), Err(EepromError::AddressOverflow));
        assert_eq!(eeprom.set_audio_config(EeAudioConfig::new()), Err(EepromError::AddressOverflow));
        assert_eq!(eeprom.reset(), Err(EepromError::AddressOverflow));
    }

    #[test]
    fn test_dummy_storage() {
        let mut eeprom = Eeprom::new(DummyStorage, 0);
        eeprom.write_config(&EeConfig::default()).unwrap();
        // Nothing is kept
        assert_eq!(eeprom.read_config(), Ok(None));
    }
}
