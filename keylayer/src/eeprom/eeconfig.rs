use bitfield_struct::bitfield;
use byteorder::{BigEndian, ByteOrder};
use embedded_storage::Storage;

use super::{Eeprom, EepromError};

/// EEPROM magic value.
/// If the first 2 bytes of eeprom equals it, the settings record is valid.
pub(crate) const EEPROM_MAGIC: u16 = 0xFEE6;

/// Start index of eeprom magic value
const MAGIC_ADDR: u32 = 0;
/// Size of eeprom magic value: 2 bytes
const MAGIC_SIZE: usize = 2;
/// Index of default layer in eeprom
const DEFAULT_LAYER_ADDR: u32 = 2;
/// Start index of keymap config
const KEYMAP_CONFIG_ADDR: u32 = 3;
/// Size of keymap config: 2 bytes
const KEYMAP_CONFIG_SIZE: usize = 2;
/// Start index of audio config
const AUDIO_CONFIG_ADDR: u32 = 5;

/// Total size of the settings record
pub const EECONFIG_SIZE: usize = 6;

/// Keymap options
#[bitfield(u16, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct EeKeymapConfig {
    /// Swap left alt and left gui
    #[bits(1)]
    pub swap_lalt_lgui: bool,
    /// Swap right alt and right gui
    #[bits(1)]
    pub swap_ralt_rgui: bool,
    #[bits(14)]
    _reserved: u16,
}

#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct EeAudioConfig {
    #[bits(1)]
    pub enable: bool,
    #[bits(7)]
    _reserved: u8,
}

/// Everything persisted across restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EeConfig {
    pub default_layer: u8,
    pub keymap_config: EeKeymapConfig,
    pub audio_config: EeAudioConfig,
}

impl Default for EeConfig {
    fn default() -> Self {
        Self {
            default_layer: 0,
            keymap_config: EeKeymapConfig::new(),
            audio_config: EeAudioConfig::new().with_enable(true),
        }
    }
}

impl<S: Storage> Eeprom<S> {
    /// Returns eeprom magic value stored in EEPROM
    pub fn get_magic(&mut self) -> Result<u16, EepromError<S::Error>> {
        let mut buf = [0xFF; MAGIC_SIZE];
        self.read_bytes(MAGIC_ADDR, &mut buf)?;
        Ok(BigEndian::read_u16(&buf))
    }

    /// Returns `true` if a settings record was written before
    pub fn is_initialized(&mut self) -> Result<bool, EepromError<S::Error>> {
        Ok(self.get_magic()? == EEPROM_MAGIC)
    }

    fn set_magic(&mut self) -> Result<(), EepromError<S::Error>> {
        let mut buf = [0xFF; MAGIC_SIZE];
        BigEndian::write_u16(&mut buf, EEPROM_MAGIC);
        self.write_bytes(MAGIC_ADDR, &buf)
    }

    /// Returns current default layer
    pub fn get_default_layer(&mut self) -> Result<u8, EepromError<S::Error>> {
        let mut buf = [0];
        self.read_bytes(DEFAULT_LAYER_ADDR, &mut buf)?;
        Ok(buf[0])
    }

    /// Set default layer
    pub fn set_default_layer(&mut self, default_layer: u8) -> Result<(), EepromError<S::Error>> {
        self.write_bytes(DEFAULT_LAYER_ADDR, &[default_layer])
    }

    pub fn get_keymap_config(&mut self) -> Result<EeKeymapConfig, EepromError<S::Error>> {
        let mut buf = [0; KEYMAP_CONFIG_SIZE];
        self.read_bytes(KEYMAP_CONFIG_ADDR, &mut buf)?;
        Ok(EeKeymapConfig::from_bits(BigEndian::read_u16(&buf)))
    }

    pub fn set_keymap_config(&mut self, config: EeKeymapConfig) -> Result<(), EepromError<S::Error>> {
        let mut buf = [0; KEYMAP_CONFIG_SIZE];
        BigEndian::write_u16(&mut buf, config.into_bits());
        self.write_bytes(KEYMAP_CONFIG_ADDR, &buf)
    }

    pub fn get_audio_config(&mut self) -> Result<EeAudioConfig, EepromError<S::Error>> {
        let mut buf = [0];
        self.read_bytes(AUDIO_CONFIG_ADDR, &mut buf)?;
        Ok(EeAudioConfig::from_bits(buf[0]))
    }

    pub fn set_audio_config(&mut self, config: EeAudioConfig) -> Result<(), EepromError<S::Error>> {
        self.write_bytes(AUDIO_CONFIG_ADDR, &[config.into_bits()])
    }

    /// Read the whole settings record, `None` if it was never written
    pub fn read_config(&mut self) -> Result<Option<EeConfig>, EepromError<S::Error>> {
        if !self.is_initialized()? {
            return Ok(None);
        }
        Ok(Some(EeConfig {
            default_layer: self.get_default_layer()?,
            keymap_config: self.get_keymap_config()?,
            audio_config: self.get_audio_config()?,
        }))
    }

    /// Write the whole settings record and mark it valid
    pub fn write_config(&mut self, config: &EeConfig) -> Result<(), EepromError<S::Error>> {
        self.set_default_layer(config.default_layer)?;
        self.set_keymap_config(config.keymap_config)?;
        self.set_audio_config(config.audio_config)?;
        // Magic last, an interrupted first write leaves the storage uninitialized
        self.set_magic()
    }

    /// Overwrite every setting with the compiled defaults
    pub fn reset(&mut self) -> Result<EeConfig, EepromError<S::Error>> {
        let config = EeConfig::default();
        self.write_config(&config)?;
        Ok(config)
    }
}
