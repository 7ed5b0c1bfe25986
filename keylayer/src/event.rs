use crate::layer_state::LayerState;

/// A key press or release at a matrix position, as reported by the matrix scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

/// Keyboard state changes, delivered to [`crate::controller::Controller`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardStateEvent {
    /// The keyboard finished loading its persisted config.
    Startup,
    /// The keyboard is about to power down or reboot.
    Shutdown,
    /// The momentary layer bitmask changed.
    LayerChanged(LayerState),
    /// A new default layer was selected by a key.
    DefaultLayerChanged(u8),
    /// Current audio setting, sent at startup and when it changes.
    AudioEnabled(bool),
    /// Persisted settings were reset to their defaults.
    StorageCleared,
    /// A bootloader jump was requested.
    Bootloader,
}
