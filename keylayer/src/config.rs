//! Keyboard configuration.

/// Three layers linked by the tri-layer rule: `adjust` is on exactly when
/// `lower` and `raise` are both on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriLayer {
    pub lower: u8,
    pub raise: u8,
    pub adjust: u8,
}

impl TriLayer {
    pub const fn new(lower: u8, raise: u8, adjust: u8) -> Self {
        Self { lower, raise, adjust }
    }
}

/// How several keys holding the same momentary layer interact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerHoldMode {
    /// One bit per layer: releasing any of the keys turns the layer off.
    #[default]
    Shared,
    /// Count holds per layer: the layer stays on until every key is released.
    Counted,
}

/// Config for layer behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    pub tri_layer: Option<TriLayer>,
    pub layer_hold: LayerHoldMode,
}

/// Config for the persisted settings
#[derive(Clone, Copy, Debug, Default)]
pub struct StorageConfig {
    /// Offset of the settings record in the storage.
    pub start_addr: u32,
    /// Reset the persisted settings on every boot.
    pub clear_storage: bool,
}

/// Configurations for a keyboard.
#[derive(Clone, Copy, Debug)]
pub struct KeyboardConfig<'a> {
    pub behavior_config: BehaviorConfig,
    pub storage_config: StorageConfig,
    /// Strings typed by `Action::SendString`, by index.
    pub strings: &'a [&'a str],
}

impl Default for KeyboardConfig<'_> {
    fn default() -> Self {
        Self {
            behavior_config: BehaviorConfig::default(),
            storage_config: StorageConfig::default(),
            strings: &[],
        }
    }
}
