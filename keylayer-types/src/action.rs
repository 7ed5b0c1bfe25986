//! Keymap cells and the actions they trigger.
//!
//! - [`KeyAction`] - what a keymap cell holds, including the `No` and `Transparent` sentinels
//! - [`Action`] - a generic keycode passthrough or one of the custom actions handled by the keyboard

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in the keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. Terminal: resolution stops here and nothing is sent.
    No,
    /// Defer to the next lower active layer.
    Transparent,
    /// A single action, triggered on press and finished on release.
    Single(Action),
}

impl KeyAction {
    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }
}

/// A single operation triggered by a key.
///
/// `Key` and `KeyWithModifier` are forwarded to the host, every other variant
/// is absorbed by the keyboard and only produces side effects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with modifiers held around it.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held.
    LayerOn(u8),
    /// Deactivate a layer.
    LayerOff(u8),
    /// Toggle a layer on release.
    LayerToggle(u8),
    /// Replace the default layer and persist it.
    DefaultLayer(u8),
    /// Type the string at this index of the keyboard's string table.
    SendString(u8),
    /// Reset every persisted setting to the compiled defaults.
    ClearStorage,
    /// Jump to the bootloader.
    Bootloader,
    AudioOn,
    AudioOff,
    /// Swap alt and gui on both sides.
    AltGuiSwap,
    /// Undo [`Action::AltGuiSwap`].
    AltGuiNormal,
}
