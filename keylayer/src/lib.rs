//! # keylayer
//!
//! Layer resolution for layered keyboard keymaps, in the QMK tradition.
//!
//! A [`keymap::KeyMap`] holds one table of [`action::KeyAction`]s per layer and a
//! bitmask of active layers. The [`keyboard::Keyboard`] feeds it matrix events,
//! runs the custom actions (layer keys, default layer switch, settings reset,
//! string typing) and forwards plain keys to a [`hid::HidWriter`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod controller;
pub mod driver;
pub mod eeprom;
pub mod event;
pub mod hid;
pub mod keyboard;
pub mod keymap;
pub mod layer_state;
mod layout_macro;

pub use keylayer_types::{action, keycode, modifier};
pub use keyboard::Keyboard;
pub use keymap::KeyMap;
