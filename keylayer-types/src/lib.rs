//! # keylayer types
//!
//! Plain data shared by the keylayer resolver and the board keymaps.
//!
//! - [`keycode`] - HID keycodes the keymaps can emit
//! - [`modifier`] - modifier combinations attached to a key
//! - [`action`] - keymap cells and the actions they trigger

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
