//! # keylayer-boards
//!
//! The flink-bepo keymaps, for three boards:
//!
//! - [`ergodox`]: split ErgoDox, with a space-fn layer, a numeric layer and layer LEDs
//! - [`preonic`]: Preonic, lower/raise/adjust with audio
//! - [`xd75`]: XD75 ortholinear, lower/raise/adjust with settings keys on adjust
//!
//! Every board module exposes its matrix size, its layer indices, a
//! `get_default_keymap` and a `keyboard_config`, to be handed to
//! [`keylayer::Keyboard::new`].
#![no_std]

use keylayer::a;
use keylayer::action::KeyAction;

pub mod bepo;
pub mod ergodox;
pub mod preonic;
pub mod xd75;

/// Fall through to the layer below
pub(crate) const ____: KeyAction = a!(Transparent);
/// Dead key
pub(crate) const XXXX: KeyAction = a!(No);
