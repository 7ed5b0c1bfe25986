//! ErgoDox
//!
//! The two halves share one 6x14 matrix: columns 0..=6 are the left hand and
//! columns 7..=13 the right hand. Rows 0..=3 are the alpha block, row 4 the
//! bottom row and row 5 the thumb clusters. Positions without a switch hold
//! `No` on the base layer.
//!
//! The base layer mixes bépo aliases with raw US scancodes, the host layout
//! turns the latter into bépo characters.

use keylayer::action::KeyAction;
use keylayer::config::KeyboardConfig;
use keylayer::{ac, k, layer, mo, send_string};

use crate::bepo::*;
use crate::{XXXX, ____};

pub const ROW: usize = 6;
pub const COL: usize = 14;
pub const NUM_LAYER: usize = 3;

pub const BASE: u8 = 0;
/// Space-fn: function keys, navigation and media
pub const SPFN: u8 = 1;
/// Numeric pad and brackets
pub const NUML: u8 = 2;

/// LED pins, in this order: right LED 1, right LED 2, right LED 3, board LED
pub const NUM_LEDS: usize = 4;
/// LED 1 shows the space-fn layer, LED 2 the numeric layer. LED 3 and the board LED stay off.
pub const LAYER_LEDS: [(u8, usize); 2] = [(SPFN, 0), (NUML, 1)];

/// Typed by the version key of the space-fn layer
pub const STRINGS: &[&str] = &[concat!("ergodox/flink-bepo @ ", env!("CARGO_PKG_VERSION"))];

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [BP_DLR, k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Delete), k!(Delete), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), BP_EQL],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Backspace), k!(Backspace), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket)],
            [k!(Escape), k!(A), k!(S), k!(D), BP_E, k!(G), XXXX, XXXX, k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
            [BP_ECRC, k!(Z), k!(X), k!(C), k!(V), k!(B), k!(Enter), k!(Enter), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), FR_ASTR],
            [XXXX, XXXX, k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), XXXX, XXXX, XXXX, XXXX, XXXX, XXXX, BP_PERC, BP_W, XXXX],
            [k!(LGui), k!(LCtrl), mo!(NUML), k!(Space), k!(LShift), mo!(SPFN), XXXX, XXXX, k!(Calculator), k!(LAlt), mo!(NUML), mo!(SPFN), k!(RShift), k!(RAlt)]
        ]),
        layer!([
            [ac!(Bootloader), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), ____, k!(AudioMute), ____, ____, ____, ____, ____, send_string!(0)],
            [____, k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), ____, k!(AudioVolUp), ____, k!(Home), k!(Up), k!(End), k!(PageUp), ____],
            [____, k!(F11), k!(F12), ____, ____, ____, ____, ____, ____, k!(Left), k!(Down), k!(Right), k!(PageDown), ____],
            [____, ____, ____, ____, ____, ____, ____, k!(AudioVolDown), ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____]
        ]),
        layer!([
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, BP_LPRN, BP_RPRN, ____, ____, ____, ____, ____, k!(Kp7), k!(Kp8), k!(Kp9), k!(KpAsterisk), ____],
            [____, ____, BP_LBRC, BP_RBRC, BP_LESS, BP_GRTR, ____, ____, ____, k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus), k!(KpMinus)],
            [____, ____, BP_LCBR, BP_RCBR, ____, ____, ____, ____, ____, k!(Kp1), k!(Kp2), k!(Kp3), k!(KpSlash), ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, k!(NumLock), ____, ____, k!(KpDot), k!(Kp0)]
        ]),
    ]
}

/// No tri-layer on the ErgoDox, the two layer keys are independent.
pub fn keyboard_config() -> KeyboardConfig<'static> {
    KeyboardConfig {
        strings: STRINGS,
        ..Default::default()
    }
}
