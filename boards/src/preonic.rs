//! Preonic
//!
//! 5x12 grid with the two space switches both mapped to space. The adjust
//! layer has no key of its own yet, holding lower and raise together falls
//! through to raise.
//!
//! Raise follows the layout diagram of the source keymap, not its table: F2
//! after F1 on the top row, F11 and F12 on the home row.
//!
//! The music scale of the source keymap is not carried, no key turns music
//! mode on.

use keylayer::action::KeyAction;
use keylayer::config::{BehaviorConfig, KeyboardConfig, TriLayer};
use keylayer::controller::audio::{Song, Songs, Tone};
use keylayer::{k, layer, mo};

use crate::bepo::*;
use crate::____;

pub const ROW: usize = 5;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 4;

pub const MAIN: u8 = 0;
/// Brackets and numeric pad
pub const LOWER: u8 = 1;
/// Function keys, navigation and volume
pub const RAISE: u8 = 2;
pub const ADJUST: u8 = 3;

pub const STARTUP_SONG: Song = &[
    Tone::new(988, 20),
    Tone::new(1976, 8),
    Tone::new(1245, 20),
    Tone::new(1976, 8),
];

pub const GOODBYE_SONG: Song = &[Tone::new(2637, 8), Tone::new(1760, 8), Tone::new(1319, 12)];

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [BP_DLR, BP_DQOT, BP_LGIL, BP_RGIL, BP_LPRN, BP_RPRN, BP_AT, BP_PLUS, BP_MINS, BP_SLSH, BP_ASTR, BP_EQL],
            [k!(Tab), BP_B, BP_ECUT, BP_P, BP_O, BP_EGRV, BP_DCRC, BP_V, BP_D, BP_L, BP_J, BP_Z],
            [k!(Escape), BP_A, BP_U, BP_I, BP_E, BP_COMM, BP_C, BP_T, BP_S, BP_R, BP_N, BP_M],
            [k!(Backspace), BP_AGRV, BP_Y, BP_X, BP_DOT, BP_K, BP_APOS, BP_Q, BP_G, BP_H, BP_F, BP_CCED],
            [k!(LGui), k!(LCtrl), k!(LAlt), mo!(LOWER), k!(LShift), k!(Space), k!(Space), BP_ALGR, mo!(RAISE), BP_PERC, BP_W, k!(Enter)]
        ]),
        layer!([
            [____, ____, ____, ____, ____, ____, k!(Delete), ____, ____, ____, ____, k!(NumLock)],
            [____, ____, BP_LPRN, BP_RPRN, ____, ____, k!(Backspace), k!(Kp7), k!(Kp8), k!(Kp9), k!(KpAsterisk), ____],
            [____, ____, BP_LBRC, BP_RBRC, BP_LESS, BP_GRTR, k!(Enter), k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus), k!(KpMinus)],
            [____, ____, BP_LCBR, BP_RCBR, ____, ____, ____, k!(Kp1), k!(Kp2), k!(Kp3), k!(KpSlash), ____],
            [____, ____, ____, ____, ____, ____, ____, k!(Kp0), ____, ____, ____, ____]
        ]),
        layer!([
            [____, k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(Delete), ____, ____, ____, ____, k!(AudioMute)],
            [____, k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(Backspace), k!(Home), k!(Up), k!(End), k!(PageUp), k!(AudioVolUp)],
            [____, k!(F11), k!(F12), ____, ____, ____, k!(Enter), k!(Left), k!(Down), k!(Right), k!(PageDown), k!(AudioVolDown)],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____]
        ]),
        layer!([
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____]
        ]),
    ]
}

pub fn keyboard_config() -> KeyboardConfig<'static> {
    KeyboardConfig {
        behavior_config: BehaviorConfig {
            tri_layer: Some(TriLayer::new(LOWER, RAISE, ADJUST)),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn songs() -> Songs<'static> {
    Songs {
        startup: Some(STARTUP_SONG),
        goodbye: Some(GOODBYE_SONG),
        default_layer: &[],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();

    #[test]
    fn test_base_is_opaque() {
        assert!(KEYMAP[MAIN as usize].iter().flatten().all(|a| !a.is_transparent()));
    }

    #[test]
    fn test_adjust_falls_through() {
        assert!(KEYMAP[ADJUST as usize].iter().flatten().all(|a| a.is_transparent()));
    }

    #[test]
    fn test_raise_function_keys() {
        let raise = &KEYMAP[RAISE as usize];
        assert_eq!(raise[0][1], k!(F1));
        assert_eq!(raise[0][2], k!(F2));
        assert_eq!(raise[2][1], k!(F11));
        assert_eq!(raise[2][2], k!(F12));
    }

    #[test]
    fn test_layer_keys() {
        assert_eq!(KEYMAP[MAIN as usize][4][3], mo!(LOWER));
        assert_eq!(KEYMAP[MAIN as usize][4][8], mo!(RAISE));
        // Both layer keys are transparent on their own layers
        assert!(KEYMAP[LOWER as usize][4][3].is_transparent());
        assert!(KEYMAP[RAISE as usize][4][8].is_transparent());
    }
}
