//! XD75
//!
//! 5x15 grid. The outer columns and the middle column are unused on the base
//! layer. Lower types US-shifted symbols, raise the plain US ones.
//!
//! The adjust layer holds the keyboard settings: bootloader (on both ends of
//! the row), audio on/off, alt/gui swap and default layer.

use keylayer::action::KeyAction;
use keylayer::config::{BehaviorConfig, KeyboardConfig, TriLayer};
use keylayer::controller::audio::{Song, Songs, Tone};
use keylayer::{ac, df, k, layer, mo, shifted};

use crate::bepo::*;
use crate::{XXXX, ____};

pub const ROW: usize = 5;
pub const COL: usize = 15;
pub const NUM_LAYER: usize = 4;

pub const BEPO: u8 = 0;
pub const LOWER: u8 = 1;
pub const RAISE: u8 = 2;
pub const ADJUST: u8 = 3;

/// Played when bépo becomes the default layer
pub const BEPO_SONG: Song = &[
    Tone::new(1661, 8),
    Tone::new(1760, 8),
    Tone::new(0, 4),
    Tone::new(2637, 16),
];

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [XXXX, BP_DLR, BP_DQOT, BP_LGIL, BP_RGIL, BP_LPRN, BP_RPRN, XXXX, BP_AT, BP_PLUS, BP_MINS, BP_SLSH, BP_ASTR, BP_EQL, XXXX],
            [XXXX, k!(Tab), BP_B, BP_ECUT, BP_P, BP_O, BP_EGRV, XXXX, BP_DCRC, BP_V, BP_D, BP_L, BP_J, BP_Z, XXXX],
            [XXXX, k!(Escape), BP_A, BP_U, BP_I, BP_E, BP_COMM, XXXX, BP_C, BP_T, BP_S, BP_R, BP_N, BP_M, XXXX],
            [XXXX, BP_ECRC, BP_AGRV, BP_Y, BP_X, BP_DOT, BP_K, XXXX, BP_APOS, BP_Q, BP_G, BP_H, BP_F, BP_CCED, XXXX],
            [XXXX, XXXX, XXXX, XXXX, mo!(LOWER), k!(LGui), k!(Space), k!(LShift), BP_ALGR, mo!(RAISE), k!(LAlt), BP_PERC, BP_W, XXXX, XXXX]
        ]),
        layer!([
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [shifted!(Grave), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), ____, ____, ____, shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), k!(Backspace)],
            [k!(Delete), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), ____, ____, ____, k!(F6), shifted!(Minus), shifted!(Equal), shifted!(LeftBracket), shifted!(RightBracket), shifted!(Backslash)],
            [____, k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), ____, ____, ____, k!(F12), k!(MouseLeft), k!(MouseDown), k!(MouseUp), k!(MouseRight), k!(MouseBtn1)],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(MediaNextTrack), k!(AudioVolDown), k!(AudioVolUp), k!(MediaPlayPause)]
        ]),
        layer!([
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), ____, ____, ____, k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Backspace)],
            [k!(Delete), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), ____, ____, ____, k!(F6), k!(Minus), k!(Equal), k!(LeftBracket), k!(RightBracket), k!(Backslash)],
            [____, k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), ____, ____, ____, k!(F12), k!(Left), k!(Down), k!(Up), k!(Right), k!(MouseBtn2)],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, k!(MediaNextTrack), k!(AudioVolDown), k!(AudioVolUp), k!(MediaPlayPause)]
        ]),
        layer!([
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ac!(Bootloader), ____, ac!(AudioOn), ac!(AudioOff), ac!(AltGuiNormal), ____, ____, ____, ac!(AltGuiSwap), df!(BEPO), XXXX, XXXX, ac!(Bootloader), k!(Delete)],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
            [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____]
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
        default_layer: &[(BEPO, BEPO_SONG)],
        ..Default::default()
    }
}

#[cfg(test)]
mod test {
    use keylayer::action::Action;
    use keylayer::keycode::KeyCode;
    use keylayer::modifier::SHIFT;

    use super::*;

    static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();

    #[test]
    fn test_base_is_opaque() {
        assert!(KEYMAP[BEPO as usize].iter().flatten().all(|a| !a.is_transparent()));
    }

    #[test]
    fn test_unused_columns() {
        for row in 0..4 {
            assert_eq!(KEYMAP[BEPO as usize][row][0], KeyAction::No);
            assert_eq!(KEYMAP[BEPO as usize][row][7], KeyAction::No);
            assert_eq!(KEYMAP[BEPO as usize][row][14], KeyAction::No);
        }
    }

    #[test]
    fn test_lower_is_shifted() {
        assert_eq!(
            KEYMAP[LOWER as usize][1][1],
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Kc1, SHIFT))
        );
        assert_eq!(KEYMAP[RAISE as usize][1][1], k!(Kc1));
    }

    #[test]
    fn test_settings_keys() {
        let adjust = &KEYMAP[ADJUST as usize][1];
        assert_eq!(adjust[1], ac!(Bootloader));
        assert_eq!(adjust[10], df!(BEPO));
        assert_eq!(adjust[13], ac!(Bootloader));
        assert!(!adjust.contains(&ac!(ClearStorage)));
    }
}
