use core::ops::BitOr;

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// Modifiers held together with a key, e.g. `AltGr + 4` for `[` in bépo.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
/// Right alt, the AltGr key
pub const ALTGR: ModifierCombination = ModifierCombination::new().with_alt(true).with_right(true);

impl ModifierCombination {
    pub fn is_empty(self) -> bool {
        self.into_bits() & 0x0F == 0
    }

    /// Modifier keycodes to press for this combination, in ctrl, shift, alt, gui order.
    pub fn to_keycodes(self) -> [Option<KeyCode>; 4] {
        let side = |left: KeyCode, right: KeyCode| if self.right() { right } else { left };
        [
            self.ctrl().then(|| side(KeyCode::LCtrl, KeyCode::RCtrl)),
            self.shift().then(|| side(KeyCode::LShift, KeyCode::RShift)),
            self.alt().then(|| side(KeyCode::LAlt, KeyCode::RAlt)),
            self.gui().then(|| side(KeyCode::LGui, KeyCode::RGui)),
        ]
    }
}
