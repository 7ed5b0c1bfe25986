//! bépo aliases
//!
//! The host is expected to run the bépo layout, so every alias below is the US
//! scancode sitting where the bépo character lives. Characters from the AltGr
//! level carry the AltGr modifier with them.

use keylayer::action::KeyAction;
use keylayer::{altgr, k};

// Number row
pub const BP_DLR: KeyAction = k!(Grave);
pub const BP_DQOT: KeyAction = k!(Kc1);
pub const BP_LGIL: KeyAction = k!(Kc2);
pub const BP_RGIL: KeyAction = k!(Kc3);
pub const BP_LPRN: KeyAction = k!(Kc4);
pub const BP_RPRN: KeyAction = k!(Kc5);
pub const BP_AT: KeyAction = k!(Kc6);
pub const BP_PLUS: KeyAction = k!(Kc7);
pub const BP_MINS: KeyAction = k!(Kc8);
pub const BP_SLSH: KeyAction = k!(Kc9);
pub const BP_ASTR: KeyAction = k!(Kc0);
pub const BP_EQL: KeyAction = k!(Minus);
pub const BP_PERC: KeyAction = k!(Equal);

// Top row
pub const BP_B: KeyAction = k!(Q);
pub const BP_ECUT: KeyAction = k!(W);
pub const BP_P: KeyAction = k!(E);
pub const BP_O: KeyAction = k!(R);
pub const BP_EGRV: KeyAction = k!(T);
pub const BP_DCRC: KeyAction = k!(Y);
pub const BP_V: KeyAction = k!(U);
pub const BP_D: KeyAction = k!(I);
pub const BP_L: KeyAction = k!(O);
pub const BP_J: KeyAction = k!(P);
pub const BP_Z: KeyAction = k!(LeftBracket);
pub const BP_W: KeyAction = k!(RightBracket);

// Home row
pub const BP_A: KeyAction = k!(A);
pub const BP_U: KeyAction = k!(S);
pub const BP_I: KeyAction = k!(D);
pub const BP_E: KeyAction = k!(F);
pub const BP_COMM: KeyAction = k!(G);
pub const BP_C: KeyAction = k!(H);
pub const BP_T: KeyAction = k!(J);
pub const BP_S: KeyAction = k!(K);
pub const BP_R: KeyAction = k!(L);
pub const BP_N: KeyAction = k!(Semicolon);
pub const BP_M: KeyAction = k!(Quote);
pub const BP_CCED: KeyAction = k!(Backslash);

// Bottom row
pub const BP_ECRC: KeyAction = k!(NonusBackslash);
pub const BP_AGRV: KeyAction = k!(Z);
pub const BP_Y: KeyAction = k!(X);
pub const BP_X: KeyAction = k!(C);
pub const BP_DOT: KeyAction = k!(V);
pub const BP_K: KeyAction = k!(B);
pub const BP_APOS: KeyAction = k!(N);
pub const BP_Q: KeyAction = k!(M);
pub const BP_G: KeyAction = k!(Comma);
pub const BP_H: KeyAction = k!(Dot);
pub const BP_F: KeyAction = k!(Slash);

pub const BP_ALGR: KeyAction = k!(RAlt);

// AltGr level
pub const BP_LESS: KeyAction = altgr!(Kc2);
pub const BP_GRTR: KeyAction = altgr!(Kc3);
pub const BP_LBRC: KeyAction = altgr!(Kc4);
pub const BP_RBRC: KeyAction = altgr!(Kc5);
pub const BP_LCBR: KeyAction = altgr!(X);
pub const BP_RCBR: KeyAction = altgr!(C);

/// `*` on the French AZERTY layout, which the ErgoDox base layer still uses
pub const FR_ASTR: KeyAction = k!(NonusHash);
