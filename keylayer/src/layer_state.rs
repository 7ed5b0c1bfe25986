/// Bitmask of momentarily active layers, bit `n` is layer `n`.
///
/// Holds at most 32 layers. The default layer is tracked apart, see [`crate::keymap::KeyMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const MAX_LAYERS: usize = u32::BITS as usize;

    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_on(self, layer: u8) -> bool {
        (layer as usize) < Self::MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    pub fn set(&mut self, layer: u8, on: bool) {
        if (layer as usize) >= Self::MAX_LAYERS {
            return;
        }
        if on {
            self.0 |= 1 << layer;
        } else {
            self.0 &= !(1 << layer);
        }
    }

    /// Highest active layer, `None` if nothing is active.
    pub const fn highest(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some((u32::BITS - 1 - self.0.leading_zeros()) as u8)
        }
    }
}
