use crate::action::KeyAction;
use crate::config::{BehaviorConfig, LayerHoldMode};
use crate::event::KeyEvent;
use crate::layer_state::LayerState;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// The tuple `(row, col, layer)` is used to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Momentarily active layers
    layer_state: LayerState,
    /// Number of keys holding each layer, only used with `LayerHoldMode::Counted`
    hold_count: [u8; NUM_LAYER],
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer which resolved the press of each key
    layer_cache: [[Option<u8>; COL]; ROW],
    /// Options for configurable action behavior
    behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        const { assert!(NUM_LAYER >= 1 && NUM_LAYER <= LayerState::MAX_LAYERS) };
        KeyMap {
            layers,
            layer_state: LayerState::new(),
            hold_count: [0; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[None; COL]; ROW],
            behavior,
        }
    }

    /// Momentarily active layers, the default layer is not included
    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number, returns `false` if the layer doesn't exist
    pub fn set_default_layer(&mut self, layer_num: u8) -> bool {
        if !self.check_layer(layer_num) {
            return false;
        }
        self.default_layer = layer_num;
        true
    }

    /// Returns `true` if the layer takes part in key resolution
    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        self.layer_state.is_on(layer_num) || layer_num == self.default_layer
    }

    /// Fetch the action in keymap, without layer resolution
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers
            .get(layer_num)
            .and_then(|layer| layer.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Resolve the action at a position against the current layer stack.
    ///
    /// Active layers are scanned from the highest to the lowest, the first entry
    /// which is not `Transparent` wins. `No` is a valid result and stops the scan.
    /// If every active layer is transparent, layer 0's entry is used.
    pub fn get_action(&self, row: usize, col: usize) -> KeyAction {
        self.resolve(row, col).0
    }

    fn resolve(&self, row: usize, col: usize) -> (KeyAction, u8) {
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is out of the {}x{} matrix", row, col, ROW, COL);
            return (KeyAction::No, 0);
        }

        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if !self.is_layer_active(layer_idx as u8) {
                continue;
            }
            let action = layer[row][col];
            if action.is_transparent() {
                continue;
            }
            return (action, layer_idx as u8);
        }

        (self.layers[0][row][col], 0)
    }

    /// Fetch the action in keymap, with layer cache.
    ///
    /// A release always resolves on the layer which resolved the press.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is out of the {}x{} matrix", row, col, ROW, COL);
            return KeyAction::No;
        }

        if !key_event.pressed {
            if let Some(layer) = self.pop_layer_from_cache(row, col) {
                return self.layers[layer as usize][row][col];
            }
            return self.get_action(row, col);
        }

        let (action, layer) = self.resolve(row, col);
        self.save_layer_cache(row, col, layer);
        action
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> Option<u8> {
        self.layer_cache[row][col].take()
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = Some(layer_num);
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Update Tri Layer state, only a change of lower or raise re-evaluates it
    fn update_tri_layer(&mut self, changed: u8) {
        if let Some(tri_layer) = self.behavior.tri_layer {
            if changed != tri_layer.lower && changed != tri_layer.raise {
                return;
            }
            let on = self.layer_state.is_on(tri_layer.lower) && self.layer_state.is_on(tri_layer.raise);
            if (tri_layer.adjust as usize) < NUM_LAYER {
                self.layer_state.set(tri_layer.adjust, on);
            }
        }
    }

    /// Activate given layer, pressing a momentary layer key
    pub fn activate_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        if self.behavior.layer_hold == LayerHoldMode::Counted {
            let count = &mut self.hold_count[layer_num as usize];
            *count = count.saturating_add(1);
        }
        self.layer_state.set(layer_num, true);
        self.update_tri_layer(layer_num);
    }

    /// Deactivate given layer, releasing a momentary layer key
    ///
    /// With `LayerHoldMode::Counted` the layer stays on while other keys still hold it.
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        let on = match self.behavior.layer_hold {
            LayerHoldMode::Shared => false,
            LayerHoldMode::Counted => {
                let count = &mut self.hold_count[layer_num as usize];
                *count = count.saturating_sub(1);
                *count > 0
            }
        };
        self.layer_state.set(layer_num, on);
        self.update_tri_layer(layer_num);
    }

    /// Turn given layer off regardless of how many keys hold it
    pub fn turn_off_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        self.hold_count[layer_num as usize] = 0;
        self.layer_state.set(layer_num, false);
        self.update_tri_layer(layer_num);
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if !self.check_layer(layer_num) {
            return;
        }
        self.hold_count[layer_num as usize] = 0;
        let on = !self.layer_state.is_on(layer_num);
        self.layer_state.set(layer_num, on);
        self.update_tri_layer(layer_num);
    }
}
