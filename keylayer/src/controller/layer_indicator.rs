use embedded_hal::digital::OutputPin;

use crate::controller::Controller;
use crate::driver::gpio::OutputController;
use crate::event::KeyboardStateEvent;
use crate::layer_state::LayerState;

/// Indicator lit for a layer state: the one mapped to the highest active layer.
///
/// Layer 0 never lights anything, and an unmapped highest layer leaves every indicator off.
pub fn indicator_for(layer_map: &[(u8, usize)], state: LayerState) -> Option<usize> {
    let layer = state.highest().filter(|l| *l != 0)?;
    layer_map.iter().find(|(l, _)| *l == layer).map(|(_, idx)| *idx)
}

/// Drives a fixed set of LEDs from the layer state, at most one is on at a time.
pub struct LayerIndicatorController<'a, P: OutputPin, const N: usize> {
    indicators: [OutputController<P>; N],
    /// `(layer, indicator index)` pairs
    layer_map: &'a [(u8, usize)],
}

impl<'a, P: OutputPin, const N: usize> LayerIndicatorController<'a, P, N> {
    pub fn new(pins: [P; N], low_active: bool, layer_map: &'a [(u8, usize)]) -> Self {
        Self {
            indicators: pins.map(|pin| OutputController::new(pin, low_active)),
            layer_map,
        }
    }

    pub fn indicators(&self) -> &[OutputController<P>; N] {
        &self.indicators
    }

    fn update(&mut self, state: LayerState) {
        self.indicators.iter_mut().for_each(|indicator| indicator.deactivate());
        if let Some(idx) = indicator_for(self.layer_map, state) {
            match self.indicators.get_mut(idx) {
                Some(indicator) => {
                    debug!("Activating indicator {} for layer state {:#x}", idx, state.bits());
                    indicator.activate();
                }
                None => warn!("Indicator {} doesn't exist, {} indicators available", idx, N),
            }
        }
    }
}

impl<P: OutputPin, const N: usize> Controller for LayerIndicatorController<'_, P, N> {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        match event {
            KeyboardStateEvent::LayerChanged(state) => self.update(state),
            // Start dark
            KeyboardStateEvent::Startup => self.update(LayerState::new()),
            _ => (),
        }
    }
}
