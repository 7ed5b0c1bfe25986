//! Controllers react to keyboard state changes and drive outputs other than
//! key reports: indicator LEDs, the buzzer, a bootloader jump.
//!
//! Several controllers are combined with tuples:
//!
//! ```rust,ignore
//! let controllers = (LayerIndicatorController::new(leds, false, &LAYER_LEDS), AudioController::new(buzzer, songs));
//! ```

pub mod audio;
pub mod layer_indicator;

use crate::event::KeyboardStateEvent;

/// This trait provides the interface for individual output device controllers.
///
/// Events are handled synchronously, in the order the keyboard emits them.
pub trait Controller {
    fn process_event(&mut self, event: KeyboardStateEvent);
}

impl Controller for () {
    fn process_event(&mut self, _event: KeyboardStateEvent) {}
}

impl<C: Controller + ?Sized> Controller for &mut C {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        (**self).process_event(event)
    }
}

impl<A: Controller, B: Controller> Controller for (A, B) {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        self.0.process_event(event);
        self.1.process_event(event);
    }
}

impl<A: Controller, B: Controller, C: Controller> Controller for (A, B, C) {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        self.0.process_event(event);
        self.1.process_event(event);
        self.2.process_event(event);
    }
}

/// Run a closure on each event, handy for the bootloader jump
pub struct FnController<F: FnMut(KeyboardStateEvent)>(pub F);

impl<F: FnMut(KeyboardStateEvent)> Controller for FnController<F> {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        (self.0)(event)
    }
}
