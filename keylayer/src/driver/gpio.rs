use embedded_hal::digital::OutputPin;

/// The gpio driver is a wrapper for the embedded-hal digital output pin trait.
/// It wraps the low-active and high-active pins and remembers the last state it set.
pub struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
    active: bool,
}

impl<P: OutputPin> OutputController<P> {
    /// Create a new OutputController instance, the pin is left untouched until first use
    pub fn new(pin: P, low_active: bool) -> Self {
        Self {
            pin,
            low_active,
            active: false,
        }
    }

    /// Activate the GPIO pin
    pub fn activate(&mut self) {
        if self.low_active {
            self.pin.set_low().ok();
        } else {
            self.pin.set_high().ok();
        }
        self.active = true;
    }

    /// Deactivate the GPIO pin
    pub fn deactivate(&mut self) {
        if self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.active = false;
    }

    /// Last state set by this controller
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
