//! Output side of the keyboard: key events handed to the host link.

use crate::keycode::KeyCode;

/// A key to press or release on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    pub keycode: KeyCode,
    pub pressed: bool,
}

impl KeyReport {
    pub const fn press(keycode: KeyCode) -> Self {
        Self { keycode, pressed: true }
    }

    pub const fn release(keycode: KeyCode) -> Self {
        Self { keycode, pressed: false }
    }
}

/// Sink of key reports, implemented by the USB/BLE report layer.
pub trait HidWriter {
    fn write_report(&mut self, report: KeyReport);
}

impl<W: HidWriter + ?Sized> HidWriter for &mut W {
    fn write_report(&mut self, report: KeyReport) {
        (**self).write_report(report)
    }
}

/// Collect reports in a fixed capacity buffer, reports past the capacity are dropped.
impl<const N: usize> HidWriter for heapless::Vec<KeyReport, N> {
    fn write_report(&mut self, report: KeyReport) {
        if self.push(report).is_err() {
            warn!("Report buffer is full, dropping {:?}", report);
        }
    }
}
