#![allow(dead_code)]

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;
use keylayer::action::KeyAction;
use keylayer::config::KeyboardConfig;
use keylayer::controller::Controller;
use keylayer::controller::audio::{Buzzer, Song};
use keylayer::eeprom::RamStorage;
use keylayer::event::{KeyEvent, KeyboardStateEvent};
use keylayer::hid::KeyReport;
use keylayer::keyboard::Keyboard;
use keylayer::keycode::KeyCode;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub type Reports = Vec<KeyReport, 256>;
pub type TestStorage = RamStorage<64>;
pub type TestKeyboard<C, const ROW: usize, const COL: usize, const NUM_LAYER: usize> =
    Keyboard<'static, Reports, TestStorage, C, ROW, COL, NUM_LAYER>;

/// Create a started keyboard
pub fn create_keyboard<C: Controller, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keymap: &'static [[[KeyAction; COL]; ROW]; NUM_LAYER],
    config: KeyboardConfig<'static>,
    storage: TestStorage,
    controller: C,
) -> TestKeyboard<C, ROW, COL, NUM_LAYER> {
    let mut keyboard = Keyboard::new(keymap, config, Vec::new(), storage, controller);
    keyboard.start();
    keyboard
}

pub fn press<C: Controller, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut TestKeyboard<C, ROW, COL, NUM_LAYER>,
    key: (u8, u8),
) {
    keyboard.process_event(KeyEvent {
        row: key.0,
        col: key.1,
        pressed: true,
    });
}

pub fn release<C: Controller, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut TestKeyboard<C, ROW, COL, NUM_LAYER>,
    key: (u8, u8),
) {
    keyboard.process_event(KeyEvent {
        row: key.0,
        col: key.1,
        pressed: false,
    });
}

pub fn tap<C: Controller, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut TestKeyboard<C, ROW, COL, NUM_LAYER>,
    key: (u8, u8),
) {
    press(keyboard, key);
    release(keyboard, key);
}

/// Tap `key` while holding `layer_keys`, released in reverse order
pub fn tap_with<C: Controller, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut TestKeyboard<C, ROW, COL, NUM_LAYER>,
    layer_keys: &[(u8, u8)],
    key: (u8, u8),
) {
    layer_keys.iter().for_each(|k| press(keyboard, *k));
    tap(keyboard, key);
    layer_keys.iter().rev().for_each(|k| release(keyboard, *k));
}

/// Press and release reports of a plain key
pub fn stroke(key: KeyCode) -> [KeyReport; 2] {
    [KeyReport::press(key), KeyReport::release(key)]
}

/// Reports of a key typed with one modifier held around it
pub fn stroke_with(modifier: KeyCode, key: KeyCode) -> [KeyReport; 4] {
    [
        KeyReport::press(modifier),
        KeyReport::press(key),
        KeyReport::release(key),
        KeyReport::release(modifier),
    ]
}

#[derive(Default)]
pub struct TestPin {
    pub high: bool,
}

impl ErrorType for TestPin {
    type Error = Infallible;
}

impl OutputPin for TestPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

#[derive(Default)]
pub struct TestBuzzer {
    pub played: Vec<Song, 16>,
    pub stopped: usize,
}

impl Buzzer for TestBuzzer {
    fn play(&mut self, song: Song) {
        let _ = self.played.push(song);
    }

    fn stop(&mut self) {
        self.stopped += 1;
    }
}

/// Keeps every state event
#[derive(Default)]
pub struct EventRecorder {
    pub events: Vec<KeyboardStateEvent, 64>,
}

impl Controller for EventRecorder {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        let _ = self.events.push(event);
    }
}
