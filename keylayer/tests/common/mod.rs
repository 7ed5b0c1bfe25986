#![allow(dead_code)]

use core::convert::Infallible;

use embassy_futures::block_on;
use embassy_futures::select::select;
use embassy_futures::yield_now;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;
use keylayer::action::{Action, KeyAction};
use keylayer::config::{BehaviorConfig, KeyboardConfig, TriLayer};
use keylayer::controller::Controller;
use keylayer::controller::audio::{Buzzer, Song};
use keylayer::eeprom::RamStorage;
use keylayer::event::{KeyEvent, KeyboardStateEvent};
use keylayer::hid::KeyReport;
use keylayer::keyboard::Keyboard;
use keylayer::{a, ac, df, k, mo, send_string, tg};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const ROW: usize = 5;
pub const COL: usize = 6;
pub const NUM_LAYER: usize = 5;

pub const LOWER: (u8, u8) = (4, 2);
pub const RAISE: (u8, u8) = (4, 4);
/// Second key holding the lower layer
pub const LOWER2: (u8, u8) = (3, 5);
pub const TOGGLE_LOWER: (u8, u8) = (3, 1);
pub const TOGGLE_RAISE: (u8, u8) = (3, 2);
pub const TOGGLE_ADJUST: (u8, u8) = (3, 3);
/// Turns lower off, on lower itself
pub const LOWER_OFF: (u8, u8) = (3, 0);
/// On adjust
pub const AG_SWAP: (u8, u8) = (2, 0);
pub const AG_NORM: (u8, u8) = (2, 1);

const TURN_OFF_LOWER: KeyAction = KeyAction::Single(Action::LayerOff(1));

pub const STRINGS: &[&str] = &["Hi 1"];

/// Layer 0 base, 1 lower, 2 raise, 3 adjust, 4 alternative base
#[rustfmt::skip]
pub const fn get_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        [
            [k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T)],
            [k!(Escape), k!(S), k!(D), k!(A), k!(F), k!(G)],
            [k!(LShift), tg!(1), tg!(2), tg!(3), k!(V), mo!(1)],
            [k!(LCtrl), k!(LGui), mo!(1), k!(Space), mo!(2), send_string!(0)],
        ],
        [
            [k!(F1), k!(F2), k!(F3), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [TURN_OFF_LOWER, a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), send_string!(1)],
        ],
        [
            [k!(F11), k!(Up), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        ],
        [
            [ac!(ClearStorage), ac!(Bootloader), df!(0), df!(4), ac!(AudioOn), ac!(AudioOff)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [ac!(AltGuiSwap), ac!(AltGuiNormal), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        ],
        [
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(U), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        ],
    ]
}

pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_keymap();

pub type Reports = Vec<KeyReport, 128>;
pub type TestStorage = RamStorage<32>;
pub type TestKeyboard<C> = Keyboard<'static, Reports, TestStorage, C, ROW, COL, NUM_LAYER>;

pub fn test_config() -> KeyboardConfig<'static> {
    KeyboardConfig {
        behavior_config: BehaviorConfig {
            tri_layer: Some(TriLayer::new(1, 2, 3)),
            ..Default::default()
        },
        strings: STRINGS,
        ..Default::default()
    }
}

/// Create a started keyboard
pub fn create_keyboard<C: Controller>(
    config: KeyboardConfig<'static>,
    storage: TestStorage,
    controller: C,
) -> TestKeyboard<C> {
    let mut keyboard = Keyboard::new(&KEYMAP, config, Vec::new(), storage, controller);
    keyboard.start();
    keyboard
}

pub fn key_event(row: u8, col: u8, pressed: bool) -> KeyEvent {
    KeyEvent { row, col, pressed }
}

pub fn press<C: Controller>(keyboard: &mut TestKeyboard<C>, key: (u8, u8)) {
    keyboard.process_event(key_event(key.0, key.1, true));
}

pub fn release<C: Controller>(keyboard: &mut TestKeyboard<C>, key: (u8, u8)) {
    keyboard.process_event(key_event(key.0, key.1, false));
}

pub fn tap<C: Controller>(keyboard: &mut TestKeyboard<C>, key: (u8, u8)) {
    press(keyboard, key);
    release(keyboard, key);
}

/// Tap a key of the adjust layer, holding lower and raise around it
pub fn tap_on_adjust<C: Controller>(keyboard: &mut TestKeyboard<C>, key: (u8, u8)) {
    press(keyboard, LOWER);
    press(keyboard, RAISE);
    tap(keyboard, key);
    release(keyboard, RAISE);
    release(keyboard, LOWER);
}

/// Feed events through a channel to the keyboard's main loop, until all are processed
pub fn run_key_sequence<C: Controller>(keyboard: &mut TestKeyboard<C>, events: &[KeyEvent]) {
    let channel: Channel<NoopRawMutex, KeyEvent, 4> = Channel::new();
    block_on(async {
        select(keyboard.run(channel.receiver()), async {
            for event in events {
                channel.send(*event).await;
            }
            while !channel.is_empty() {
                yield_now().await;
            }
        })
        .await;
    });
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
