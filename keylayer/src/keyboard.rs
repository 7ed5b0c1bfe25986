use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embedded_storage::Storage;

use crate::action::{Action, KeyAction};
use crate::config::KeyboardConfig;
use crate::controller::Controller;
use crate::eeprom::{EeConfig, Eeprom};
use crate::event::{KeyEvent, KeyboardStateEvent};
use crate::hid::{HidWriter, KeyReport};
use crate::keycode::{KeyCode, from_ascii};
use crate::keymap::KeyMap;
use crate::modifier::ModifierCombination;

/// The keyboard: resolves key events against the keymap, runs custom actions
/// and forwards everything else to the host.
///
/// Events are processed one at a time, each one to completion.
pub struct Keyboard<'a, W, S, C, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
where
    W: HidWriter,
    S: Storage,
    C: Controller,
{
    /// Keymap and layer state
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    /// Key reports go here
    writer: W,
    /// Persisted settings
    eeprom: Eeprom<S>,
    /// Cached copy of the persisted settings
    eeconfig: EeConfig,
    /// Indicators, audio and everything else reacting to state changes
    controller: C,
    config: KeyboardConfig<'a>,
}

impl<'a, W, S, C, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, W, S, C, ROW, COL, NUM_LAYER>
where
    W: HidWriter,
    S: Storage,
    C: Controller,
{
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        config: KeyboardConfig<'a>,
        writer: W,
        storage: S,
        controller: C,
    ) -> Self {
        Self {
            keymap: KeyMap::new(layers, config.behavior_config),
            writer,
            eeprom: Eeprom::new(storage, config.storage_config.start_addr),
            eeconfig: EeConfig::default(),
            controller,
            config,
        }
    }

    /// Load the persisted settings and notify the controllers.
    ///
    /// Call once before processing key events.
    pub fn start(&mut self) {
        if self.config.storage_config.clear_storage {
            info!("Clearing storage");
            if self.eeprom.reset().is_err() {
                error!("Failed to clear storage");
            }
        }

        let config = match self.eeprom.read_config() {
            Ok(Some(config)) => config,
            Ok(None) => {
                info!("No valid settings found, writing defaults");
                let config = EeConfig::default();
                if self.eeprom.write_config(&config).is_err() {
                    error!("Failed to write default settings");
                }
                config
            }
            Err(_) => {
                error!("Failed to read settings, using defaults");
                EeConfig::default()
            }
        };
        self.apply_config(config);
        self.controller.process_event(KeyboardStateEvent::Startup);
    }

    /// Notify the controllers that the keyboard goes down
    pub fn shutdown(&mut self) {
        self.controller.process_event(KeyboardStateEvent::Shutdown);
    }

    fn apply_config(&mut self, mut config: EeConfig) {
        if !self.keymap.set_default_layer(config.default_layer) {
            warn!("Stored default layer {} is invalid, using layer 0", config.default_layer);
            config.default_layer = 0;
            self.keymap.set_default_layer(0);
        }
        debug!("Loaded settings: {:?}", config);
        self.eeconfig = config;
        self.controller
            .process_event(KeyboardStateEvent::AudioEnabled(config.audio_config.enable()));
    }

    /// Main loop: process key events in arrival order
    pub async fn run<M: RawMutex, const N: usize>(&mut self, receiver: Receiver<'_, M, KeyEvent, N>) {
        loop {
            let key_event = receiver.receive().await;
            self.process_event(key_event);
        }
    }

    /// Process a single key event to completion
    pub fn process_event(&mut self, key_event: KeyEvent) {
        let layer_state = self.keymap.layer_state();

        let key_action = self.keymap.get_action_with_layer_cache(key_event);
        debug!("Processing {:?}, action: {:?}", key_event, key_action);
        match key_action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(action) => self.process_action(action, key_event),
        }

        let new_state = self.keymap.layer_state();
        if new_state != layer_state {
            self.controller.process_event(KeyboardStateEvent::LayerChanged(new_state));
        }
    }

    fn process_action(&mut self, action: Action, key_event: KeyEvent) {
        match action {
            Action::Key(key) => self.send_key(key, key_event.pressed),
            Action::KeyWithModifier(key, modifiers) => {
                self.process_key_with_modifier(key, modifiers, key_event.pressed)
            }
            Action::LayerOn(layer_num) => {
                if key_event.pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::LayerOff(layer_num) => {
                if key_event.pressed {
                    self.keymap.turn_off_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                if !key_event.pressed {
                    self.keymap.toggle_layer(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if key_event.pressed {
                    self.set_default_layer(layer_num);
                }
            }
            Action::SendString(index) => {
                if key_event.pressed {
                    self.send_string(index);
                }
            }
            Action::ClearStorage => {
                if key_event.pressed {
                    self.clear_storage();
                }
            }
            Action::Bootloader => {
                // On release, so the key isn't seen held after the jump
                if !key_event.pressed {
                    info!("Entering bootloader");
                    self.controller.process_event(KeyboardStateEvent::Shutdown);
                    self.controller.process_event(KeyboardStateEvent::Bootloader);
                }
            }
            Action::AudioOn | Action::AudioOff => {
                if key_event.pressed {
                    self.set_audio(action == Action::AudioOn);
                }
            }
            Action::AltGuiSwap | Action::AltGuiNormal => {
                if key_event.pressed {
                    self.set_alt_gui_swap(action == Action::AltGuiSwap);
                }
            }
        }
    }

    fn send_key(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::No {
            return;
        }
        let keymap_config = self.eeconfig.keymap_config;
        let keycode = key.swap_alt_gui(keymap_config.swap_lalt_lgui(), keymap_config.swap_ralt_rgui());
        self.writer.write_report(KeyReport { keycode, pressed });
    }

    /// Modifiers go down before the key and come up after it
    fn process_key_with_modifier(&mut self, key: KeyCode, modifiers: ModifierCombination, pressed: bool) {
        let modifier_keys = modifiers.to_keycodes();
        if pressed {
            modifier_keys.into_iter().flatten().for_each(|m| self.send_key(m, true));
            self.send_key(key, true);
        } else {
            self.send_key(key, false);
            modifier_keys.into_iter().rev().flatten().for_each(|m| self.send_key(m, false));
        }
    }

    /// Type a string of the string table, as if each char was typed on an en-us host
    fn send_string(&mut self, index: u8) {
        let Some(text) = self.config.strings.get(index as usize).copied() else {
            warn!("String {} is not defined", index);
            return;
        };
        debug!("Typing string {}", index);
        for ascii in text.bytes() {
            let (key, shifted) = from_ascii(ascii);
            if key == KeyCode::No {
                warn!("Char {:#x} can't be typed", ascii);
                continue;
            }
            if shifted {
                self.send_key(KeyCode::LShift, true);
            }
            self.send_key(key, true);
            self.send_key(key, false);
            if shifted {
                self.send_key(KeyCode::LShift, false);
            }
        }
    }

    fn set_default_layer(&mut self, layer_num: u8) {
        if !self.keymap.set_default_layer(layer_num) {
            return;
        }
        info!("Default layer set to {}", layer_num);
        self.eeconfig.default_layer = layer_num;
        if self.eeprom.set_default_layer(layer_num).is_err() {
            error!("Failed to save default layer {}", layer_num);
        }
        self.controller
            .process_event(KeyboardStateEvent::DefaultLayerChanged(layer_num));
    }

    fn clear_storage(&mut self) {
        info!("Resetting settings to defaults");
        let config = match self.eeprom.reset() {
            Ok(config) => config,
            Err(_) => {
                error!("Failed to reset storage");
                EeConfig::default()
            }
        };
        self.apply_config(config);
        self.controller.process_event(KeyboardStateEvent::StorageCleared);
    }

    fn set_audio(&mut self, enable: bool) {
        self.eeconfig.audio_config.set_enable(enable);
        if self.eeprom.set_audio_config(self.eeconfig.audio_config).is_err() {
            error!("Failed to save audio config");
        }
        self.controller.process_event(KeyboardStateEvent::AudioEnabled(enable));
    }

    fn set_alt_gui_swap(&mut self, swap: bool) {
        info!("Alt/Gui swap: {}", swap);
        self.eeconfig.keymap_config = self
            .eeconfig
            .keymap_config
            .with_swap_lalt_lgui(swap)
            .with_swap_ralt_rgui(swap);
        if self.eeprom.set_keymap_config(self.eeconfig.keymap_config).is_err() {
            error!("Failed to save keymap config");
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    /// Settings currently in effect
    pub fn eeconfig(&self) -> &EeConfig {
        &self.eeconfig
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Tear the keyboard down and give the storage back
    pub fn into_storage(self) -> S {
        self.eeprom.into_inner()
    }
}
