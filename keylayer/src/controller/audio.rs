//! Audio cues: startup and goodbye songs, and a song per default layer.

use crate::controller::Controller;
use crate::event::KeyboardStateEvent;

/// A note of a song
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Frequency in Hz, 0 is a rest
    pub frequency: u16,
    /// Duration in 1/64 of a whole note
    pub duration: u16,
}

impl Tone {
    pub const fn new(frequency: u16, duration: u16) -> Self {
        Self { frequency, duration }
    }
}

pub type Song = &'static [Tone];

/// Sound output of the board, e.g. a PWM driven piezo.
pub trait Buzzer {
    /// Start playing a song, replacing the current one
    fn play(&mut self, song: Song);
    /// Stop any sound
    fn stop(&mut self);
}

/// Songs played by [`AudioController`], a missing song is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Songs<'a> {
    pub startup: Option<Song>,
    pub goodbye: Option<Song>,
    /// `(default layer, song)` pairs
    pub default_layer: &'a [(u8, Song)],
}

pub struct AudioController<'a, B: Buzzer> {
    buzzer: B,
    songs: Songs<'a>,
    enabled: bool,
}

impl<'a, B: Buzzer> AudioController<'a, B> {
    /// Audio starts enabled, the keyboard sends the persisted setting at startup.
    pub fn new(buzzer: B, songs: Songs<'a>) -> Self {
        Self {
            buzzer,
            songs,
            enabled: true,
        }
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    fn play(&mut self, song: Option<Song>) {
        if !self.enabled {
            return;
        }
        if let Some(song) = song {
            self.buzzer.play(song);
        }
    }
}

impl<B: Buzzer> Controller for AudioController<'_, B> {
    fn process_event(&mut self, event: KeyboardStateEvent) {
        match event {
            KeyboardStateEvent::AudioEnabled(enabled) => {
                info!("Audio {}", if enabled { "on" } else { "off" });
                self.enabled = enabled;
                if !enabled {
                    self.buzzer.stop();
                }
            }
            KeyboardStateEvent::Startup => self.play(self.songs.startup),
            KeyboardStateEvent::Shutdown => self.play(self.songs.goodbye),
            KeyboardStateEvent::DefaultLayerChanged(layer) => {
                let song = self
                    .songs
                    .default_layer
                    .iter()
                    .find(|(l, _)| *l == layer)
                    .map(|(_, song)| *song);
                self.play(song);
            }
            _ => (),
        }
    }
}
