//! Audio requests emitted by scenes and played by the browser audio bank.

use crate::constants::{BLIP_ATTACK_SEC, BLIP_RELEASE_SEC};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Saw,
}

/// The four persistent tone generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Hum,
    Pop,
    Pulse,
    Bloom,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Hum, Tone::Pop, Tone::Pulse, Tone::Bloom];

    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Tone::Hum => 0,
            Tone::Pop => 1,
            Tone::Pulse => 2,
            Tone::Bloom => 3,
        }
    }

    pub fn waveform(self) -> Waveform {
        match self {
            Tone::Hum => Waveform::Sine,
            Tone::Pop => Waveform::Triangle,
            Tone::Pulse => Waveform::Square,
            Tone::Bloom => Waveform::Saw,
        }
    }

    /// Frequency the oscillator idles at before any cue retunes it.
    pub fn initial_hz(self) -> f32 {
        match self {
            Tone::Hum => 60.0,
            Tone::Pop => 440.0,
            Tone::Pulse => 200.0,
            Tone::Bloom => 300.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AudioCue {
    /// Retune, ramp up to `amp` over `attack`, then back to silence over `release`.
    Blip {
        tone: Tone,
        freq_hz: f32,
        amp: f32,
        attack_sec: f64,
        release_sec: f64,
    },
    /// Sustained amplitude, ramped over `ramp_sec`.
    Level { tone: Tone, amp: f32, ramp_sec: f64 },
}

impl AudioCue {
    /// Blip with the default attack/release window.
    pub fn blip(tone: Tone, freq_hz: f32, amp: f32) -> Self {
        AudioCue::Blip {
            tone,
            freq_hz,
            amp,
            attack_sec: BLIP_ATTACK_SEC,
            release_sec: BLIP_RELEASE_SEC,
        }
    }

    pub fn blip_shaped(tone: Tone, freq_hz: f32, amp: f32, attack_sec: f64, release_sec: f64) -> Self {
        AudioCue::Blip {
            tone,
            freq_hz,
            amp,
            attack_sec,
            release_sec,
        }
    }

    pub fn tone(&self) -> Tone {
        match *self {
            AudioCue::Blip { tone, .. } | AudioCue::Level { tone, .. } => tone,
        }
    }
}
