use crate::config::keymap::KEY_COUNT;
use crate::core::VisualPreset;

/// Identifier for one of the built-in sound kits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KitId {
    Bleeps,
    Drums,
    Pads,
}

impl KitId {
    pub const ALL: [KitId; 3] = [KitId::Bleeps, KitId::Drums, KitId::Pads];

    pub fn as_str(self) -> &'static str {
        match self {
            KitId::Bleeps => "bleeps",
            KitId::Drums => "drums",
            KitId::Pads => "pads",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == id)
    }
}

/// Oscillator shape used by the synth voice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One-shot synth envelope for a key. Times are in seconds, volume 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthParams {
    pub waveform: Waveform,
    pub decay: f32,
    pub volume: f32,
    pub attack: f32,
    pub detune_cents: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyDef {
    pub sound: SynthParams,
    pub visual: VisualPreset,
}

#[derive(Clone, Debug)]
pub struct Kit {
    pub id: KitId,
    pub name: &'static str,
    pub description: &'static str,
    /// One definition per key, in key order.
    pub keys: Vec<KeyDef>,
}

// Twelve-slot cycle so neighbouring keys get different shapes; circle repeats.
const VISUAL_CYCLE: [VisualPreset; 12] = [
    VisualPreset::Circle,
    VisualPreset::Polygon,
    VisualPreset::Burst,
    VisualPreset::Spiral,
    VisualPreset::Blob,
    VisualPreset::Ring,
    VisualPreset::Particles,
    VisualPreset::Squircle,
    VisualPreset::RoundedRect,
    VisualPreset::Star,
    VisualPreset::PulseRing,
    VisualPreset::Circle,
];

#[inline]
pub fn preset_for_key(key_index: usize) -> VisualPreset {
    VISUAL_CYCLE[key_index % VISUAL_CYCLE.len()]
}

fn bleeps_sound(i: usize) -> SynthParams {
    const WAVES: [Waveform; 2] = [Waveform::Sine, Waveform::Triangle];
    SynthParams {
        waveform: WAVES[i % WAVES.len()],
        decay: 0.2 + (i % 7) as f32 * 0.045,
        volume: (0.3 + (i % 4) as f32 * 0.025).min(0.4),
        attack: 0.01,
        detune_cents: (i % 3 == 0).then_some(5.0),
    }
}

fn drums_sound(i: usize) -> SynthParams {
    const WAVES: [Waveform; 2] = [Waveform::Square, Waveform::Sawtooth];
    SynthParams {
        waveform: WAVES[i % WAVES.len()],
        decay: (0.04 + (i % 5) as f32 * 0.025).min(0.14),
        volume: (0.35 + (i % 3) as f32 * 0.035).min(0.45),
        attack: 0.005,
        detune_cents: None,
    }
}

fn pads_sound(i: usize) -> SynthParams {
    SynthParams {
        waveform: if i % 10 < 7 {
            Waveform::Sine
        } else {
            Waveform::Triangle
        },
        decay: (0.5 + (i % 6) as f32 * 0.1).min(1.0),
        volume: (0.22 + (i % 4) as f32 * 0.02).min(0.28),
        attack: 0.06,
        detune_cents: None,
    }
}

pub fn build_kit(id: KitId) -> Kit {
    let sound: fn(usize) -> SynthParams = match id {
        KitId::Bleeps => bleeps_sound,
        KitId::Drums => drums_sound,
        KitId::Pads => pads_sound,
    };
    let keys = (0..KEY_COUNT)
        .map(|i| KeyDef {
            sound: sound(i),
            visual: preset_for_key(i),
        })
        .collect();
    let (name, description) = match id {
        KitId::Bleeps => ("Bleeps", "Soft beeps and blips."),
        KitId::Drums => ("Drums", "Punchy, short beats."),
        KitId::Pads => ("Pads", "Long, dreamy tones."),
    };
    Kit {
        id,
        name,
        description,
        keys,
    }
}
