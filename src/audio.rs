use crate::config::{KeyMapEntry, SynthParams, Waveform};
use crate::core::AudioSink;
use web_sys as web;

// Envelope floor/tail (seconds)
const MIN_FADE_IN: f64 = 0.003;
const RELEASE_TAIL: f64 = 0.01;
const DECAY_FLOOR: f32 = 0.001;
const SUB_GAIN_PER_MOOD: f32 = 0.2;

/// Owner of the page's single `AudioContext`, created on first use.
#[derive(Default)]
pub struct AudioHost {
    ctx: Option<web::AudioContext>,
}

impl AudioHost {
    pub fn context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return None;
                }
            }
        }
        self.ctx.as_ref()
    }

    /// Browsers start contexts suspended until a user gesture.
    pub fn resume(&mut self) {
        if let Some(ctx) = self.context() {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
    }
}

/// Plays each key as a one-shot oscillator straight to the destination.
#[derive(Default)]
pub struct WebAudioSink {
    host: AudioHost,
}

impl WebAudioSink {
    pub fn resume(&mut self) {
        self.host.resume();
    }
}

impl AudioSink for WebAudioSink {
    fn play(&mut self, entry: &KeyMapEntry, mood: f32) {
        if let Some(ctx) = self.host.context() {
            play_synth(ctx, entry.frequency, &entry.sound, mood);
        }
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Sawtooth => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

struct Envelope {
    t0: f64,
    decay_start: f64,
    end: f64,
    stop: f64,
}

// Oscillator -> gain -> destination with a linear attack and exponential decay.
fn one_shot(
    ctx: &web::AudioContext,
    waveform: Waveform,
    frequency: f32,
    detune_cents: Option<f32>,
    peak: f32,
    env: &Envelope,
) -> Result<(), wasm_bindgen::JsValue> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.set_type(oscillator_type(waveform));
    osc.frequency().set_value_at_time(frequency, env.t0)?;
    if let Some(cents) = detune_cents {
        osc.detune().set_value_at_time(cents, env.t0)?;
    }
    gain.gain().set_value_at_time(0.0, env.t0)?;
    gain.gain().linear_ramp_to_value_at_time(peak, env.decay_start)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(DECAY_FLOOR, env.end)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(env.t0)?;
    osc.stop_with_when(env.stop)?;
    Ok(())
}

/// Sound `params` at `frequency`. A positive mood adds a sine an octave below.
fn play_synth(ctx: &web::AudioContext, frequency: f32, params: &SynthParams, mood: f32) {
    let attack = (params.attack.max(0.0) as f64).max(MIN_FADE_IN);
    let t0 = ctx.current_time();
    let decay_start = t0 + attack;
    let end = decay_start + params.decay as f64;
    let env = Envelope {
        t0,
        decay_start,
        end,
        stop: end + RELEASE_TAIL,
    };
    if let Err(e) = one_shot(
        ctx,
        params.waveform,
        frequency,
        params.detune_cents,
        params.volume,
        &env,
    ) {
        log::error!("synth voice error: {:?}", e);
    }
    if mood > 0.0 {
        if let Err(e) = one_shot(
            ctx,
            Waveform::Sine,
            frequency / 2.0,
            None,
            mood * SUB_GAIN_PER_MOOD,
            &env,
        ) {
            log::error!("sub voice error: {:?}", e);
        }
    }
}
