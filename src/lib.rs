//! Keyboard soundboard: each letter key sounds a synthesized note and spawns
//! an animated shape; a sequencer records and replays performances.
//!
//! `config` and `core` are platform independent. The browser front-end
//! (Canvas2D, WebAudio, DOM wiring) only builds for wasm32.

pub mod config;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod web_main;

#[cfg(target_arch = "wasm32")]
pub(crate) type Board =
    crate::core::Soundboard<canvas::Canvas2dSurface, crate::core::HostClock, audio::WebAudioSink>;
