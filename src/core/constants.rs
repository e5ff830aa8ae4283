use std::time::Duration;

// Shared animation/sequencing tuning constants used by the engine and sequencer.

// Shape collection
pub const MAX_SHAPES: usize = 250; // hard cap on live shapes
pub const TRIM_KEEP_RATIO: f32 = 0.7; // fraction of newest shapes kept when the cap is hit
pub const CULL_EPSILON: f32 = 0.01; // shapes at or below this life are removed

// Frame stepping
pub const FRAME_STEP_MS: f32 = 16.0; // nominal per-frame timestep
pub const ROTATION_RATE_PER_MS: f32 = 0.004; // radians per ms at multiplier 1

// Shape durations (ms)
pub const DURATION_BASE_MS: f32 = 800.0;
pub const DURATION_VARY_MS: f32 = 150.0;
pub const REDUCED_MOTION_MULTIPLIER: f32 = 0.25;

// Shape scale range
pub const MIN_SCALE: f32 = 0.15; // scale at birth
pub const MAX_SCALE_LOW: f32 = 1.8;
pub const MAX_SCALE_SPAN: f32 = 1.4;
pub const HUE_JITTER_DEG: f32 = 24.0; // full width of the per-shape hue jitter

// Spawn placement
pub const SPAWN_REGION_START: f32 = 0.2; // target lands in [0.2, 0.8] of each axis
pub const SPAWN_REGION_SPAN: f32 = 0.6;
pub const ENTRY_MARGIN_PX: f32 = 120.0; // entry points sit this far outside the canvas
pub const ENTRY_ZONES: u32 = 8; // 4 corners + 4 edge midpoints

// Ambient background
pub const BG_LERP: f32 = 0.045; // per-frame approach rate toward the target
pub const BG_IDLE_RESET: Duration = Duration::from_millis(4000);
pub const BG_TRIGGER_SATURATION: f32 = 40.0;
pub const BG_TRIGGER_LIGHTNESS: f32 = 18.0;

// Playback
pub const PASS_GAP: Duration = Duration::from_millis(400); // silence appended after the last event
