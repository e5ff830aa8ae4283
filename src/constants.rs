//! Host-page tuning and element ids for the browser front-end.
//! Engine tuning lives in `core::constants`.

// Backing store never exceeds 2x CSS pixels
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const RECORD_BUTTON_ID: &str = "record-btn";
pub const PLAY_BUTTON_ID: &str = "play-btn";
pub const STOP_BUTTON_ID: &str = "stop-btn";
pub const LOOP_BUTTON_ID: &str = "loop-btn";
pub const SCALE_SELECT_ID: &str = "scale-select";
pub const KIT_SELECT_ID: &str = "kit-select";
// Tune buttons are "tune-<id>"
pub const TUNE_BUTTON_PREFIX: &str = "tune-";

// Attribute carried by touch-grid cells
pub const KEY_ATTRIBUTE: &str = "data-key";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
