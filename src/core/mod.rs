pub mod board;
pub mod clock;
pub mod color;
pub mod constants;
pub mod draw;
pub mod easing;
pub mod engine;
pub mod error;
pub mod sequencer;
pub mod shape;
pub mod surface;
pub mod timers;

pub use board::*;
pub use clock::*;
pub use color::*;
pub use engine::*;
pub use error::*;
pub use sequencer::*;
pub use shape::*;
pub use surface::*;
pub use timers::*;
