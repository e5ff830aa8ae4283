//! Static musical configuration: scales, sound kits, the key map built from
//! them, and preset tunes.

pub mod keymap;
pub mod kits;
pub mod scales;
pub mod tunes;

pub use keymap::*;
pub use kits::*;
pub use scales::*;
pub use tunes::*;
