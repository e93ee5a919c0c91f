//! Radial label wheel: slice geometry, label wrapping, a cairo-backed
//! renderer, hit-testing and a spin state machine.

pub mod backend;
pub mod config;
pub mod geometry;
pub mod hit;
pub mod macros;
pub mod mount;
pub mod render;
pub mod spin;
pub mod text;
pub mod wheel;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Color, ColorParseError, Label, WheelConfig};
pub use geometry::{Point, Rect};
pub use hit::Selection;
pub use mount::{Binding, SelectCallback, WheelMount};
pub use render::{Accents, DisplayList, DrawOp, SurfaceSize};
pub use spin::{SpinState, Spinner};
pub use text::{FontSpec, TextMeasure};
pub use wheel::Wheel;
