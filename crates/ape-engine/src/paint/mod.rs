//! Color model shared between the window/render layers and callers.
//!
//! Scope:
//! - 8-bit straight-alpha RGBA [`Color`] with interpolation helpers
//! - the read-only [`known`] named-color table
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod known;

pub use color::{Color, ParseColorError};
