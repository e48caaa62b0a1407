//! APE engine crate.
//!
//! Geometry and color value types plus the window/render seams built on
//! them. Platform backends implement [`window::Window`] and
//! [`render::Renderer`]; headless implementations live alongside.

pub mod builder;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
