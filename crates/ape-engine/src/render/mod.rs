//! Rendering abstraction.
//!
//! [`Renderer`] is the seam a platform backend implements. Backends consume
//! value types only: [`Color`](crate::paint::Color) for clears/tints,
//! [`Sprite`] meshes, and `coords` geometry for viewports and clip areas.
//!
//! [`RecordingRenderer`] is the headless backend: it records every call as a
//! [`DrawCmd`] so frames can be inspected without a GPU.

mod recorder;
mod sprite;

pub use recorder::{DrawCmd, DrawItem, Frame, RecordingRenderer};
pub use sprite::{Sprite, SpriteError, Vertex};

use crate::paint::Color;

/// How drawn pixels combine with the existing target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Overwrite destination.
    #[default]
    None,
    /// `dst = src * a + dst * (1 - a)`.
    Alpha,
    /// `dst = src * a + dst`.
    Additive,
    /// `dst = src * dst`.
    Modulate,
    /// `dst = src * dst + dst * (1 - a)`.
    Multiply,
}

/// Operations every render backend provides.
pub trait Renderer {
    /// Fills the whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Finishes the current frame.
    fn present(&mut self);

    fn render_sprite(&mut self, sprite: &Sprite);
}
