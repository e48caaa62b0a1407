//! Window abstraction.
//!
//! [`Window`] is the seam a platform backend implements; [`HeadlessWindow`]
//! is an in-memory implementation used by tests, tools and the demo.
//! Windows are created through [`WindowBuilder`].

mod builder;
mod config;
mod headless;

pub use builder::WindowBuilder;
pub use config::{WindowConfig, WindowMode};
pub use headless::HeadlessWindow;

use crate::coords::{Point, Rectangle, Size};

/// Operations every window backend provides.
pub trait Window {
    /// Process-unique window id.
    fn id(&self) -> u32;

    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    fn set_position(&mut self, position: Point);
    fn position(&self) -> Point;

    fn set_size(&mut self, size: Size);
    fn size(&self) -> Size;

    fn set_title(&mut self, title: &str);
    fn title(&self) -> &str;

    /// Moves the window so it is centered on its display.
    fn center(&mut self);

    fn set_visible(&mut self, visible: bool) {
        if visible { self.show() } else { self.hide() }
    }

    /// Outer bounds in screen coordinates.
    fn bounds(&self) -> Rectangle {
        Rectangle::from_position_size(self.position(), self.size())
    }
}
