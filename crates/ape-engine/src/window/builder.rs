use crate::builder::ObjectBuilder;
use crate::coords::{Point, Size};

use super::{HeadlessWindow, Window, WindowConfig, WindowMode};

/// Fluent window builder.
///
/// Every setter is applied to the window held by the inner
/// [`ObjectBuilder`], so the window is created on the first call and handed
/// out by [`build`](WindowBuilder::build).
///
/// ```
/// use ape_engine::coords::Size;
/// use ape_engine::window::{HeadlessWindow, Window, WindowBuilder};
///
/// let window = WindowBuilder::<HeadlessWindow>::new()
///     .title("Game Window")
///     .size(Size::new(800, 500))
///     .centered()
///     .visible(true)
///     .build();
/// assert!(window.is_visible());
/// ```
#[derive(Debug)]
pub struct WindowBuilder<W: Window + Default> {
    inner: ObjectBuilder<W>,
}

impl<W: Window + Default> WindowBuilder<W> {
    pub fn new() -> Self {
        Self { inner: ObjectBuilder::new() }
    }

    pub fn title(&mut self, title: &str) -> &mut Self {
        self.inner.object_mut().set_title(title);
        self
    }

    pub fn position(&mut self, position: Point) -> &mut Self {
        self.inner.object_mut().set_position(position);
        self
    }

    /// Centers the window on its display using the size set so far.
    pub fn centered(&mut self) -> &mut Self {
        self.inner.object_mut().center();
        self
    }

    pub fn size(&mut self, size: Size) -> &mut Self {
        self.inner.object_mut().set_size(size);
        self
    }

    pub fn visible(&mut self, visible: bool) -> &mut Self {
        self.inner.object_mut().set_visible(visible);
        self
    }

    pub fn show(&mut self) -> &mut Self {
        self.visible(true)
    }

    pub fn hide(&mut self) -> &mut Self {
        self.visible(false)
    }

    /// Applies the backend-independent parts of `config`.
    pub fn apply(&mut self, config: &WindowConfig) -> &mut Self {
        self.title(&config.title)
            .size(config.size)
            .position(config.position)
            .visible(config.visible)
    }

    /// Backend-specific configuration.
    pub fn configure(&mut self, f: impl FnOnce(&mut W)) -> &mut Self {
        self.inner.with(f);
        self
    }

    /// Hands out the configured window and resets the builder.
    pub fn build(&mut self) -> W {
        let window = self.inner.build();
        log::debug!(
            "built window {} \"{}\" at {:?} size {:?}",
            window.id(),
            window.title(),
            window.position(),
            window.size()
        );
        window
    }
}

impl<W: Window + Default> Default for WindowBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowBuilder<HeadlessWindow> {
    pub fn bordered(&mut self, bordered: bool) -> &mut Self {
        self.configure(|w| w.set_bordered(bordered))
    }

    pub fn resizable(&mut self, resizable: bool) -> &mut Self {
        self.configure(|w| w.set_resizable(resizable))
    }

    pub fn minimum_size(&mut self, size: Size) -> &mut Self {
        self.configure(|w| w.set_minimum_size(size))
    }

    pub fn maximum_size(&mut self, size: Size) -> &mut Self {
        self.configure(|w| w.set_maximum_size(size))
    }

    pub fn mode(&mut self, mode: WindowMode) -> &mut Self {
        self.configure(|w| w.set_mode(mode))
    }

    pub fn always_on_top(&mut self, on_top: bool) -> &mut Self {
        self.configure(|w| w.set_always_on_top(on_top))
    }

    pub fn display(&mut self, display: Size) -> &mut Self {
        self.configure(|w| w.set_display(display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_configured_window() {
        let w = WindowBuilder::<HeadlessWindow>::new()
            .title("Game Window")
            .size(Size::new(800, 500))
            .centered()
            .bordered(true)
            .resizable(true)
            .visible(true)
            .build();

        assert_eq!(w.title(), "Game Window");
        assert_eq!(w.size(), Size::new(800, 500));
        assert_eq!(w.position(), Point::new(560, 290));
        assert!(w.is_visible());
        assert!(w.is_bordered());
        assert!(w.is_resizable());
    }

    #[test]
    fn builder_starts_fresh_after_build() {
        let mut b: WindowBuilder<HeadlessWindow> = WindowBuilder::new();
        let first = b.title("first").build();
        let second = b.build();
        assert_ne!(first.id(), second.id());
        assert_eq!(second.title(), WindowConfig::default().title);
    }

    #[test]
    fn apply_copies_config() {
        let cfg = WindowConfig {
            title: "cfg".to_string(),
            position: Point::new(5, 6),
            size: Size::new(640, 480),
            visible: true,
            ..WindowConfig::default()
        };
        let w = WindowBuilder::<HeadlessWindow>::new().apply(&cfg).build();
        assert_eq!(w.title(), "cfg");
        assert_eq!(w.bounds().position(), Point::new(5, 6));
        assert_eq!(w.size(), Size::new(640, 480));
        assert!(w.is_visible());
    }

    #[test]
    fn headless_extras() {
        let w = WindowBuilder::<HeadlessWindow>::new()
            .minimum_size(Size::new(100, 100))
            .size(Size::new(10, 10))
            .mode(WindowMode::Fullscreen)
            .always_on_top(true)
            .build();
        assert_eq!(w.size(), Size::new(100, 100));
        assert_eq!(w.mode(), WindowMode::Fullscreen);
        assert!(w.is_always_on_top());
    }
}
