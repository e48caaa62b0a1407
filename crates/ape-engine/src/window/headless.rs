use std::sync::atomic::{AtomicU32, Ordering};

use crate::coords::{Point, Rectangle, RectangleAlignment, Size};

use super::{Window, WindowConfig, WindowMode};

static NEXT_WINDOW_ID: AtomicU32 = AtomicU32::new(1);

/// Window that only exists in memory.
///
/// Tracks the same state a platform window would (geometry, title,
/// visibility, decoration and fullscreen flags) against a virtual display.
#[derive(Debug)]
pub struct HeadlessWindow {
    id: u32,
    config: WindowConfig,
    display: Size,
    raise_count: u32,
}

impl HeadlessWindow {
    /// Virtual display used when none is given.
    pub const DEFAULT_DISPLAY: Size = Size::new(1920, 1080);

    pub fn new() -> Self {
        Self::from_config(WindowConfig::default())
    }

    pub fn from_config(config: WindowConfig) -> Self {
        let id = NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed);
        let size = config.clamp_size(config.size);
        log::debug!("headless window {id} created: \"{}\" {}x{}", config.title, size.width, size.height);
        Self {
            id,
            config: WindowConfig { size, ..config },
            display: Self::DEFAULT_DISPLAY,
            raise_count: 0,
        }
    }

    /// Current configuration snapshot.
    #[inline]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    #[inline]
    pub fn display(&self) -> Size {
        self.display
    }

    pub fn set_display(&mut self, display: Size) {
        self.display = display.absolute();
    }

    /// Width / height of the client area.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.config.size.ratio()
    }

    pub fn minimum_size(&self) -> Option<Size> {
        self.config.minimum_size
    }

    /// Sets the lower size bound and re-clamps the current size.
    pub fn set_minimum_size(&mut self, size: Size) {
        self.config.minimum_size = Some(size.absolute());
        self.config.size = self.config.clamp_size(self.config.size);
    }

    pub fn maximum_size(&self) -> Option<Size> {
        self.config.maximum_size
    }

    /// Sets the upper size bound and re-clamps the current size.
    pub fn set_maximum_size(&mut self, size: Size) {
        self.config.maximum_size = Some(size.absolute());
        self.config.size = self.config.clamp_size(self.config.size);
    }

    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.config.resizable
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.config.resizable = resizable;
    }

    #[inline]
    pub fn is_bordered(&self) -> bool {
        self.config.bordered
    }

    pub fn set_bordered(&mut self, bordered: bool) {
        self.config.bordered = bordered;
    }

    #[inline]
    pub fn is_always_on_top(&self) -> bool {
        self.config.always_on_top
    }

    pub fn set_always_on_top(&mut self, on_top: bool) {
        self.config.always_on_top = on_top;
    }

    #[inline]
    pub fn mode(&self) -> WindowMode {
        self.config.mode
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.config.mode != WindowMode::Windowed
    }

    pub fn set_mode(&mut self, mode: WindowMode) {
        self.config.mode = mode;
    }

    /// Area the window occupies on the display, taking fullscreen into account.
    pub fn screen_area(&self) -> Rectangle {
        match self.config.mode {
            WindowMode::Windowed => self.bounds(),
            WindowMode::FullscreenDesktop | WindowMode::Fullscreen => {
                Rectangle::from_position_size(Point::ZERO, self.display)
            }
        }
    }

    /// Requests input focus / stacking order.
    pub fn raise(&mut self) {
        self.raise_count += 1;
    }

    #[inline]
    pub fn raise_count(&self) -> u32 {
        self.raise_count
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Window for HeadlessWindow {
    #[inline]
    fn id(&self) -> u32 {
        self.id
    }

    fn show(&mut self) {
        self.config.visible = true;
    }

    fn hide(&mut self) {
        self.config.visible = false;
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.config.visible
    }

    fn set_position(&mut self, position: Point) {
        self.config.position = position;
    }

    #[inline]
    fn position(&self) -> Point {
        self.config.position
    }

    fn set_size(&mut self, size: Size) {
        self.config.size = self.config.clamp_size(size);
    }

    #[inline]
    fn size(&self) -> Size {
        self.config.size
    }

    fn set_title(&mut self, title: &str) {
        self.config.title = title.to_string();
    }

    #[inline]
    fn title(&self) -> &str {
        &self.config.title
    }

    fn center(&mut self) {
        let display = Rectangle::from_position_size(Point::ZERO, self.display);
        let window = Rectangle::from_position_size(Point::ZERO, self.config.size);
        self.config.position = display
            .local_to_global(window, RectangleAlignment::MiddleCenter)
            .position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = HeadlessWindow::new();
        let b = HeadlessWindow::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn visibility_toggles() {
        let mut w = HeadlessWindow::new();
        assert!(!w.is_visible());
        w.set_visible(true);
        assert!(w.is_visible());
        w.hide();
        assert!(!w.is_visible());
    }

    #[test]
    fn size_respects_bounds() {
        let mut w = HeadlessWindow::new();
        w.set_minimum_size(Size::new(400, 300));
        w.set_maximum_size(Size::new(1000, 800));
        w.set_size(Size::new(200, 2000));
        assert_eq!(w.size(), Size::new(400, 800));
    }

    #[test]
    fn shrinking_maximum_shrinks_current_size() {
        let mut w = HeadlessWindow::from_config(WindowConfig {
            size: Size::new(1280, 720),
            ..WindowConfig::default()
        });
        w.set_maximum_size(Size::new(640, 480));
        assert_eq!(w.size(), Size::new(640, 480));
    }

    #[test]
    fn center_uses_display() {
        let mut w = HeadlessWindow::from_config(WindowConfig {
            size: Size::new(800, 500),
            ..WindowConfig::default()
        });
        w.center();
        assert_eq!(w.position(), Point::new(560, 290));

        w.set_display(Size::new(801, 501));
        w.center();
        assert_eq!(w.position(), Point::new(0, 0));
    }

    #[test]
    fn bounds_and_screen_area() {
        let mut w = HeadlessWindow::new();
        w.set_position(Point::new(10, 20));
        w.set_size(Size::new(300, 200));
        assert_eq!(w.bounds(), Rectangle::new(10, 20, 300, 200));
        assert_eq!(w.screen_area(), w.bounds());

        w.set_mode(WindowMode::FullscreenDesktop);
        assert!(w.is_fullscreen());
        assert_eq!(w.screen_area(), Rectangle::new(0, 0, 1920, 1080));
    }

    #[test]
    fn ratio_follows_size() {
        let mut w = HeadlessWindow::new();
        w.set_size(Size::new(800, 400));
        assert_eq!(w.ratio(), 2.0);
    }
}
