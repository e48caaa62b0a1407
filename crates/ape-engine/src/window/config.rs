use crate::coords::{Point, Size};

/// Fullscreen state of a window.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Borderless window covering the desktop at its current resolution.
    FullscreenDesktop,
    /// Exclusive fullscreen (display mode change).
    Fullscreen,
}

/// Window configuration snapshot.
///
/// `minimum_size` / `maximum_size` of `None` leave that bound open.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub visible: bool,
    pub resizable: bool,
    pub bordered: bool,
    pub always_on_top: bool,
    pub mode: WindowMode,
    pub minimum_size: Option<Size>,
    pub maximum_size: Option<Size>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ape".to_string(),
            position: Point::ZERO,
            size: Size::new(1280, 720),
            visible: false,
            resizable: false,
            bordered: true,
            always_on_top: false,
            mode: WindowMode::Windowed,
            minimum_size: None,
            maximum_size: None,
        }
    }
}

impl WindowConfig {
    /// Clamps `size` per component into the configured min/max bounds.
    ///
    /// Inputs are treated as absolute extents; a window never has a negative size.
    pub fn clamp_size(&self, size: Size) -> Size {
        let mut s = size.absolute();
        if let Some(min) = self.minimum_size {
            s.width = s.width.max(min.width);
            s.height = s.height.max(min.height);
        }
        if let Some(max) = self.maximum_size {
            s.width = s.width.min(max.width);
            s.height = s.height.min(max.height);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_size_open_bounds_only_absolutes() {
        let cfg = WindowConfig::default();
        assert_eq!(cfg.clamp_size(Size::new(-300, 200)), Size::new(300, 200));
    }

    #[test]
    fn clamp_size_respects_bounds() {
        let cfg = WindowConfig {
            minimum_size: Some(Size::new(320, 240)),
            maximum_size: Some(Size::new(1920, 1080)),
            ..WindowConfig::default()
        };
        assert_eq!(cfg.clamp_size(Size::new(100, 5000)), Size::new(320, 1080));
        assert_eq!(cfg.clamp_size(Size::new(800, 600)), Size::new(800, 600));
    }
}
