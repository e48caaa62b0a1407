use crate::coords::{Point, Rectangle, RectangleAlignment, Size};
use crate::paint::Color;

use super::{BlendMode, Renderer, Sprite};

/// Recorded draw command, in global (output) pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Point {
        at: Point,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    /// `radius == 0` is a plain rectangle.
    Rectangle {
        area: Rectangle,
        radius: i32,
        filled: bool,
        color: Color,
    },
    Ellipse {
        center: Point,
        radius_x: i32,
        radius_y: i32,
        filled: bool,
        color: Color,
    },
    /// Sprite vertices are viewport-local; `offset` is the viewport origin.
    Sprite {
        sprite: Sprite,
        offset: Point,
    },
}

/// Draw command plus the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    pub blend: BlendMode,
    /// Effective clip (clip area intersected with the viewport).
    pub clip: Rectangle,
}

/// Everything recorded between two `present()` calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub items: Vec<DrawItem>,
    /// Commands dropped because they fell entirely outside the clip.
    pub culled: usize,
}

/// Headless [`Renderer`] that records draw calls instead of rasterizing.
///
/// Coordinates passed to draw calls are relative to the current viewport, as
/// with a platform renderer. The clip area is given in viewport coordinates
/// too, and is stored intersected with the viewport; commands whose bounds
/// miss it are culled.
#[derive(Debug)]
pub struct RecordingRenderer {
    output_size: Size,
    draw_color: Color,
    blend_mode: BlendMode,
    viewport: Rectangle,
    clip: Option<Rectangle>,

    pending: Frame,
    frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn new(output_size: Size) -> Self {
        let output_size = output_size.absolute();
        Self {
            output_size,
            draw_color: Color::WHITE,
            blend_mode: BlendMode::None,
            viewport: Rectangle::from_position_size(Point::ZERO, output_size),
            clip: None,
            pending: Frame::default(),
            frames: Vec::new(),
        }
    }

    #[inline]
    pub fn output_size(&self) -> Size {
        self.output_size
    }

    #[inline]
    fn output_bounds(&self) -> Rectangle {
        Rectangle::from_position_size(Point::ZERO, self.output_size)
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    #[inline]
    pub fn viewport(&self) -> Rectangle {
        self.viewport
    }

    /// Restricts drawing to `area` (output coordinates, cropped to the output).
    ///
    /// Resets the clip area, which is relative to the previous viewport.
    /// An empty `area` is ignored.
    pub fn set_viewport(&mut self, area: Rectangle) {
        if area.is_empty_area() {
            log::debug!("ignoring empty viewport {area:?}");
            return;
        }
        self.viewport = Rectangle::intersect(area, self.output_bounds());
        self.clip = None;
    }

    pub fn reset_viewport(&mut self) {
        self.set_viewport(self.output_bounds());
    }

    /// Sets the clip area, given relative to the viewport. An empty `area`
    /// is ignored.
    pub fn set_clip_area(&mut self, area: Rectangle) {
        if area.is_empty_area() {
            log::debug!("ignoring empty clip area {area:?}");
            return;
        }
        let global = self.viewport.local_to_global(area, RectangleAlignment::TopLeft);
        self.clip = Some(Rectangle::intersect(global, self.viewport));
    }

    /// Current clip area in output coordinates.
    #[inline]
    pub fn clip_area(&self) -> Option<Rectangle> {
        self.clip
    }

    #[inline]
    pub fn is_clip_enabled(&self) -> bool {
        self.clip.is_some()
    }

    pub fn disable_clip(&mut self) {
        self.clip = None;
    }

    /// Region draw commands may touch.
    #[inline]
    pub fn effective_clip(&self) -> Rectangle {
        self.clip.unwrap_or(self.viewport)
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// Items recorded since the last `present()`.
    #[inline]
    pub fn pending(&self) -> &[DrawItem] {
        &self.pending.items
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Drains presented frames, keeping the frame counter.
    pub fn take_frames(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }

    // ── primitives ────────────────────────────────────────────────────────

    pub fn draw_point(&mut self, at: Point) {
        let at = self.viewport.local_to_global_point(at);
        let color = self.draw_color;
        self.record(DrawCmd::Point { at, color }, Rectangle::new(at.x, at.y, 1, 1));
    }

    pub fn draw_line(&mut self, from: Point, to: Point) {
        let from = self.viewport.local_to_global_point(from);
        let to = self.viewport.local_to_global_point(to);
        let color = self.draw_color;
        self.record(DrawCmd::Line { from, to, color }, Rectangle::from_two_points(from, to));
    }

    pub fn draw_rectangle(&mut self, area: Rectangle) {
        self.rectangle(area, 0, false);
    }

    pub fn fill_rectangle(&mut self, area: Rectangle) {
        self.rectangle(area, 0, true);
    }

    pub fn draw_rounded_rectangle(&mut self, area: Rectangle, radius: i32) {
        self.rectangle(area, radius, false);
    }

    pub fn fill_rounded_rectangle(&mut self, area: Rectangle, radius: i32) {
        self.rectangle(area, radius, true);
    }

    pub fn draw_circle(&mut self, center: Point, radius: i32) {
        self.ellipse(center, radius, radius, false);
    }

    pub fn fill_circle(&mut self, center: Point, radius: i32) {
        self.ellipse(center, radius, radius, true);
    }

    pub fn draw_ellipse(&mut self, center: Point, radius_x: i32, radius_y: i32) {
        self.ellipse(center, radius_x, radius_y, false);
    }

    pub fn fill_ellipse(&mut self, center: Point, radius_x: i32, radius_y: i32) {
        self.ellipse(center, radius_x, radius_y, true);
    }

    fn rectangle(&mut self, area: Rectangle, radius: i32, filled: bool) {
        if area.is_empty_area() {
            return;
        }
        let area = self.viewport.local_to_global(area, RectangleAlignment::TopLeft);
        // Radius cannot exceed half of the shorter side.
        let radius = radius.clamp(0, area.width.min(area.height) / 2);
        let color = self.draw_color;
        self.record(DrawCmd::Rectangle { area, radius, filled, color }, area);
    }

    fn ellipse(&mut self, center: Point, radius_x: i32, radius_y: i32, filled: bool) {
        if radius_x == 0 || radius_y == 0 {
            return;
        }
        let center = self.viewport.local_to_global_point(center);
        let (radius_x, radius_y) = (radius_x.abs(), radius_y.abs());
        let bounds = Rectangle::new(
            center.x - radius_x,
            center.y - radius_y,
            2 * radius_x + 1,
            2 * radius_y + 1,
        );
        let color = self.draw_color;
        self.record(DrawCmd::Ellipse { center, radius_x, radius_y, filled, color }, bounds);
    }

    fn record(&mut self, cmd: DrawCmd, bounds: Rectangle) {
        let clip = self.effective_clip();
        if Rectangle::intersect(bounds, clip).is_empty_area() {
            self.pending.culled += 1;
            log::trace!("culled {cmd:?} outside {clip:?}");
            return;
        }
        self.pending.items.push(DrawItem { cmd, blend: self.blend_mode, clip });
    }
}

/// Pixel bounds of a sprite's vertices, shifted by `offset` and cropped to
/// `limit`.
///
/// Computed in `f64` so far-away vertices cannot overflow pixel math.
/// `None` for a sprite without vertices, [`Rectangle::EMPTY`] when the
/// sprite misses `limit` entirely.
fn sprite_bounds(sprite: &Sprite, offset: Point, limit: Rectangle) -> Option<Rectangle> {
    let mut vertices = sprite.vertices().iter();
    let first = vertices.next()?.position;
    let (mut min, mut max) = (first, first);
    for v in vertices {
        min.x = min.x.min(v.position.x);
        min.y = min.y.min(v.position.y);
        max.x = max.x.max(v.position.x);
        max.y = max.y.max(v.position.y);
    }

    if limit.is_empty_area() {
        return Some(Rectangle::EMPTY);
    }
    let (dx, dy) = (offset.x as f64, offset.y as f64);
    let left = (min.x + dx).floor().max(limit.left_side() as f64);
    let top = (min.y + dy).floor().max(limit.top_side() as f64);
    let right = (max.x + dx).ceil().min(limit.right_side() as f64);
    let bottom = (max.y + dy).ceil().min(limit.bottom_side() as f64);
    if left > right || top > bottom {
        return Some(Rectangle::EMPTY);
    }

    // Within `limit`, so the casts and the extent both fit in i32.
    Some(Rectangle::from_two_points(
        Point::new(left as i32, top as i32),
        Point::new(right as i32, bottom as i32),
    ))
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        let clip = self.effective_clip();
        self.pending.items.push(DrawItem { cmd: DrawCmd::Clear(color), blend: BlendMode::None, clip });
    }

    fn present(&mut self) {
        let index = self.pending.index;
        let frame = std::mem::replace(&mut self.pending, Frame { index: index + 1, ..Frame::default() });
        log::trace!(
            "frame {} presented: {} items, {} culled",
            frame.index,
            frame.items.len(),
            frame.culled
        );
        self.frames.push(frame);
    }

    fn render_sprite(&mut self, sprite: &Sprite) {
        if let Err(e) = sprite.validate() {
            log::warn!("skipping invalid sprite: {e}");
            return;
        }
        if sprite.is_empty() {
            return;
        }
        let offset = self.viewport.top_left();
        let Some(bounds) = sprite_bounds(sprite, offset, self.effective_clip()) else {
            return;
        };
        self.record(DrawCmd::Sprite { sprite: sprite.clone(), offset }, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vector2;
    use crate::render::Vertex;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rectangle { Rectangle::new(x, y, w, h) }

    fn renderer() -> RecordingRenderer {
        RecordingRenderer::new(Size::new(100, 80))
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn defaults_cover_output() {
        let rr = renderer();
        assert_eq!(rr.viewport(), r(0, 0, 100, 80));
        assert!(!rr.is_clip_enabled());
        assert_eq!(rr.effective_clip(), rr.viewport());
        assert_eq!(rr.blend_mode(), BlendMode::None);
    }

    #[test]
    fn viewport_is_cropped_to_output() {
        let mut rr = renderer();
        rr.set_viewport(r(90, 70, 50, 50));
        assert_eq!(rr.viewport(), r(90, 70, 10, 10));
        rr.reset_viewport();
        assert_eq!(rr.viewport(), r(0, 0, 100, 80));
    }

    #[test]
    fn clip_is_viewport_relative_and_cropped() {
        let mut rr = renderer();
        rr.set_viewport(r(10, 10, 50, 50));
        rr.set_clip_area(r(40, 40, 30, 30));
        assert_eq!(rr.clip_area(), Some(r(50, 50, 10, 10)));

        rr.disable_clip();
        assert_eq!(rr.effective_clip(), r(10, 10, 50, 50));
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn primitives_translate_by_viewport() {
        let mut rr = renderer();
        rr.set_viewport(r(20, 30, 40, 40));
        rr.set_draw_color(Color::BLACK);
        rr.set_blend_mode(BlendMode::Alpha);
        rr.draw_point(Point::new(1, 2));
        rr.fill_rectangle(r(5, 5, -3, 2));

        let items = rr.pending();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].cmd, DrawCmd::Point { at: Point::new(21, 32), color: Color::BLACK });
        assert_eq!(
            items[1].cmd,
            DrawCmd::Rectangle { area: r(23, 35, 3, 2), radius: 0, filled: true, color: Color::BLACK }
        );
        assert!(items.iter().all(|i| i.blend == BlendMode::Alpha));
    }

    #[test]
    fn commands_outside_clip_are_culled() {
        let mut rr = renderer();
        rr.set_clip_area(r(0, 0, 10, 10));
        rr.draw_line(Point::new(20, 20), Point::new(30, 30));
        rr.draw_circle(Point::new(12, 12), 3);
        rr.draw_line(Point::new(9, 9), Point::new(30, 30));
        rr.present();

        let frame = rr.last_frame().unwrap();
        assert_eq!(frame.culled, 1);
        assert_eq!(frame.items.len(), 2);
    }

    #[test]
    fn rounded_radius_is_clamped() {
        let mut rr = renderer();
        rr.draw_rounded_rectangle(r(0, 0, 10, 4), 50);
        match &rr.pending()[0].cmd {
            DrawCmd::Rectangle { radius, filled, .. } => {
                assert_eq!(*radius, 2);
                assert!(!filled);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_rectangles_record_nothing() {
        let mut rr = renderer();
        rr.fill_rectangle(r(5, 5, 0, 10));
        assert!(rr.pending().is_empty());
    }

    #[test]
    fn present_closes_frames() {
        let mut rr = renderer();
        rr.clear(Color::BLACK);
        rr.present();
        rr.clear(Color::WHITE);
        rr.fill_circle(Point::new(50, 40), 5);
        rr.present();

        let frames = rr.take_frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].index, 0);
        assert_eq!(frames[1].index, 1);
        assert_eq!(frames[1].items.len(), 2);
        assert!(rr.frames().is_empty());
        assert!(rr.pending().is_empty());
    }

    // ── sprites ───────────────────────────────────────────────────────────

    #[test]
    fn valid_sprite_is_recorded_with_offset() {
        let mut rr = renderer();
        rr.set_viewport(r(10, 10, 80, 60));
        let sprite = Sprite::quad(r(0, 0, 4, 4), Color::WHITE);
        rr.render_sprite(&sprite);

        assert_eq!(
            rr.pending()[0].cmd,
            DrawCmd::Sprite { sprite, offset: Point::new(10, 10) }
        );
    }

    #[test]
    fn invalid_sprite_is_skipped() {
        let mut rr = renderer();
        let mut sprite = Sprite::new();
        sprite.add_vertex(Vertex::colored(Vector2::new(1.0, 1.0), Color::WHITE));
        sprite.add_triangle(0, 1, 2);
        rr.render_sprite(&sprite);
        assert!(rr.pending().is_empty());
    }

    #[test]
    fn offscreen_sprite_is_culled() {
        let mut rr = renderer();
        rr.render_sprite(&Sprite::quad(r(500, 500, 4, 4), Color::WHITE));
        rr.present();
        assert_eq!(rr.last_frame().unwrap().culled, 1);
    }

    #[test]
    fn sprite_bounds_round_outward() {
        let mut s = Sprite::new();
        s.add_vertex(Vertex::colored(Vector2::new(0.5, -1.5), Color::WHITE));
        s.add_vertex(Vertex::colored(Vector2::new(3.2, 2.0), Color::WHITE));
        assert_eq!(sprite_bounds(&s, Point::ZERO, r(-10, -10, 30, 30)), Some(r(0, -2, 5, 5)));
        assert_eq!(sprite_bounds(&s, Point::new(1, 1), r(0, 0, 100, 80)), Some(r(1, 0, 5, 4)));
        assert_eq!(sprite_bounds(&s, Point::new(200, 0), r(0, 0, 100, 80)), Some(Rectangle::EMPTY));
        assert_eq!(sprite_bounds(&Sprite::new(), Point::ZERO, r(0, 0, 100, 80)), None);
    }

    #[test]
    fn far_away_vertices_are_cropped() {
        let mut s = Sprite::new();
        s.add_vertex(Vertex::colored(Vector2::new(-1e12, 0.0), Color::WHITE));
        s.add_vertex(Vertex::colored(Vector2::new(1e12, 0.0), Color::WHITE));
        s.add_vertex(Vertex::colored(Vector2::new(0.0, 10.0), Color::WHITE));
        s.add_triangle(0, 1, 2);
        assert!(s.validate().is_ok());

        let mut rr = renderer();
        rr.set_viewport(r(10, 10, 80, 60));
        rr.render_sprite(&s);
        assert_eq!(rr.pending().len(), 1);
        assert_eq!(rr.pending()[0].clip, r(10, 10, 80, 60));

        rr.render_sprite(&Sprite::quad(r(0, 1_000_000_000, 4, 4), Color::WHITE));
        rr.present();
        assert_eq!(rr.last_frame().unwrap().culled, 1);
    }

    // ── empty input ───────────────────────────────────────────────────────

    #[test]
    fn empty_viewport_is_ignored() {
        let mut rr = renderer();
        rr.set_viewport(r(10, 10, 50, 50));
        rr.set_clip_area(r(0, 0, 20, 20));
        rr.set_viewport(r(10, 10, 0, 0));
        assert_eq!(rr.viewport(), r(10, 10, 50, 50));
        assert_eq!(rr.clip_area(), Some(r(10, 10, 20, 20)));

        rr.disable_clip();
        rr.fill_rectangle(r(0, 0, 5, 5));
        assert_eq!(rr.pending().len(), 1);
    }

    #[test]
    fn empty_clip_area_is_ignored() {
        let mut rr = renderer();
        rr.set_clip_area(r(10, 10, 0, 5));
        assert!(!rr.is_clip_enabled());

        rr.set_clip_area(r(0, 0, 30, 30));
        rr.set_clip_area(r(5, 5, 7, 0));
        assert_eq!(rr.clip_area(), Some(r(0, 0, 30, 30)));

        rr.fill_rectangle(r(0, 0, 50, 50));
        assert_eq!(rr.pending().len(), 1);
    }

    #[test]
    fn zero_radius_ellipses_record_nothing() {
        let mut rr = renderer();
        let p = Point::new(20, 20);
        rr.draw_circle(p, 0);
        rr.fill_circle(p, 0);
        rr.draw_ellipse(p, 0, 4);
        rr.fill_ellipse(p, 3, 0);
        assert!(rr.pending().is_empty());

        rr.fill_ellipse(p, -3, 2);
        assert_eq!(rr.pending().len(), 1);
    }
}
