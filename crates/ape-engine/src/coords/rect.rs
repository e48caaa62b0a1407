use super::{Point, Size};

/// Anchor used to place one rectangle inside another.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RectangleAlignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Where along one axis an aligned item sits.
#[derive(Copy, Clone)]
enum Span {
    Start,
    Center,
    End,
}

impl Span {
    #[inline]
    fn offset(self, free: i32) -> i32 {
        match self {
            Span::Start => 0,
            Span::Center => free / 2,
            Span::End => free,
        }
    }
}

impl RectangleAlignment {
    /// (horizontal, vertical) placement.
    fn spans(self) -> (Span, Span) {
        use RectangleAlignment::*;
        match self {
            TopLeft => (Span::Start, Span::Start),
            TopCenter => (Span::Center, Span::Start),
            TopRight => (Span::End, Span::Start),
            MiddleLeft => (Span::Start, Span::Center),
            MiddleCenter => (Span::Center, Span::Center),
            MiddleRight => (Span::End, Span::Center),
            BottomLeft => (Span::Start, Span::End),
            BottomCenter => (Span::Center, Span::End),
            BottomRight => (Span::End, Span::End),
        }
    }
}

/// Axis-aligned inclusive pixel rectangle: an anchor corner plus a signed extent.
///
/// A negative width (height) extends left (up) from `x` (`y`), so
/// `Rectangle::new(0, 0, -5, -5)` covers the same pixels as
/// `Rectangle::new(-4, -4, 5, 5)`. The `*_side` accessors always return the
/// normalized bounds; both the near and the far side belong to the region.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const EMPTY: Rectangle = Rectangle::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_position_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Inclusive bounding rectangle of two corner pixels.
    #[inline]
    pub fn from_two_points(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (b.x - a.x).abs() + 1,
            (b.y - a.y).abs() + 1,
        )
    }

    #[inline]
    pub const fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn set_size(&mut self, s: Size) {
        self.width = s.width;
        self.height = s.height;
    }

    #[inline]
    pub const fn absolute_size(self) -> Size {
        self.size().absolute()
    }

    #[inline]
    pub const fn is_empty_area(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn area(self) -> i64 {
        self.size().area()
    }

    // ── orientation ───────────────────────────────────────────────────────

    /// Same region, anchored at its top-left pixel with a non-negative extent.
    ///
    /// An `i32::MIN` extent saturates to `i32::MAX`, one pixel short.
    #[inline]
    pub fn top_left_rectangle(self) -> Self {
        Self::new(
            self.left_side(),
            self.top_side(),
            self.width.saturating_abs(),
            self.height.saturating_abs(),
        )
    }

    #[inline]
    pub const fn is_top_left_rectangle(self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    #[inline]
    pub const fn is_top_right_rectangle(self) -> bool {
        self.width < 0 && self.height >= 0
    }

    #[inline]
    pub const fn is_bottom_left_rectangle(self) -> bool {
        self.width >= 0 && self.height < 0
    }

    #[inline]
    pub const fn is_bottom_right_rectangle(self) -> bool {
        self.width < 0 && self.height < 0
    }

    // ── sides ─────────────────────────────────────────────────────────────

    #[inline]
    pub const fn left_side(self) -> i32 {
        if self.width < 0 { self.x + self.width + 1 } else { self.x }
    }

    #[inline]
    pub const fn right_side(self) -> i32 {
        if self.width > 0 { self.x + self.width - 1 } else { self.x }
    }

    /// Horizontal midpoint, measured from the anchor.
    #[inline]
    pub const fn center_side(self) -> i32 {
        self.x + self.width / 2
    }

    #[inline]
    pub const fn top_side(self) -> i32 {
        if self.height < 0 { self.y + self.height + 1 } else { self.y }
    }

    #[inline]
    pub const fn bottom_side(self) -> i32 {
        if self.height > 0 { self.y + self.height - 1 } else { self.y }
    }

    /// Vertical midpoint, measured from the anchor.
    #[inline]
    pub const fn middle_side(self) -> i32 {
        self.y + self.height / 2
    }

    // ── anchor points ─────────────────────────────────────────────────────

    #[inline]
    pub const fn top_left(self) -> Point {
        Point::new(self.left_side(), self.top_side())
    }

    #[inline]
    pub const fn top_center(self) -> Point {
        Point::new(self.center_side(), self.top_side())
    }

    #[inline]
    pub const fn top_right(self) -> Point {
        Point::new(self.right_side(), self.top_side())
    }

    #[inline]
    pub const fn middle_left(self) -> Point {
        Point::new(self.left_side(), self.middle_side())
    }

    #[inline]
    pub const fn middle_center(self) -> Point {
        Point::new(self.center_side(), self.middle_side())
    }

    #[inline]
    pub const fn middle_right(self) -> Point {
        Point::new(self.right_side(), self.middle_side())
    }

    #[inline]
    pub const fn bottom_left(self) -> Point {
        Point::new(self.left_side(), self.bottom_side())
    }

    #[inline]
    pub const fn bottom_center(self) -> Point {
        Point::new(self.center_side(), self.bottom_side())
    }

    #[inline]
    pub const fn bottom_right(self) -> Point {
        Point::new(self.right_side(), self.bottom_side())
    }

    /// Anchor point of this rectangle for the given alignment.
    pub const fn anchor(self, alignment: RectangleAlignment) -> Point {
        match alignment {
            RectangleAlignment::TopLeft => self.top_left(),
            RectangleAlignment::TopCenter => self.top_center(),
            RectangleAlignment::TopRight => self.top_right(),
            RectangleAlignment::MiddleLeft => self.middle_left(),
            RectangleAlignment::MiddleCenter => self.middle_center(),
            RectangleAlignment::MiddleRight => self.middle_right(),
            RectangleAlignment::BottomLeft => self.bottom_left(),
            RectangleAlignment::BottomCenter => self.bottom_center(),
            RectangleAlignment::BottomRight => self.bottom_right(),
        }
    }

    // ── containment ───────────────────────────────────────────────────────

    /// Inclusive containment: both the near and far edges are inside.
    #[inline]
    pub const fn contains_point(self, p: Point) -> bool {
        p.x >= self.left_side()
            && p.x <= self.right_side()
            && p.y >= self.top_side()
            && p.y <= self.bottom_side()
    }

    /// True when both the top-left and bottom-right pixels of `r` are inside.
    #[inline]
    pub const fn contains_rect(self, r: Rectangle) -> bool {
        self.contains_point(r.top_left()) && self.contains_point(r.bottom_right())
    }

    // ── set operations ────────────────────────────────────────────────────

    /// Inclusive overlap of two rectangles, or [`Rectangle::EMPTY`].
    pub fn intersect(r1: Rectangle, r2: Rectangle) -> Rectangle {
        if r1.is_empty_area() || r2.is_empty_area() {
            return Rectangle::EMPTY;
        }

        let (tl1, tl2) = (r1.top_left(), r2.top_left());
        let (br1, br2) = (r1.bottom_right(), r2.bottom_right());

        let left = tl1.x.max(tl2.x);
        let top = tl1.y.max(tl2.y);
        let right = br1.x.min(br2.x);
        let bottom = br1.y.min(br2.y);

        if right < left || bottom < top {
            return Rectangle::EMPTY;
        }
        Rectangle::new(left, top, right - left + 1, bottom - top + 1)
    }

    /// Smallest rectangle covering `r` and the pixel `p`.
    ///
    /// An empty `r` contributes only its anchor position.
    pub fn union_point(r: Rectangle, p: Point) -> Rectangle {
        if r.is_empty_area() {
            return Rectangle::from_two_points(r.position(), p);
        }

        let x = r.left_side().min(p.x);
        let y = r.top_side().min(p.y);
        Rectangle::new(
            x,
            y,
            r.right_side().max(p.x) - x + 1,
            r.bottom_side().max(p.y) - y + 1,
        )
    }

    /// Smallest rectangle covering both inputs.
    ///
    /// An empty operand contributes only its anchor position.
    pub fn union(r1: Rectangle, r2: Rectangle) -> Rectangle {
        if r1.is_empty_area() {
            return Rectangle::union_point(r2, r1.position());
        }
        if r2.is_empty_area() {
            return Rectangle::union_point(r1, r2.position());
        }

        let x = r1.left_side().min(r2.left_side());
        let y = r1.top_side().min(r2.top_side());
        Rectangle::new(
            x,
            y,
            r1.right_side().max(r2.right_side()) - x + 1,
            r1.bottom_side().max(r2.bottom_side()) - y + 1,
        )
    }

    #[inline]
    pub fn union_with_point(self, p: Point) -> Rectangle {
        Rectangle::union_point(self, p)
    }

    #[inline]
    pub fn union_with(self, r: Rectangle) -> Rectangle {
        Rectangle::union(self, r)
    }

    // ── local / global ────────────────────────────────────────────────────

    /// Converts a point relative to the top-left pixel into global space.
    #[inline]
    pub const fn local_to_global_point(self, local: Point) -> Point {
        Point::new(local.x + self.left_side(), local.y + self.top_side())
    }

    #[inline]
    pub const fn global_to_local_point(self, global: Point) -> Point {
        Point::new(global.x - self.left_side(), global.y - self.top_side())
    }

    /// Places `local` inside this rectangle.
    ///
    /// `local`'s own position is an offset from the chosen anchor, and the
    /// free space (`|self| - |local|` per axis) is distributed per `alignment`.
    /// The result always has a non-negative extent.
    pub fn local_to_global(self, local: Rectangle, alignment: RectangleAlignment) -> Rectangle {
        let local_w = local.width.abs();
        let local_h = local.height.abs();
        let (h, v) = alignment.spans();

        Rectangle::new(
            self.left_side() + local.left_side() + h.offset(self.width.abs() - local_w),
            self.top_side() + local.top_side() + v.offset(self.height.abs() - local_h),
            local_w,
            local_h,
        )
    }
}

impl From<Rectangle> for Point {
    #[inline]
    fn from(r: Rectangle) -> Self {
        r.position()
    }
}

impl From<Rectangle> for Size {
    #[inline]
    fn from(r: Rectangle) -> Self {
        r.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rectangle { Rectangle::new(x, y, w, h) }
    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }

    const SAMPLES: [Rectangle; 5] = [
        Rectangle::new(0, 0, 10, 10),
        Rectangle::new(3, -7, 1, 1),
        Rectangle::new(0, 0, -5, -5),
        Rectangle::new(20, 4, -3, 6),
        Rectangle::new(-2, 9, 4, -12),
    ];

    // ── sides ─────────────────────────────────────────────────────────────

    #[test]
    fn sides_positive_extent() {
        let rect = r(2, 3, 4, 5);
        assert_eq!(rect.left_side(), 2);
        assert_eq!(rect.right_side(), 5);
        assert_eq!(rect.top_side(), 3);
        assert_eq!(rect.bottom_side(), 7);
    }

    #[test]
    fn sides_negative_extent() {
        let rect = r(0, 0, -5, -5);
        assert_eq!(rect.left_side(), -4);
        assert_eq!(rect.right_side(), 0);
        assert_eq!(rect.top_side(), -4);
        assert_eq!(rect.bottom_side(), 0);
        assert!(!rect.is_top_left_rectangle());
        assert!(rect.is_bottom_right_rectangle());
        assert_eq!(rect.top_left_rectangle(), r(-4, -4, 5, 5));
    }

    #[test]
    fn top_left_rectangle_at_min_extent() {
        let rect = r(0, 0, i32::MIN, 1).top_left_rectangle();
        assert_eq!(rect, r(i32::MIN + 1, 0, i32::MAX, 1));
        assert_eq!(rect.right_side(), -1);
    }

    #[test]
    fn quadrant_predicates() {
        assert!(r(0, 0, 0, 0).is_top_left_rectangle());
        assert!(r(0, 0, -1, 2).is_top_right_rectangle());
        assert!(r(0, 0, 1, -2).is_bottom_left_rectangle());
    }

    #[test]
    fn midpoints_follow_their_axis() {
        let rect = r(10, 100, 6, 8);
        assert_eq!(rect.middle_center(), p(13, 104));
        assert_eq!(rect.top_center(), p(13, 100));
        assert_eq!(rect.middle_right(), p(15, 104));
        assert_eq!(rect.anchor(RectangleAlignment::BottomCenter), p(13, 107));
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn contains_own_corners() {
        for rect in SAMPLES {
            assert!(rect.contains_point(rect.top_left()), "{rect:?}");
            assert!(rect.contains_point(rect.bottom_right()), "{rect:?}");
            assert!(rect.contains_point(rect.top_right()), "{rect:?}");
            assert!(rect.contains_point(rect.bottom_left()), "{rect:?}");
        }
    }

    #[test]
    fn contains_point_is_inclusive() {
        let rect = r(0, 0, 10, 10);
        assert!(rect.contains_point(p(9, 9)));
        assert!(!rect.contains_point(p(10, 9)));
        assert!(!rect.contains_point(p(-1, 0)));
    }

    #[test]
    fn contains_rect() {
        let outer = r(0, 0, 10, 10);
        assert!(outer.contains_rect(r(2, 2, 3, 3)));
        assert!(outer.contains_rect(r(9, 9, -10, -10)));
        assert!(!outer.contains_rect(r(8, 8, 3, 3)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_self_is_normalized_self() {
        for rect in SAMPLES {
            assert_eq!(Rectangle::intersect(rect, rect), rect.top_left_rectangle(), "{rect:?}");
        }
    }

    #[test]
    fn intersect_overlapping() {
        let a = r(0, 0, 10, 10);
        let b = r(5, 5, 10, 10);
        assert_eq!(Rectangle::intersect(a, b), r(5, 5, 5, 5));
    }

    #[test]
    fn intersect_shared_edge_is_one_pixel_wide() {
        // Inclusive ranges: column 9 belongs to both.
        let a = r(0, 0, 10, 10);
        let b = r(9, 0, 10, 10);
        assert_eq!(Rectangle::intersect(a, b), r(9, 0, 1, 10));
    }

    #[test]
    fn intersect_disjoint_or_empty_is_empty() {
        assert_eq!(Rectangle::intersect(r(0, 0, 5, 5), r(5, 0, 5, 5)), Rectangle::EMPTY);
        assert_eq!(Rectangle::intersect(r(0, 0, 5, 5), r(1, 1, 0, 3)), Rectangle::EMPTY);
    }

    // ── union ─────────────────────────────────────────────────────────────

    #[test]
    fn union_with_own_corner_does_not_expand() {
        for rect in SAMPLES {
            assert_eq!(
                Rectangle::union_point(rect, rect.top_left()),
                rect.top_left_rectangle(),
                "{rect:?}"
            );
        }
    }

    #[test]
    fn union_point_outside_grows() {
        assert_eq!(Rectangle::union_point(r(0, 0, 2, 2), p(4, -1)), r(0, -1, 5, 3));
    }

    #[test]
    fn union_point_empty_rect_uses_position() {
        assert_eq!(Rectangle::union_point(r(3, 3, 0, 0), p(1, 5)), r(1, 3, 3, 3));
    }

    #[test]
    fn union_of_two_rects() {
        let u = Rectangle::union(r(0, 0, 2, 2), r(5, 5, -2, -2));
        assert_eq!(u, r(0, 0, 6, 6));
        assert_eq!(r(0, 0, 2, 2).union_with(r(5, 5, -2, -2)), u);
    }

    #[test]
    fn union_with_empty_uses_its_position() {
        assert_eq!(Rectangle::union(r(0, 0, 0, 0), r(2, 2, 2, 2)), r(0, 0, 4, 4));
        assert_eq!(Rectangle::union(r(2, 2, 2, 2), r(6, 6, 0, 1)), r(2, 2, 5, 5));
    }

    // ── from_two_points ───────────────────────────────────────────────────

    #[test]
    fn from_two_points_is_minimal_cover() {
        let (a, b) = (p(7, -2), p(3, 4));
        let rect = Rectangle::from_two_points(a, b);
        assert_eq!(rect, r(3, -2, 5, 7));
        assert!(rect.contains_point(a) && rect.contains_point(b));

        // Shrinking any side loses one of the points.
        for smaller in [r(4, -2, 4, 7), r(3, -1, 5, 6), r(3, -2, 4, 7), r(3, -2, 5, 6)] {
            assert!(!(smaller.contains_point(a) && smaller.contains_point(b)), "{smaller:?}");
        }
    }

    #[test]
    fn from_two_points_same_point_is_single_pixel() {
        assert_eq!(Rectangle::from_two_points(p(4, 4), p(4, 4)), r(4, 4, 1, 1));
    }

    // ── local / global ────────────────────────────────────────────────────

    #[test]
    fn local_global_points_round_trip() {
        let rect = r(10, 20, -5, 5);
        let local = p(1, 2);
        let global = rect.local_to_global_point(local);
        assert_eq!(global, p(7, 22));
        assert_eq!(rect.global_to_local_point(global), local);
    }

    #[test]
    fn local_to_global_alignments() {
        use RectangleAlignment::*;
        let outer = r(100, 200, 50, 30);
        let local = r(0, 0, 10, 6);

        let cases = [
            (TopLeft, r(100, 200, 10, 6)),
            (TopCenter, r(120, 200, 10, 6)),
            (TopRight, r(140, 200, 10, 6)),
            (MiddleLeft, r(100, 212, 10, 6)),
            (MiddleCenter, r(120, 212, 10, 6)),
            (MiddleRight, r(140, 212, 10, 6)),
            (BottomLeft, r(100, 224, 10, 6)),
            (BottomCenter, r(120, 224, 10, 6)),
            (BottomRight, r(140, 224, 10, 6)),
        ];
        for (alignment, expected) in cases {
            assert_eq!(outer.local_to_global(local, alignment), expected, "{alignment:?}");
        }
    }

    #[test]
    fn local_to_global_default_is_top_left() {
        let outer = r(0, 0, 20, 20);
        let local = r(2, 3, 4, 4);
        assert_eq!(
            outer.local_to_global(local, RectangleAlignment::default()),
            outer.local_to_global(local, RectangleAlignment::TopLeft),
        );
    }

    #[test]
    fn local_offset_applies_on_top_of_alignment() {
        let outer = r(0, 0, 21, 11);
        let local = r(1, -1, 5, 5);
        // free space 16 x 6 -> centered offset 8 x 3
        assert_eq!(outer.local_to_global(local, RectangleAlignment::MiddleCenter), r(9, 2, 5, 5));
    }
}
