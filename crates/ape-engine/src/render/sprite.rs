use std::fmt;

use crate::coords::{Rectangle, Vector2};
use crate::paint::Color;

/// Single sprite vertex: position, tint and texture coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vector2,
    pub color: Color,
    pub texture_position: Vector2,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vector2, color: Color, texture_position: Vector2) -> Self {
        Self { position, color, texture_position }
    }

    /// Untextured vertex.
    #[inline]
    pub const fn colored(position: Vector2, color: Color) -> Self {
        Self::new(position, color, Vector2::ZERO)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(Vector2::ZERO, Color::WHITE, Vector2::ZERO)
    }
}

/// Triangle index referencing a vertex that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    IndexOutOfRange {
        /// Triangle number (0-based).
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::IndexOutOfRange { triangle, index, vertex_count } => write!(
                f,
                "triangle {triangle} references vertex {index}, but the sprite has {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for SpriteError {}

/// Indexed triangle mesh.
///
/// Invariant: `indices().len()` is a multiple of 3 (only
/// [`add_triangle`](Sprite::add_triangle) appends indices). Indices are not
/// checked on insertion; call [`validate`](Sprite::validate) before handing a
/// sprite built from external data to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sprite {
    vertices: Vec<Vertex>,
    indices: Vec<usize>,
}

impl Sprite {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-triangle quad covering `rect` (pixel-inclusive, so the far edge
    /// sits at `right_side + 1`), with texture coordinates spanning `[0, 1]`.
    pub fn quad(rect: Rectangle, color: Color) -> Self {
        let r = rect.top_left_rectangle();
        let (x0, y0) = (r.x as f64, r.y as f64);
        let (x1, y1) = (x0 + r.width as f64, y0 + r.height as f64);

        let mut sprite = Sprite::new();
        sprite.add_vertex(Vertex::new(Vector2::new(x0, y0), color, Vector2::new(0.0, 0.0)));
        sprite.add_vertex(Vertex::new(Vector2::new(x1, y0), color, Vector2::new(1.0, 0.0)));
        sprite.add_vertex(Vertex::new(Vector2::new(x1, y1), color, Vector2::new(1.0, 1.0)));
        sprite.add_vertex(Vertex::new(Vector2::new(x0, y1), color, Vector2::new(0.0, 1.0)));
        sprite.add_triangle(0, 1, 2);
        sprite.add_triangle(0, 2, 3);
        sprite
    }

    #[inline]
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    #[inline]
    pub fn add_triangle(&mut self, i0: usize, i1: usize, i2: usize) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete triangles, i.e. `indices().len() / 3`.
    ///
    /// This counts triangles, not indices; use `indices().len()` for the raw
    /// index count. A sprite can be drawn once this is at least 1.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Mutable vertex access; the vertex count cannot change through it.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Flat index list; every three entries form one triangle.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Checks that every index references an existing vertex.
    pub fn validate(&self) -> Result<(), SpriteError> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i >= vertex_count) {
                return Err(SpriteError::IndexOutOfRange { triangle, index, vertex_count });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vertex_is_white() {
        assert_eq!(Vertex::default().color, Color::WHITE);
    }

    #[test]
    fn triangles_group_indices_in_threes() {
        let mut s = Sprite::new();
        for _ in 0..4 {
            s.add_vertex(Vertex::default());
        }
        s.add_triangle(0, 1, 2);
        s.add_triangle(2, 3, 0);

        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.triangle_count(), 2);
        assert_eq!(s.indices().len(), 6);
        assert_eq!(s.indices().len() % 3, 0);
        assert_eq!(s.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [2, 3, 0]]);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_reports_first_bad_index() {
        let mut s = Sprite::new();
        s.add_vertex(Vertex::default());
        s.add_vertex(Vertex::default());
        s.add_vertex(Vertex::default());
        s.add_triangle(0, 1, 2);
        s.add_triangle(1, 5, 7);

        let err = s.validate().unwrap_err();
        assert_eq!(err, SpriteError::IndexOutOfRange { triangle: 1, index: 5, vertex_count: 3 });
        assert!(err.to_string().contains("vertex 5"));
    }

    #[test]
    fn quad_covers_normalized_rect() {
        let s = Sprite::quad(Rectangle::new(10, 10, -4, 2), Color::BLACK);
        assert_eq!(s.triangle_count(), 2);
        assert!(s.validate().is_ok());
        assert_eq!(s.vertices()[0].position, Vector2::new(7.0, 10.0));
        assert_eq!(s.vertices()[2].position, Vector2::new(11.0, 12.0));
        assert_eq!(s.vertices()[2].texture_position, Vector2::ONE);
    }

    #[test]
    fn vertices_mut_recolors() {
        let mut s = Sprite::quad(Rectangle::new(0, 0, 1, 1), Color::WHITE);
        for v in s.vertices_mut() {
            v.color = v.color.darken(100.0);
        }
        assert!(s.vertices().iter().all(|v| v.color == Color::BLACK));
    }

    #[test]
    fn clear_empties_everything() {
        let mut s = Sprite::quad(Rectangle::new(0, 0, 3, 3), Color::WHITE);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.vertex_count(), 0);
    }
}
