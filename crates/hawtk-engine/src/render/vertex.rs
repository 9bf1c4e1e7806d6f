use bytemuck::{Pod, Zeroable};

use crate::coords::{Color, Rect, Vec2f};

/// The unit of geometry submitted to a renderer.
///
/// `repr(C)` + `Pod` so backends can upload a `&[Vertex]` as raw bytes
/// (see [`Vertex::as_bytes`]). Layout: 2 × f32 position, 4 × f32 color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec2f,
    pub color: Color,
}

impl Vertex {
    /// Size of one vertex in bytes (24).
    pub const STRIDE: usize = core::mem::size_of::<Vertex>();

    #[inline]
    pub const fn new(position: Vec2f, color: Color) -> Self {
        Self { position, color }
    }

    /// Reinterprets a vertex batch as bytes for buffer upload.
    #[inline]
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }

    /// One solid triangle.
    #[inline]
    pub fn triangle(a: Vec2f, b: Vec2f, c: Vec2f, color: Color) -> [Vertex; 3] {
        [Vertex::new(a, color), Vertex::new(b, color), Vertex::new(c, color)]
    }

    /// Two triangles covering `rect`, corners wound `[0, 1, 2, 0, 2, 3]`
    /// starting at the top-left.
    pub fn quad(rect: Rect, color: Color) -> [Vertex; 6] {
        let min = rect.min();
        let max = rect.max();
        let corners = [
            min,
            Vec2f::new([max.x(), min.y()]),
            max,
            Vec2f::new([min.x(), max.y()]),
        ];
        [0, 1, 2, 0, 2, 3].map(|i| Vertex::new(corners[i], color))
    }
}
