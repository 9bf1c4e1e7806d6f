use super::Vec2f;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Widgets are placed as `origin + bounds`; scissor regions are passed to
/// backends as a rect's `origin` and `size`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2f,
    pub size: Vec2f,
}

impl Rect {
    /// Zero-area rect at the origin. Scissoring to it discards every draw.
    pub const EMPTY: Rect = Rect::from_origin_size(Vec2f::ZERO, Vec2f::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2f::new([x, y]),
            size: Vec2f::new([w, h]),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2f, size: Vec2f) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2f {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2f {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x() <= 0.0 || self.size.y() <= 0.0
    }

    /// Same rect with non-negative width and height.
    #[inline]
    pub fn normalized(self) -> Self {
        let (mut x, mut w) = (self.origin.x(), self.size.x());
        let (mut y, mut h) = (self.origin.y(), self.size.y());
        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2f) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x() >= r.origin.x() && p.y() >= r.origin.y() && p.x() < max.x() && p.y() < max.y()
    }

    /// Overlapping region, or `None` when the rects only touch or are disjoint.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();
        let (a_max, b_max) = (a.max(), b.max());

        let x0 = a.origin.x().max(b.origin.x());
        let y0 = a.origin.y().max(b.origin.y());
        let x1 = a_max.x().min(b_max.x());
        let y1 = a_max.y().min(b_max.y());

        if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }

    /// Rect moved by `delta`.
    #[inline]
    pub fn translate(self, delta: Vec2f) -> Self {
        Self::from_origin_size(self.origin + delta, self.size)
    }
}
