use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }
}

/// Half-open horizontal range `[start, end)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.start && x < self.end
    }

    #[inline]
    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Span};

    #[test]
    fn span_is_half_open() {
        let gap = Span::new(400.0, 500.0);
        assert!(gap.contains(400.0));
        assert!(gap.contains(499.9));
        assert!(!gap.contains(500.0));
        assert!(!gap.contains(399.9));
        assert_eq!(gap.len(), 100.0);
        assert!(Span::new(3.0, 3.0).is_empty());
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(250.0, 320.0, 60.0, 10.0);
        assert_eq!(r.right(), 310.0);
        assert_eq!(r.center_x(), 280.0);
    }
}
