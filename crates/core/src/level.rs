use serde::{Deserialize, Serialize};

use crate::geom::{Rect, Span};

/// Static layout: two ground segments around a gap, a win line and a list
/// of shelves. Immutable once a game is built from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub gap: Span,
    pub win_x: f32,
    /// Checked in order; the first crossing shelf wins a landing.
    pub shelves: Vec<Rect>,
    /// Shelf whose first touch darkens the gap segment.
    pub reveal_shelf: Option<usize>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            gap: Span::new(400.0, 500.0),
            win_x: 750.0,
            shelves: vec![
                Rect::new(250.0, 320.0, 60.0, 10.0),
                Rect::new(320.0, 270.0, 60.0, 10.0),
            ],
            reveal_shelf: Some(1),
        }
    }
}

impl Level {
    /// Ground spans drawn left of, inside and right of the gap.
    pub fn ground_segments(&self, surface_w: f32) -> [Span; 3] {
        [
            Span::new(0.0, self.gap.start),
            self.gap,
            Span::new(self.gap.end, surface_w),
        ]
    }

    pub fn shelf(&self, idx: usize) -> Option<&Rect> {
        self.shelves.get(idx)
    }
}
