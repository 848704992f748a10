//! Static-geometry tests. All discrete: a shelf is only caught on the frame
//! the feet cross its surface, so a fast enough fall can tunnel through.

use crate::entity::Entity;
use crate::geom::{Rect, Span};

#[inline]
pub fn overlaps_x(e: &Entity, r: &Rect) -> bool {
    e.right() > r.x && e.left() < r.right()
}

/// True when `y` is at or past `surface` and the previous y, reconstructed
/// as `y - vy`, was above it.
#[inline]
pub fn crossed_down(y: f32, vy: f32, surface: f32) -> bool {
    y >= surface && y - vy < surface
}

/// First shelf, in list order, the entity fell onto this frame.
pub fn find_landing(e: &Entity, shelves: &[Rect]) -> Option<usize> {
    shelves
        .iter()
        .position(|s| overlaps_x(e, s) && crossed_down(e.y, e.vy, s.y))
}

#[inline]
pub fn on_ground_line(e: &Entity, ground_y: f32) -> bool {
    e.on_ground && e.y == ground_y
}

#[inline]
pub fn in_gap(e: &Entity, ground_y: f32, gap: &Span) -> bool {
    on_ground_line(e, ground_y) && gap.contains(e.x)
}

#[inline]
pub fn reached_win(e: &Entity, win_x: f32) -> bool {
    e.on_ground && e.x >= win_x
}

#[cfg(test)]
mod tests {
    use super::{crossed_down, find_landing, in_gap, overlaps_x, reached_win};
    use crate::entity::Entity;
    use crate::geom::{Rect, Span};

    fn at(x: f32, y: f32, vy: f32) -> Entity {
        Entity {
            x,
            y,
            vy,
            w: 30.0,
            h: 50.0,
            on_ground: false,
        }
    }

    #[test]
    fn horizontal_overlap_is_strict() {
        let shelf = Rect::new(250.0, 320.0, 60.0, 10.0);
        assert!(overlaps_x(&at(280.0, 0.0, 0.0), &shelf));
        assert!(overlaps_x(&at(236.0, 0.0, 0.0), &shelf));
        assert!(!overlaps_x(&at(235.0, 0.0, 0.0), &shelf));
        assert!(!overlaps_x(&at(325.0, 0.0, 0.0), &shelf));
    }

    #[test]
    fn crossing_needs_previous_frame_above() {
        assert!(crossed_down(320.7, 6.4, 320.0));
        assert!(!crossed_down(319.9, 6.4, 320.0));
        // Rising through the surface is not a landing.
        assert!(!crossed_down(320.5, -10.8, 320.0));
        // Already below last frame.
        assert!(!crossed_down(330.0, 5.0, 320.0));
    }

    #[test]
    fn first_listed_shelf_wins() {
        let shelves = [
            Rect::new(250.0, 320.0, 60.0, 10.0),
            Rect::new(320.0, 270.0, 60.0, 10.0),
        ];
        let e = at(315.0, 324.3, 65.0);
        assert_eq!(find_landing(&e, &shelves), Some(0));
        let e = at(350.0, 271.0, 5.0);
        assert_eq!(find_landing(&e, &shelves), Some(1));
        let e = at(600.0, 271.0, 5.0);
        assert_eq!(find_landing(&e, &shelves), None);
    }

    #[test]
    fn gap_and_win_need_ground_contact() {
        let gap = Span::new(400.0, 500.0);
        let mut e = at(450.0, 400.0, 0.0);
        assert!(!in_gap(&e, 400.0, &gap));
        e.on_ground = true;
        assert!(in_gap(&e, 400.0, &gap));
        e.y = 270.0;
        assert!(!in_gap(&e, 400.0, &gap), "shelf height is not the ground line");

        let mut e = at(750.0, 400.0, 0.0);
        assert!(!reached_win(&e, 750.0));
        e.on_ground = true;
        assert!(reached_win(&e, 750.0));
    }
}
