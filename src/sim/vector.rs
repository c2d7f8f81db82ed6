//! Horizontal torus wrap for lane positions
//!
//! Positions are plain `glam::Vec2` values. Only the x axis wraps, and only
//! where a caller asks for it: vertical hops never wrap.

use glam::Vec2;

use crate::consts::CANVAS_WIDTH;

/// Bring `x` back onto the board when it has run off one edge.
///
/// A single correction is applied, so values more than one board width
/// away are only partially corrected. `x == width` is left as is.
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    if x < 0.0 {
        x + width
    } else if x > width {
        x - width
    } else {
        x
    }
}

/// Wrap a position horizontally against a board of the given width
#[inline]
pub fn wrap_horizontal(v: Vec2, width: f32) -> Vec2 {
    Vec2::new(wrap_x(v.x, width), v.y)
}

/// Translate then wrap against the game board
#[inline]
pub fn translate_wrapped(v: Vec2, delta: Vec2) -> Vec2 {
    wrap_horizontal(v + delta, CANVAS_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap_x(-10.0, 532.0), 522.0);
        assert_eq!(wrap_x(540.0, 532.0), 8.0);
        assert_eq!(wrap_x(0.0, 532.0), 0.0);
        assert_eq!(wrap_x(532.0, 532.0), 532.0);
    }

    #[test]
    fn test_vertical_untouched() {
        let v = translate_wrapped(Vec2::new(530.0, 10.0), Vec2::new(8.0, -600.0));
        assert_eq!(v, Vec2::new(6.0, -590.0));
    }

    proptest! {
        #[test]
        fn wrap_brings_left_overflow_on_board(x in -532.0f32..0.0) {
            let w = wrap_x(x, CANVAS_WIDTH);
            prop_assert!((0.0..CANVAS_WIDTH).contains(&w) || w == CANVAS_WIDTH);
        }

        #[test]
        fn wrap_brings_right_overflow_on_board(x in 532.01f32..1064.0) {
            let w = wrap_x(x, CANVAS_WIDTH);
            prop_assert!(w > 0.0 && w <= CANVAS_WIDTH);
        }

        #[test]
        fn wrap_is_idempotent_on_board(x in 0.0f32..532.0) {
            let once = wrap_x(x, CANVAS_WIDTH);
            prop_assert_eq!(once, x);
            prop_assert_eq!(wrap_x(once, CANVAS_WIDTH), once);
        }
    }
}
