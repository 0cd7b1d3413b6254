//! Axis-aligned collision testing
//!
//! Everything in this game is an axis-aligned box, so the broad phase and
//! the narrow phase are the same four comparisons.

use super::state::Rect;

/// True iff the two boxes intersect with positive area.
///
/// Strict comparisons: rectangles sharing only a boundary edge do NOT
/// overlap. No side effects, no allocation.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares exactly the x = 10 edge
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));

        // Shares exactly the y = 10 edge
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));

        // Corner contact only
        let d = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &d));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_self_overlap() {
        let a = Rect::new(3.0, 4.0, 5.0, 6.0);
        assert!(overlaps(&a, &a));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..200.0, bh in 0.1f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_separated_on_an_axis_never_overlaps(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            gap in 0.0f32..100.0,
            h in 0.1f32..200.0, w in 0.1f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            // Placed at or beyond a's right edge
            let b = Rect::new(ax + aw + gap, ay, w, h);
            prop_assert!(!overlaps(&a, &b));
        }
    }
}
