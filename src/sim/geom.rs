//! Axis-aligned geometry primitives
//!
//! Everything the collision layer needs to ask about rectangles and
//! circles: overlap tests and the nearest-boundary-point probe. The probe
//! reports geometry only; response rules live in `collision`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// The playable field: min/max corners, computed once from the display
/// size minus fixed margins. `max.y` is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// True when two rectangles intersect or touch on any edge
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.max_x() >= b.min_x() && a.min_x() <= b.max_x() && a.max_y() >= b.min_y() && a.min_y() <= b.max_y()
}

/// Result of probing a circle against a rectangle
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResult {
    /// Nearest point on the rectangle to the circle center
    pub point: Vec2,
    /// Vector from the nearest point to the circle center
    pub dir: Vec2,
    /// Unit direction of `dir`; zero when there is no overlap, and also
    /// when the center sits inside the rectangle (distance 0)
    pub normal: Vec2,
    /// Distance from the circle center to the nearest point
    pub distance: f32,
}

impl CollisionResult {
    /// Whether an overlap was detected
    #[inline]
    pub fn hit(&self) -> bool {
        self.normal != Vec2::ZERO
    }
}

/// Probe a circle against a rectangle.
///
/// Clamps the circle center to the rectangle to find the nearest boundary
/// point, then measures the distance to it. The normal is non-zero only
/// when `0 < distance <= radius`; a center lying inside the rectangle has
/// distance 0 and yields a zero normal, leaving the degenerate case
/// unresolved at this layer.
pub fn circle_vs_rect(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    let nearest = center.clamp(rect.pos, rect.pos + rect.size);
    let dir = center - nearest;
    let distance = dir.length();

    let normal = if distance > 0.0 && distance <= radius {
        dir / distance
    } else {
        Vec2::ZERO
    };

    CollisionResult {
        point: nearest,
        dir,
        normal,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect_overlap(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!rect_overlap(&a, &Rect::new(20.0, 0.0, 5.0, 5.0)));
        // Touching edges count as overlap
        assert!(rect_overlap(&a, &Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(rect_overlap(&a, &Rect::new(0.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_circle_vs_rect_side_hit() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Ball just left of the rect, within radius
        let result = circle_vs_rect(Vec2::new(95.0, 125.0), 8.0, &rect);
        assert!(result.hit());
        assert_eq!(result.point, Vec2::new(100.0, 125.0));
        assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
        assert!((result.distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_circle_vs_rect_miss() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        let result = circle_vs_rect(Vec2::new(80.0, 125.0), 8.0, &rect);
        assert!(!result.hit());
        assert_eq!(result.normal, Vec2::ZERO);
        assert!(result.distance > 8.0);
    }

    #[test]
    fn test_circle_vs_rect_touching_counts() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Distance exactly equal to the radius still reports a hit
        let result = circle_vs_rect(Vec2::new(92.0, 125.0), 8.0, &rect);
        assert!(result.hit());
        assert!((result.distance - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_circle_vs_rect_center_inside_degenerate() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Center inside the rectangle clamps to itself: zero distance,
        // zero normal, no hit reported
        let result = circle_vs_rect(Vec2::new(125.0, 125.0), 8.0, &rect);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.normal, Vec2::ZERO);
        assert!(!result.hit());
    }

    #[test]
    fn test_circle_vs_rect_corner_normal_is_unit() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Approach the top-left corner diagonally
        let result = circle_vs_rect(Vec2::new(96.0, 96.0), 8.0, &rect);
        assert!(result.hit());
        assert!((result.normal.length() - 1.0).abs() < 1e-5);
        assert!(result.normal.x < 0.0 && result.normal.y < 0.0);
    }

    proptest! {
        #[test]
        fn prop_normal_unit_or_zero(
            cx in -200.0f32..400.0,
            cy in -200.0f32..400.0,
            radius in 1.0f32..50.0,
            rx in 0.0f32..100.0,
            ry in 0.0f32..100.0,
            rw in 1.0f32..150.0,
            rh in 1.0f32..150.0,
        ) {
            let rect = Rect::new(rx, ry, rw, rh);
            let result = circle_vs_rect(Vec2::new(cx, cy), radius, &rect);

            if result.distance > 0.0 && result.distance <= radius {
                prop_assert!((result.normal.length() - 1.0).abs() < 1e-4);
            } else {
                prop_assert_eq!(result.normal, Vec2::ZERO);
            }
        }
    }
}
