//! Collision geometry for axis-aligned boxes
//!
//! The ball is a circle on screen but collides as its enclosing square, so
//! every test here is box against box. Coordinates are play-area pixels with
//! the origin at the top-left corner and y growing downward.

use glam::Vec2;

/// Axis-aligned rectangle, stored as its top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `2 * half_extent` centered on `center`
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        let half = Vec2::splat(half_extent);
        Self {
            min: center - half,
            size: half * 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Point containment, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Inclusive overlap: sharing an edge counts as contact
    pub fn touches(&self, other: &Aabb) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}

/// Bounce off a vertical surface (side wall)
#[inline]
pub fn reflect_x(velocity: Vec2) -> Vec2 {
    Vec2::new(-velocity.x, velocity.y)
}

/// Bounce off a horizontal surface (ceiling, paddle, brick)
#[inline]
pub fn reflect_y(velocity: Vec2) -> Vec2 {
    Vec2::new(velocity.x, -velocity.y)
}

/// Horizontal speed after a paddle hit
///
/// Proportional to how far from the paddle center the ball struck:
/// dead center sends the ball straight up, the edges send it out at
/// roughly `max_speed`.
pub fn paddle_deflection(ball_x: f32, paddle_center_x: f32, half_width: f32, max_speed: f32) -> f32 {
    let hit_pos = (ball_x - paddle_center_x) / half_width;
    hit_pos * max_speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around_builds_square() {
        let b = Aabb::around(Vec2::new(100.0, 50.0), 8.0);
        assert_eq!(b.left(), 92.0);
        assert_eq!(b.right(), 108.0);
        assert_eq!(b.top(), 42.0);
        assert_eq!(b.bottom(), 58.0);
        assert_eq!(b.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_contains_edges() {
        let b = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(10.0, 5.0)));
        assert!(!b.contains(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_shared_edge_touches_but_does_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.touches(&b));
        assert!(!a.intersects(&b));

        let c = Aabb::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.touches(&c));
        assert!(a.intersects(&c));

        let far = Aabb::new(30.0, 30.0, 5.0, 5.0);
        assert!(!a.touches(&far));
        assert!(!a.intersects(&far));
    }

    #[test]
    fn test_reflections_negate_one_component() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(reflect_x(v), Vec2::new(-3.0, -4.0));
        assert_eq!(reflect_y(v), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_paddle_deflection() {
        assert_eq!(paddle_deflection(200.0, 200.0, 60.0, 5.0), 0.0);
        assert_eq!(paddle_deflection(140.0, 200.0, 60.0, 5.0), -5.0);
        assert_eq!(paddle_deflection(260.0, 200.0, 60.0, 5.0), 5.0);
        assert_eq!(paddle_deflection(230.0, 200.0, 60.0, 5.0), 2.5);
    }
}
