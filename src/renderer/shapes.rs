//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(bounds: &Aabb, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (bounds.left(), bounds.right(), bounds.top(), bounds.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Rectangle grown by `margin` on every side, for soft halos
pub fn halo(bounds: &Aabb, margin: f32, color: [f32; 4]) -> [Vertex; 6] {
    let grown = Aabb::new(
        bounds.left() - margin,
        bounds.top() - margin,
        bounds.size.x + margin * 2.0,
        bounds.size.y + margin * 2.0,
    );
    rect(&grown, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let verts = rect(&Aabb::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_halo_grows() {
        let verts = halo(&Aabb::new(10.0, 10.0, 10.0, 10.0), 5.0, [1.0; 4]);
        assert_eq!(verts[0].position, [5.0, 5.0]);
        assert_eq!(verts[5].position, [25.0, 25.0]);
    }

    #[test]
    fn test_circle_vertex_count_and_radius() {
        let center = Vec2::new(50.0, 50.0);
        let verts = circle(center, 8.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in verts.iter().skip(1).step_by(3) {
            let d = Vec2::from(v.position).distance(center);
            assert!((d - 8.0).abs() < 1e-3);
        }
    }
}
