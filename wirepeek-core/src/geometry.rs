/// Wireframe geometry primitives
use nalgebra::Point3;

/// A line segment in model space, the atomic drawable unit.
///
/// `hue` and `lum` are per-edge shading cues filled in during coordinate
/// fixup; `z` is scratch storage for depth ordering. Both endpoints are
/// rewritten in place as the model is normalized and projected.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub p0: Point3<f32>,
    pub p1: Point3<f32>,
    pub hue: f32,
    pub lum: f32,
    pub z: f32,
}

impl Edge {
    pub fn new(p0: Point3<f32>, p1: Point3<f32>) -> Self {
        Self {
            p0,
            p1,
            hue: 0.0,
            lum: 0.0,
            z: 0.0,
        }
    }

    pub fn from_coords(x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) -> Self {
        Self::new(Point3::new(x0, y0, z0), Point3::new(x1, y1, z1))
    }
}

/// Axis-aligned bounding box of a set of edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundingBox {
    /// Degenerate box at the origin, used for models with no edges.
    pub fn zero() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
        }
    }

    /// Componentwise min/max across both endpoints of every edge.
    /// Single pass; an empty slice yields the zero box.
    pub fn of_edges(edges: &[Edge]) -> Self {
        let Some(first) = edges.first() else {
            return Self::zero();
        };

        let mut min = first.p0;
        let mut max = first.p0;
        for edge in edges {
            for p in [&edge.p0, &edge.p1] {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                min.z = min.z.min(p.z);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
                max.z = max.z.max(p.z);
            }
        }
        Self { min, max }
    }

    pub fn center(&self) -> Point3<f32> {
        let h = self.half_extents();
        Point3::new(self.min.x + h.0, self.min.y + h.1, self.min.z + h.2)
    }

    pub fn half_extents(&self) -> (f32, f32, f32) {
        (
            0.5 * (self.max.x - self.min.x),
            0.5 * (self.max.y - self.min.y),
            0.5 * (self.max.z - self.min.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounding_box() {
        let bbox = BoundingBox::of_edges(&[]);
        assert_eq!(bbox, BoundingBox::zero());
    }

    #[test]
    fn test_bounding_box_contains_all_endpoints() {
        let edges = vec![
            Edge::from_coords(-1.0, 0.0, 2.0, 1.0, -3.0, 0.5),
            Edge::from_coords(0.5, 4.0, -2.0, 0.0, 0.0, 0.0),
        ];
        let bbox = BoundingBox::of_edges(&edges);

        for edge in &edges {
            for p in [&edge.p0, &edge.p1] {
                assert!(p.x >= bbox.min.x && p.x <= bbox.max.x);
                assert!(p.y >= bbox.min.y && p.y <= bbox.max.y);
                assert!(p.z >= bbox.min.z && p.z <= bbox.max.z);
            }
        }
    }

    #[test]
    fn test_bounding_box_extremes_are_attained() {
        let edges = vec![
            Edge::from_coords(-1.0, 0.0, 2.0, 1.0, -3.0, 0.5),
            Edge::from_coords(0.5, 4.0, -2.0, 0.0, 0.0, 0.0),
        ];
        let bbox = BoundingBox::of_edges(&edges);

        assert_eq!(bbox.min, Point3::new(-1.0, -3.0, -2.0));
        assert_eq!(bbox.max, Point3::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn test_center_and_half_extents() {
        let edges = vec![Edge::from_coords(-2.0, 0.0, 0.0, 4.0, 2.0, 6.0)];
        let bbox = BoundingBox::of_edges(&edges);
        assert_eq!(bbox.center(), Point3::new(1.0, 1.0, 3.0));
        assert_eq!(bbox.half_extents(), (3.0, 1.0, 3.0));
    }
}
