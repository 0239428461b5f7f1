/// Wireframe model and its draw-preparation pipeline
use std::cmp::Ordering;

use log::{debug, warn};
use nalgebra::{Point3, Vector3};

use crate::canvas::{Canvas, StrokeColor};
use crate::geometry::{BoundingBox, Edge};
use crate::projection;

/// Fraction of the viewport height used as the uniform screen scale.
/// Height on both axes, so models keep their size across aspect ratios.
const SCREEN_SCALE: f32 = 0.42;

/// A set of edges plus the derived state needed to draw them as a
/// shaded wireframe preview.
///
/// `prepare_drawing` normalizes and projects the edges *in place* and is
/// therefore single-shot: preparing the same model twice re-centers and
/// re-scales coordinates that were already normalized. Load fresh edges
/// (or clone the model before preparing) if more than one preparation is
/// needed.
#[derive(Clone)]
pub struct WireframeModel {
    edges: Vec<Edge>,
    /// Depth-sorted draw order as indices into `edges`; rebuilt from
    /// scratch on every `prepare_drawing`.
    order: Vec<usize>,
    bbox: BoundingBox,
    /// Normalization frame: model-space center and half extents of the
    /// last computed bounding box.
    center: Point3<f32>,
    half_extents: Vector3<f32>,
}

impl WireframeModel {
    pub fn new() -> Self {
        Self::from_edges(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_edges(Vec::with_capacity(capacity))
    }

    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self {
            edges,
            order: Vec::new(),
            bbox: BoundingBox::zero(),
            center: Point3::origin(),
            half_extents: Vector3::zeros(),
        }
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Depth-sorted draw order, farthest edge first. Empty until
    /// `prepare_drawing` has run.
    pub fn draw_order(&self) -> &[usize] {
        &self.order
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Model-space center of the last normalization, the origin the
    /// edges were re-centered on.
    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    /// Half extents of the last computed bounding box.
    pub fn half_extents(&self) -> Vector3<f32> {
        self.half_extents
    }

    /// Create the 12-edge outline of an axis-aligned cube, for demos
    /// and tests.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let mut model = Self::with_capacity(12);

        // bottom face, top face, then the four verticals
        model.add_edge(Edge::from_coords(-h, -h, -h, h, -h, -h));
        model.add_edge(Edge::from_coords(h, -h, -h, h, -h, h));
        model.add_edge(Edge::from_coords(h, -h, h, -h, -h, h));
        model.add_edge(Edge::from_coords(-h, -h, h, -h, -h, -h));
        model.add_edge(Edge::from_coords(-h, h, -h, h, h, -h));
        model.add_edge(Edge::from_coords(h, h, -h, h, h, h));
        model.add_edge(Edge::from_coords(h, h, h, -h, h, h));
        model.add_edge(Edge::from_coords(-h, h, h, -h, h, -h));
        model.add_edge(Edge::from_coords(-h, -h, -h, -h, h, -h));
        model.add_edge(Edge::from_coords(h, -h, -h, h, h, -h));
        model.add_edge(Edge::from_coords(h, -h, h, h, h, h));
        model.add_edge(Edge::from_coords(-h, -h, h, -h, h, h));

        model
    }

    /// Run the full preparation pipeline: bounding box, coordinate
    /// fixup, projection, depth sort. Stages depend on each other and
    /// must run in exactly this order.
    pub fn prepare_drawing(&mut self) {
        self.find_bounding_box();
        self.fixup_coordinates();
        self.simple_projection();
        self.depth_sort();
        debug!(
            "prepared {} edges for drawing, bbox {:?}",
            self.edges.len(),
            self.bbox
        );
    }

    /// Scan all edges and store the componentwise bounding box.
    fn find_bounding_box(&mut self) {
        self.bbox = BoundingBox::of_edges(&self.edges);
    }

    /// Center the model and scale it uniformly into a -1..1 cube,
    /// deriving the per-edge hue/lum shading cues on the way.
    ///
    /// The cues pre-apply the fixed view rotation so that shading matches
    /// the projected orientation. Zero extents (flat or single-point
    /// models) contribute a neutral cue term instead of dividing by zero,
    /// and leave the scale at 1.
    fn fixup_coordinates(&mut self) {
        let (rys, ryc) = projection::view_angle_sin_cos();

        let (dx, dy, dz) = self.bbox.half_extents();
        let center = self.bbox.center();
        self.center = center;
        self.half_extents = Vector3::new(dx, dy, dz);

        let mut scl = dx.max(dy).max(dz);
        if scl > 0.0 {
            scl = 1.0 / scl;
        } else {
            warn!("degenerate model with zero extent, skipping rescale");
            scl = 1.0;
        }

        for e in &mut self.edges {
            e.hue = if dz > 0.0 {
                0.5 * ((e.p0.z - center.z) + (e.p1.z - center.z)) / dz
            } else {
                0.0
            };
            let ly = if dy > 0.0 {
                ((e.p0.y - center.y) + (e.p1.y - center.y)) / dy
            } else {
                0.0
            };
            let lx = if dx > 0.0 {
                ((e.p0.x - center.x) + (e.p1.x - center.x)) / dx
            } else {
                0.0
            };
            e.lum = 0.5 * (-rys * ly + ryc * lx);

            // destructive remap; the loaded coordinates do not survive
            e.p0 = Point3::new(
                (e.p0.x - center.x) * scl,
                (e.p0.y - center.y) * scl,
                (e.p0.z - center.z) * scl,
            );
            e.p1 = Point3::new(
                (e.p1.x - center.x) * scl,
                (e.p1.y - center.y) * scl,
                (e.p1.z - center.z) * scl,
            );
        }
    }

    /// Rotate every endpoint into the fixed preview orientation.
    fn simple_projection(&mut self) {
        for e in &mut self.edges {
            projection::project_point(&mut e.p0);
            projection::project_point(&mut e.p1);
        }
    }

    /// Order edges back to front by midpoint depth.
    ///
    /// Larger z is deeper in this model's convention, so the order is
    /// descending. The sort is stable: edges with equal depth keep their
    /// original relative order. Midpoint depth is only an approximation;
    /// crossing edges may still draw in either order.
    fn depth_sort(&mut self) {
        self.order.clear();
        self.order.reserve(self.edges.len());
        for (i, e) in self.edges.iter_mut().enumerate() {
            e.z = (e.p0.z + e.p1.z) / 2.0;
            self.order.push(i);
        }

        let edges = &self.edges;
        self.order
            .sort_by(|&a, &b| edges[b].z.partial_cmp(&edges[a].z).unwrap_or(Ordering::Equal));
    }

    /// Stroke all edges into `canvas`, farthest first, at the given
    /// viewport size. Read-only over the geometry; safe to call
    /// repeatedly with different sizes. A no-op until `prepare_drawing`
    /// has produced a draw order.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, width: u32, height: u32) {
        self.draw_until(canvas, width, height, || false);
    }

    /// Like `draw`, but polls `cancelled` between edges so a host can
    /// abandon a preview early. A partially stroked surface is left
    /// behind on cancellation; the host is expected to discard it.
    pub fn draw_until<C, F>(&self, canvas: &mut C, width: u32, height: u32, mut cancelled: F)
    where
        C: Canvas,
        F: FnMut() -> bool,
    {
        let xoff = width as f32 / 2.0;
        let yoff = height as f32 / 2.0;
        let scl = height as f32 * SCREEN_SCALE;

        for (drawn, &i) in self.order.iter().enumerate() {
            if cancelled() {
                debug!("draw cancelled after {} of {} edges", drawn, self.order.len());
                break;
            }
            let e = &self.edges[i];

            // red in the back shading toward yellow in the front,
            // darker in the back and lighter up close: FF0000 to FFFF00
            let lum = 0.7 - 0.4 * e.lum;
            let hue = (0.5 + 0.5 * e.hue).clamp(0.0, 1.0);
            canvas.set_stroke_color(StrokeColor::opaque(lum, lum * hue, 0.0));

            canvas.begin_path();
            canvas.move_to(e.p0.x * scl + xoff, e.p0.y * scl + yoff);
            canvas.line_to(e.p1.x * scl + xoff, e.p1.y * scl + yoff);
            canvas.stroke();
        }
    }
}

impl Default for WireframeModel {
    fn default() -> Self {
        Self::new()
    }
}
