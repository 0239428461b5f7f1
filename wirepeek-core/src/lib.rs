/// Wirepeek Core Library - wireframe preview geometry pipeline
///
/// This library provides the stateless core of the preview generator:
/// STL edge loading, bounding-box normalization, fixed-view projection,
/// painter's-algorithm depth sorting, and rendering through an abstract
/// path-stroking canvas.

pub mod canvas;
pub mod geometry;
pub mod model;
pub mod projection;
pub mod stl;

// Re-export commonly used types
pub use canvas::{Canvas, StrokeColor};
pub use geometry::{BoundingBox, Edge};
pub use model::WireframeModel;
pub use stl::StlError;
