/// Drawing surface abstraction
///
/// The renderer only needs to stroke single-segment paths in a given
/// color; everything else (pixel formats, terminals, vector output) is a
/// backend concern behind the `Canvas` trait.

/// An RGBA stroke color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl StrokeColor {
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Minimal path-stroking surface the wireframe renderer draws into.
///
/// Coordinates are in pixels with y pointing up; backends whose rows grow
/// downward flip internally. Calls arrive in the order set_stroke_color,
/// begin_path, move_to, line_to (one or more), stroke.
pub trait Canvas {
    fn set_stroke_color(&mut self, color: StrokeColor);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
}
