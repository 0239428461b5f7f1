/// Pixel-buffer canvas backed by an RGBA image
use image::{Rgba, RgbaImage};
use wirepeek_core::{Canvas, StrokeColor};

/// A `Canvas` that strokes paths into an in-memory RGBA image with
/// one-pixel Bresenham lines.
pub struct PixelCanvas {
    image: RgbaImage,
    stroke: Rgba<u8>,
    path: Vec<(f32, f32)>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            *pixel = background;
        }
        Self {
            image,
            stroke: Rgba([255, 255, 255, 255]),
            path: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
        {
            self.image.put_pixel(x as u32, y as u32, self.stroke);
        }
    }

    /// Bresenham line walk; endpoints outside the buffer are clipped
    /// per pixel.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl Canvas for PixelCanvas {
    fn set_stroke_color(&mut self, color: StrokeColor) {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.stroke = Rgba([byte(color.r), byte(color.g), byte(color.b), byte(color.a)]);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push((x, y));
    }

    fn stroke(&mut self) {
        // canvas y points up, image rows grow downward
        let h = self.image.height() as f32;
        let points: Vec<(i32, i32)> = self
            .path
            .iter()
            .map(|&(x, y)| (x.round() as i32, (h - 1.0 - y).round() as i32))
            .collect();
        for pair in points.windows(2) {
            self.draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1);
        }
    }
}
