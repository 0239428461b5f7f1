/// Cell-buffer canvas for terminal wireframe previews
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wirepeek_core::{Canvas, StrokeColor};

/// Character used for stroked cells.
const STROKE_CHAR: char = '#';

/// A `Canvas` over a grid of terminal cells.
///
/// Terminal cells are roughly twice as tall as wide, so the canvas
/// advertises a logical height of two pixels per row and halves y when
/// rasterizing; previews keep their aspect ratio that way.
pub struct TermCanvas {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
    stroke: Color,
    path: Vec<(f32, f32)>,
}

impl TermCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            stroke: Color::White,
            path: Vec::new(),
        }
    }

    /// Height in logical pixels, the value to pass to the model's draw.
    pub fn logical_height(&self) -> usize {
        self.height * 2
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    fn set_cell(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = Some(self.stroke);
        }
    }

    /// Bresenham walk in cell space.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_cell(x, y);
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

    /// Queue the cell buffer to a terminal writer, one colored character
    /// per cell.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some(color) => {
                        writer.queue(SetForegroundColor(color))?;
                        writer.queue(Print(STROKE_CHAR))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Canvas for TermCanvas {
    fn set_stroke_color(&mut self, color: StrokeColor) {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.stroke = Color::Rgb {
            r: byte(color.r),
            g: byte(color.g),
            b: byte(color.b),
        };
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
        // logical y points up at double resolution; rows grow downward
        let rows = self.height as f32;
        let points: Vec<(i32, i32)> = self
            .path
            .iter()
            .map(|&(x, y)| (x.round() as i32, (rows - 1.0 - y / 2.0).round() as i32))
            .collect();
        for pair in points.windows(2) {
            self.draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1);
        }
    }
}
