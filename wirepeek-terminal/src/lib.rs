/// Terminal frontend for wireframe previews
use std::io::{self, stdout, Write};

use crossterm::terminal;
use log::debug;
use wirepeek_core::WireframeModel;

pub mod renderer;

pub use renderer::TermCanvas;

/// One-shot preview: prepares a model and renders a single frame into
/// the current terminal.
pub struct TerminalPreview {
    model: WireframeModel,
}

impl TerminalPreview {
    pub fn new(mut model: WireframeModel) -> Self {
        model.prepare_drawing();
        Self { model }
    }

    /// Render the prepared model at the current terminal size. The last
    /// row is left free for the shell prompt.
    pub fn show(&self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let rows = rows.saturating_sub(1);
        debug!("terminal preview at {}x{} cells", cols, rows);

        let mut canvas = TermCanvas::new(cols as usize, rows as usize);
        let logical_height = canvas.logical_height() as u32;
        self.model.draw(&mut canvas, cols as u32, logical_height);

        let mut stdout = stdout();
        canvas.draw(&mut stdout)?;
        stdout.flush()
    }
}
