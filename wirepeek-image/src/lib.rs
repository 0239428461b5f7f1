/// Wirepeek Image - pixel-buffer preview backend
///
/// Implements the core `Canvas` seam over an RGBA image buffer and
/// provides the STL-to-image preview driver used by the CLI.

pub mod canvas;
pub mod preview;

pub use canvas::PixelCanvas;
pub use preview::{render_preview, render_preview_until, PreviewError};
