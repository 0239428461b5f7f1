/// Preview driver: STL bytes in, rendered RGBA image out
use image::{Rgba, RgbaImage};
use log::info;
use thiserror::Error;
use wirepeek_core::stl::{self, StlError};

use crate::canvas::PixelCanvas;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("viewport must be non-empty, got {0}x{1}")]
    EmptyViewport(u32, u32),
    #[error(transparent)]
    Stl(#[from] StlError),
}

/// Parse an STL file and render its wireframe preview at the given size.
pub fn render_preview(data: &[u8], width: u32, height: u32) -> Result<RgbaImage, PreviewError> {
    render_preview_until(data, width, height, || false)
}

/// Like `render_preview`, but polls `cancelled` between edges. On
/// cancellation the partially drawn image is still returned; hosts that
/// cancel are expected to throw it away.
pub fn render_preview_until<F>(
    data: &[u8],
    width: u32,
    height: u32,
    cancelled: F,
) -> Result<RgbaImage, PreviewError>
where
    F: FnMut() -> bool,
{
    if width == 0 || height == 0 {
        return Err(PreviewError::EmptyViewport(width, height));
    }

    let mut model = stl::load_model(data)?;
    model.prepare_drawing();

    let mut canvas = PixelCanvas::new(width, height, BACKGROUND);
    model.draw_until(&mut canvas, width, height, cancelled);
    info!(
        "rendered {} edges at {}x{}",
        model.edges().len(),
        width,
        height
    );
    Ok(canvas.into_image())
}
