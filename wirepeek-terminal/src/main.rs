/// Wirepeek Terminal - render an STL wireframe into the terminal
///
/// Usage: wirepeek-terminal [stl-file]
///
/// Without an argument a demo cube is rendered.

use std::env;
use std::fs;
use std::io;

use wirepeek_core::{stl, WireframeModel};
use wirepeek_terminal::TerminalPreview;

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let model = if args.len() < 2 {
        eprintln!("No STL file provided, using default cube...");
        WireframeModel::cube(2.0)
    } else {
        let data = fs::read(&args[1]).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Failed to read STL file: {}", e),
            )
        })?;
        stl::load_model(&data).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to parse STL: {}", e),
            )
        })?
    };

    let preview = TerminalPreview::new(model);
    preview.show()
}
