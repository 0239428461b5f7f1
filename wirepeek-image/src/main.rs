/// Wirepeek Image CLI - render an STL file to a PNG preview
///
/// Usage: wirepeek-image <stl-file> <output-png> [size]

use std::env;
use std::fs;
use std::io;
use std::process;

use wirepeek_image::preview;

const DEFAULT_SIZE: u32 = 512;

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <stl-file> <output-png> [size]", args[0]);
        process::exit(2);
    }

    let size: u32 = if args.len() > 3 {
        args[3].parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid size {:?}: {}", args[3], e),
            )
        })?
    } else {
        DEFAULT_SIZE
    };

    let data = fs::read(&args[1]).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read STL file: {}", e),
        )
    })?;

    let image = preview::render_preview(&data, size, size).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to render preview: {}", e),
        )
    })?;

    image.save(&args[2]).map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Failed to write PNG: {}", e))
    })?;

    println!("Wrote {}x{} preview to {}", size, size, args[2]);
    Ok(())
}
