use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use bitmaprle::{BitWrite, BitWriter};
use clap::Parser;

/// Convert an image into the raw 1-bit raster `bitmaprle -` consumes.
///
/// Rows are written to standard output top to bottom, MSB-first, with no
/// header. Pixels strictly darker than the threshold become 1 bits.
#[derive(Parser)]
#[command(name = "rasterize")]
struct Cli {
    /// Input image, any format the image crate can decode
    image: PathBuf,

    /// Luma cutoff, pixels below it count as black
    #[arg(short, long, default_value_t = 128)]
    threshold: u8,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let img = image::open(&cli.image).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.image.display());
        process::exit(1);
    });
    let gray = img.to_luma8();

    let stdout = io::stdout();
    let mut out = BitWriter::new(BufWriter::new(stdout.lock()));
    let result = gray
        .pixels()
        .try_for_each(|pixel| out.write_bit(pixel.0[0] < cli.threshold))
        .and_then(|()| out.close());
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    eprintln!("  {}x{} raster written", gray.width(), gray.height());
}
