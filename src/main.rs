use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use mandelbrot_explorer::{DEFAULT_ITERATION_BUDGET, Fallback, Session, write_ppm};

/// Renders one Mandelbrot frame headlessly and writes it as a PPM image.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer")]
struct Args {
    /// Use the sequential CPU strategy instead of the parallel backend
    #[arg(long)]
    cpu: bool,

    /// Fall back to the CPU strategy if the parallel backend fails to start
    #[arg(long)]
    fallback: bool,

    /// Max number of iterations per pixel
    #[arg(short, long, default_value_t = DEFAULT_ITERATION_BUDGET)]
    iterations: u32,

    /// Frame width in pixels
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Output file
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut session = Session::create(args.width, args.height, args.iterations)?;

    if !args.cpu {
        let policy = if args.fallback { Fallback::Reference } else { Fallback::HardFail };
        session.attach_accelerator(policy)?;
    }

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", args.width, args.height);
    println!("Max iterations: {}", session.budget.get());
    println!("Strategy: {}", session.backend().label());

    let start = Instant::now();
    session.step();
    println!("Duration:   {:?}", start.elapsed());

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_ppm(session.buffer(), &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
