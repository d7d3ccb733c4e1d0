use clap::Parser;

use mandelbrot_explorer::{DEFAULT_ITERATION_BUDGET, Fallback, Session, run_gui};

/// Interactive Mandelbrot viewport. W/A/S/D pan, I/K zoom, arrow keys
/// adjust the iteration budget.
#[derive(Debug, Parser)]
#[command(name = "gui")]
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

    /// Window width in pixels
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut session = Session::create(args.width, args.height, args.iterations)?;

    if !args.cpu {
        let policy = if args.fallback { Fallback::Reference } else { Fallback::HardFail };
        session.attach_accelerator(policy)?;
    }

    run_gui(session);
    Ok(())
}
