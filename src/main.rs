//! Polyplot CLI
//!
//! Shows the polylines of a CSV file in a window, one polyline per row.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- drawing.csv        # zoom 10
//! cargo run -- drawing.csv 2.5    # zoom 2.5
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use polyplot::{
    render, run_event_loop, Frame, Invocation, LineLoader, MinifbWindow, Result, USAGE_MESSAGE,
};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (path, zoom) = match Invocation::from_args(&args)? {
        Invocation::Usage => {
            println!("{}", USAGE_MESSAGE);
            return Ok(());
        }
        Invocation::Plot { path, zoom } => (path, zoom),
    };

    let lines = LineLoader::new(zoom).load_path(&path)?;
    let frame = Frame::from_canvas(&render(&lines));

    let title = path.display().to_string();
    let mut window = MinifbWindow::open(&title, frame.width(), frame.height())?;
    run_event_loop(&mut window, &frame)?;

    Ok(())
}
