/// Example: roll a polygon with a chosen number of sides
///
/// Usage: cargo run --example polygon -- <sides> [phase]

use cyclogon_core::{Color, Coloring, CurveParams, CurveSampler, Cyclogon, OrthoView, BLUE};
use cyclogon_terminal::{ViewerApp, ViewerError};
use std::env;

fn main() -> Result<(), ViewerError> {
    let args: Vec<String> = env::args().collect();

    let sides = match args.get(1) {
        Some(arg) => arg
            .parse()
            .map_err(|_| ViewerError::Usage(format!("sides must be an integer, got {arg:?}")))?,
        None => {
            eprintln!("Usage: {} <sides> [phase]", args[0]);
            eprintln!("\nNo side count provided, using a hexagon...");
            6
        }
    };
    let phase = match args.get(2) {
        Some(arg) => arg
            .parse()
            .map_err(|_| ViewerError::Usage(format!("phase must be a number, got {arg:?}")))?,
        None => 0.0,
    };

    let curve = Cyclogon::new(CurveParams::new(sides, 1.0, phase))?;
    let strip = CurveSampler::new(curve)
        .with_coloring(Coloring::Gradient {
            start: Color::new(1.0, 0.0, 0.0),
            end: BLUE,
        })
        .sample(-10.0, 10.0, 0.02)?;

    println!("Sampled {} points", strip.len());

    let mut app = ViewerApp::new(strip, OrthoView::new(-6.0, 6.0, -3.0, 3.0))?;
    app.run()?;

    Ok(())
}
