/// Cyclogon Terminal Demo - curve traced by a rolling square
///
/// Samples the curve once and draws it as a line strip until the user quits.
/// Usage: cyclogon-terminal [--config PATH] [--domain XMIN..XMAX@STEP] [--dump]
/// Controls:
///   - Q/ESC: Quit

use cyclogon_terminal::{build_strip, ViewerApp, ViewerConfig, ViewerError};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    domain: Option<String>,
    dump: bool,
}

fn parse_args() -> Result<Args, ViewerError> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(value_for(&arg, iter.next())?.into()),
            "--domain" => args.domain = Some(value_for(&arg, iter.next())?),
            "--dump" => args.dump = true,
            other => return Err(ViewerError::Usage(format!("unknown argument {other:?}"))),
        }
    }

    Ok(args)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ViewerError> {
    value.ok_or_else(|| ViewerError::Usage(format!("{flag} needs a value")))
}

fn main() -> Result<(), ViewerError> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CYCLOGON_LOG", "info")).init();

    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            ViewerConfig::load(path)?
        }
        None => ViewerConfig::default(),
    };
    if let Some(domain) = &args.domain {
        config.domain = domain.parse()?;
    }

    let strip = build_strip(&config)?;

    if args.dump {
        let mut out = io::stdout().lock();
        for point in strip.points() {
            writeln!(out, "{},{},{}", point.x, point.y, point.z)?;
        }
        return Ok(());
    }

    let mut app = ViewerApp::new(strip, config.view)?;
    app.run()?;

    Ok(())
}
