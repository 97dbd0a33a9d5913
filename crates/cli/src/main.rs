// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

mod console;
mod delay;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_hal::delay::DelayNs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

use sol_config::SketchConfig;
use sol_sketch::{LineCounter, Sketch};

use crate::console::Console;
use crate::delay::ThreadSleepDelay;

const EXIT_OK: u8 = 0;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Runs the Sol-1 summation sketch with stdout as its serial console",
    long_about = None
)]
struct Cli {
    /// Path to the sketch config (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pause before each loop iteration in milliseconds (default: 500)
    #[arg(long)]
    interval_ms: Option<u32>,

    /// Stop after this many loop iterations (default: run forever)
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Console baud rate (default: 9600)
    #[arg(long)]
    baud: Option<u32>,

    /// Drop console output past this size, e.g. "4096" or "512B"
    #[arg(long)]
    max_console_bytes: Option<String>,

    /// Log every loop iteration
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is the sketch's console.
    let level = if cli.trace {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    let stdout = std::io::stdout();
    match run(&config, stdout.lock()) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

/// Config file (or defaults) with command-line overrides applied on top.
fn load_config(cli: &Cli) -> Result<SketchConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading sketch config: {:?}", path);
            SketchConfig::from_file(path)?
        }
        None => SketchConfig::default(),
    };

    if let Some(baud) = cli.baud {
        config.baud_rate = baud;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.interval_ms = interval_ms;
    }
    if cli.iterations.is_some() {
        config.iterations = cli.iterations;
    }
    if let Some(limit) = &cli.max_console_bytes {
        config.max_console_bytes = Some(limit.clone());
    }

    config.validate().context("Invalid sketch config")?;
    Ok(config)
}

fn run<W: Write>(config: &SketchConfig, out: W) -> Result<()> {
    let limit = config.console_limit()?;
    let mut console = LineCounter::new(Console::new(out, limit));
    let mut delay = ThreadSleepDelay;
    let mut sketch = Sketch::with_interval_ms(config.interval_ms);

    info!(
        baud_rate = config.baud_rate,
        interval_ms = config.interval_ms,
        "Console open"
    );

    if sketch.setup(&mut console).is_err() {
        return Err(console_error(&mut console));
    }
    debug!(result = sketch.result(), "Startup complete");

    let mut completed: u64 = 0;
    let mut limit_reported = false;
    while config.iterations.is_none_or(|n| completed < n) {
        delay.delay_ms(sketch.interval_ms());
        let reading = sketch
            .tick(&mut console)
            .map_err(|_| console_error(&mut console))?;
        completed += 1;
        debug!(
            a = reading.a,
            b = reading.b,
            result = reading.result,
            "Loop iteration {}",
            completed
        );

        if !limit_reported && console.get_ref().limit_exceeded() {
            warn!(
                "Console limit of {} bytes reached; further output is dropped",
                console.get_ref().bytes_written()
            );
            limit_reported = true;
        }
    }

    console
        .get_mut()
        .flush()
        .context("Failed to flush console")?;
    info!(
        iterations = completed,
        lines_submitted = console.lines(),
        lines_emitted = console.get_ref().lines_written(),
        bytes = console.get_ref().bytes_written(),
        "Sketch finished"
    );
    Ok(())
}

fn console_error<W: Write>(console: &mut LineCounter<Console<W>>) -> anyhow::Error {
    match console.get_mut().take_error() {
        Some(e) => anyhow::Error::new(e).context("Console write failed"),
        None => anyhow::anyhow!("Console write failed"),
    }
}
