// Copyright (C) 2026 The ledctl project authors. Distributed under the 0BSD license.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use ledctl::{blocking, Config};
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LEDCTL_LOG";

/// Check and set the brightness of system LEDs.
///
/// Without arguments, lists every LED device with its current and maximum brightness.
#[derive(Debug, Parser)]
#[command(name = "ledctl", version)]
struct Args {
    /// LED device, e.g. 'input2::scrolllock'
    #[arg(long, default_value = "")]
    device: String,

    /// Requested brightness level for the LED device
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    level: i64,

    /// Ask systemd-logind to set the brightness
    #[cfg(all(feature = "logind", target_os = "linux"))]
    #[arg(long)]
    logind: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    List,
    Set { device: &'a str, level: i64 },
    Usage,
}

impl Args {
    fn mode(&self) -> Mode<'_> {
        match (self.device.is_empty(), self.level >= 0) {
            (true, false) => Mode::List,
            (false, true) => Mode::Set {
                device: &self.device,
                level: self.level,
            },
            _ => Mode::Usage,
        }
    }

    fn config(&self) -> Config {
        let config = Config::default();
        #[cfg(all(feature = "logind", target_os = "linux"))]
        let config = if self.logind {
            config.with_write_method(ledctl::WriteMethod::Logind)
        } else {
            config
        };
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<W: Write>(args: &Args, config: &Config, out: &mut W) -> Result<()> {
    let mode = args.mode();
    debug!(?mode, "running");
    match mode {
        Mode::List => write!(out, "{}", blocking::led_info(config)?)?,
        Mode::Set { device, level } => {
            writeln!(out, "{}", blocking::set_led_brightness(config, device, level)?)?
        }
        Mode::Usage => write!(out, "{}", Args::command().render_help())?,
    }
    Ok(())
}

/// Process status for the outcome of `run`, reporting any error on stderr.
fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{:#}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let result = run(&args, &args.config(), &mut io::stdout().lock());
    ExitCode::from(exit_status(result))
}
