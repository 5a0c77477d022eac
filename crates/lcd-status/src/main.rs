// Desktop/tooling crate: unwrap/expect/panic acceptable in non-library code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod render;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use clap::Parser;
use lcd::device::DEFAULT_DEVICE;
use lcd::{DisplayConfig, Lcd, Transport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lcd-status")]
#[command(about = "Show the boot logo and a clock on the front-panel display", long_about = None)]
#[command(version)]
struct Cli {
    /// Read xres/yres/bpp from DIR instead of /proc/stb/lcd
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
    /// Display device node
    #[arg(long, default_value = DEFAULT_DEVICE)]
    device: PathBuf,
    /// Seconds between frames
    #[arg(long, value_name = "SECS", default_value_t = 1)]
    interval: u64,
    /// Stop after N frames, at least one (default: run forever)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    count: Option<u64>,
    /// Extra line shown under the clock
    #[arg(long)]
    text: Option<String>,
}

/// Outcome of a run, for the exit log.
#[derive(Debug, Default, PartialEq, Eq)]
struct Stats {
    frames: u64,
    failed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config_dir {
        Some(dir) => DisplayConfig::from_dir(dir),
        None => DisplayConfig::from_proc(),
    }
    .context("reading display geometry")?;

    let mut lcd = Lcd::open_at(&config, &cli.device)
        .with_context(|| format!("opening {}", cli.device.display()))?;
    tracing::info!(
        width = config.width,
        height = config.height,
        bpp = config.bpp,
        device = %cli.device.display(),
        "display ready"
    );

    let stats = run(&mut lcd, &cli, SystemTime::now);
    tracing::info!(frames = stats.frames, failed = stats.failed, "done");
    Ok(())
}

/// Draw and flush frames until `cli.count` is reached.
///
/// A failed flush is logged by [`Lcd::update`] and the next frame tries
/// again.
fn run<T: Transport>(lcd: &mut Lcd<T>, cli: &Cli, now: impl Fn() -> SystemTime) -> Stats {
    let mut stats = Stats::default();
    let interval = Duration::from_secs(cli.interval);

    loop {
        render::frame(lcd.surface_mut(), &render::clock(now()), cli.text.as_deref());
        if lcd.update().is_err() {
            stats.failed = stats.failed.saturating_add(1);
        }
        stats.frames = stats.frames.saturating_add(1);

        if cli.count.is_some_and(|count| stats.frames >= count) {
            return stats;
        }
        thread::sleep(interval);
    }
}
