use std::time::Instant;

use anyhow::{Context, Result};
use lifeframe::{Grid, PixelBuffer};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod clock;
mod console;
mod host;
mod options;
mod stats;

use clock::FrameClock;
use host::{HeadlessHost, Host, HostCommand};
use stats::{Recorder, SwitchRecorder};

fn init_logging(console: bool) {
    // the console host owns the terminal, so stay quiet unless asked otherwise
    let default = if console { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Drives one frame per tick: advance the grid, redraw the pixels, present
fn run<H: Host>(
    host: &mut H,
    grid: &mut Grid,
    pixels: &mut PixelBuffer,
    stats: &mut impl Recorder,
    generations: usize,
    clock: &mut FrameClock,
) -> Result<()> {
    for _ in 0..generations {
        grid.advance();
        pixels.redraw(&grid.view());
        host.present(pixels)?;

        stats.record(grid.alive_count());
        if stats.has_report() {
            host.report(stats.report());
        }

        if let HostCommand::Exit = host.poll_events()? {
            break;
        }
        clock.wait();
    }
    Ok(())
}

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    init_logging(args.console());

    let config = args.config()?;
    let seed = args.seed()?;
    info!(
        width = config.width,
        height = config.height,
        initial_live_count = config.initial_live_count,
        seed,
        "starting simulation"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::create(config.width, config.height, config.initial_live_count, &mut rng);
    info!(
        alive = grid.alive_count(),
        cells = config.cell_count(),
        "seeded initial generation"
    );

    let mut pixels = PixelBuffer::for_view(&grid.view());
    let mut stats = SwitchRecorder::new(grid.alive_count(), args.stats_file().is_some());
    let mut clock = FrameClock::new(args.frame_interval()?);
    let generations = args.generations()?;
    let started = Instant::now();

    if args.console() {
        let mut host = console::ConsoleHost::new()?;
        run(&mut host, &mut grid, &mut pixels, &mut stats, generations, &mut clock)?;
    } else {
        let mut host = HeadlessHost::default();
        run(&mut host, &mut grid, &mut pixels, &mut stats, generations, &mut clock)?;
        info!(frames = host.frames(), "presented frames");
    }

    info!(
        generations = grid.generation(),
        alive = grid.alive_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation finished"
    );

    if let (Some(path), Some(csv)) = (args.stats_file(), stats.csv()) {
        csv.save(&path)
            .with_context(|| format!("failed to write stats to {path}"))?;
        info!(path = %path, "wrote stats");
    }

    Ok(())
}
