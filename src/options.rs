use std::{
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use lifeframe::Config;

/// Generations run without a display when `--gens` is not given
const HEADLESS_GENERATIONS: usize = 1000;
const DEFAULT_FPS: u32 = 60;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses command line arguments, returning [`None`] if help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "present frames in the terminal");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("l", "live", "number of random activation draws", "COUNT");
        opts.optopt("s", "seed", "seed for the initial state", "SEED");
        opts.optopt("f", "fps", "frames per second, 0 to run unthrottled", "FPS");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeframe [options]"));
            Ok(None)
        } else {
            let args = Self { matches };
            args.validate()?;
            Ok(Some(args))
        }
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    /// Fails early on any option that would not parse later
    fn validate(&self) -> Result<()> {
        let config = self.config()?;
        anyhow::ensure!(config.width > 0, "width must be greater than zero");
        anyhow::ensure!(config.height > 0, "height must be greater than zero");
        anyhow::ensure!(
            i32::try_from(config.width).is_ok() && i32::try_from(config.height).is_ok(),
            "grid dimensions are too large"
        );
        self.opt::<u64>("seed")?;
        self.frame_interval()?;
        self.generations()?;
        Ok(())
    }

    fn opt<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.matches
            .opt_get(name)
            .with_context(|| format!("invalid value for --{name}"))
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn config(&self) -> Result<Config> {
        let width = self.opt("width")?.unwrap_or(Config::DEFAULT_WIDTH);
        let height = self.opt("height")?.unwrap_or(Config::DEFAULT_HEIGHT);
        let mut config = Config::with_size(width, height);
        if let Some(live) = self.opt("live")? {
            config.initial_live_count = live;
        }
        Ok(config)
    }

    /// The seed for the initial state, taken from the wall clock when not given
    pub fn seed(&self) -> Result<u64> {
        match self.opt("seed")? {
            Some(seed) => Ok(seed),
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .context("system clock is before the unix epoch")?;
                Ok(now.as_nanos() as u64)
            }
        }
    }

    /// Time between frames, or [`None`] to run as fast as possible
    pub fn frame_interval(&self) -> Result<Option<Duration>> {
        let fps: u32 = self.opt("fps")?.unwrap_or(DEFAULT_FPS);
        Ok((fps > 0).then(|| Duration::from_secs(1) / fps))
    }

    pub fn generations(&self) -> Result<usize> {
        let default = if self.console() {
            usize::MAX
        } else {
            HEADLESS_GENERATIONS
        };
        Ok(self.opt("gens")?.unwrap_or(default))
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
