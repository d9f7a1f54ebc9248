use std::{
    fmt,
    time::{Duration, Instant},
};

/// How often a rate report becomes available
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    fn record(&mut self, alive: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Report;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub gens_per_sec: f64,
    pub generations: u64,
    pub alive: usize,
}
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.02}gen/s gens:{}, alive:{}",
            self.gens_per_sec, self.generations, self.alive
        )
    }
}

pub struct SimpleRecord {
    gens: u64,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> Report {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset for the next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        Report {
            gens_per_sec,
            generations: self.gens,
            alive: self.alive,
        }
    }
}

/// A [`SimpleRecord`] that also keeps every generation's timing for a CSV dump
pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: vec![(0, alive)],
            last: Instant::now(),
        }
    }

    pub fn write<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"gen,delta_us,alive\n")?;
        for (i, (delta, alive)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i, delta, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write(std::io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, alive));
        self.inner.record(alive);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> Report {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(alive: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(alive))
        } else {
            Self::Simple(SimpleRecord::new(alive))
        }
    }

    /// The CSV data, if this recorder keeps any
    pub fn csv(&self) -> Option<&CsvRecord> {
        match self {
            Self::Csv(r) => Some(r),
            Self::Simple(_) => None,
        }
    }
}
impl Recorder for SwitchRecorder {
    fn record(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.record(alive),
            Self::Simple(r) => r.record(alive),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> Report {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}
