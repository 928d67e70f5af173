//! Persistence of sample series in the two-column `step area` text layout
use crate::experiment::SampleSeries;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Consumer of finished series. The estimation stage hands its output here;
/// rendering and persistence stay behind this boundary.
pub trait SeriesSink {
    fn emit(&mut self, series: &SampleSeries) -> io::Result<()>;
}

/// Write a series as a header row `step area` followed by one
/// `<count> <estimate>` row per record.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tricirc::exact::reference_circles;
/// use tricirc::experiment::Experiment;
/// use tricirc::mc::BoundingPolicy;
/// use tricirc::sink::write_series;
///
/// let experiment =
///     Experiment::new(reference_circles(), vec![10, 20]).unwrap();
/// let mut rng = SmallRng::seed_from_u64(1);
/// let series = experiment.run_policy(BoundingPolicy::Wide, &mut rng).unwrap();
///
/// let mut buf: Vec<u8> = Vec::new();
/// write_series(&mut buf, &series).unwrap();
/// assert!(String::from_utf8(buf).unwrap().starts_with("step area\n10 "));
/// ```
pub fn write_series<W: Write>(
    mut w: W,
    series: &SampleSeries,
) -> io::Result<()> {
    writeln!(w, "step area")?;
    for record in series {
        writeln!(w, "{} {}", record.n, record.estimate)?;
    }
    Ok(())
}

/// Sink writing one text file per policy (`wide_data.txt`,
/// `narrow_data.txt`) under a directory.
#[derive(Debug, Clone)]
pub struct TextFileSink {
    dir: PathBuf,
}

impl TextFileSink {
    /// Create a sink writing into `dir`. The directory must exist.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        TextFileSink { dir: dir.into() }
    }

    /// The path a series for `series.policy()` would be written to
    pub fn path_for(&self, series: &SampleSeries) -> PathBuf {
        self.dir
            .join(format!("{}_data.txt", series.policy().name()))
    }

    /// The output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SeriesSink for TextFileSink {
    fn emit(&mut self, series: &SampleSeries) -> io::Result<()> {
        let file = File::create(self.path_for(series))?;
        let mut w = BufWriter::new(file);
        write_series(&mut w, series)?;
        w.flush()
    }
}
