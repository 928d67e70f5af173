//! Convergence experiment: estimate at a fixed schedule of sample counts
//! under both bounding policies and record the deviation from the analytic
//! area.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::exact::{exact_intersection_area, reference_circles};
use crate::geom::Circle;
use crate::mc::{estimate_area, BoundingPolicy, EstimateError};
use rand::Rng;
use std::fmt;

/// One experiment row: the sample count, the Monte Carlo estimate at that
/// count, and the signed deviation `exact - estimate`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct SampleRecord {
    pub n: usize,
    pub estimate: f64,
    pub deviation: f64,
}

/// The ordered records produced for one bounding policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct SampleSeries {
    policy: BoundingPolicy,
    exact: f64,
    records: Vec<SampleRecord>,
}

impl SampleSeries {
    pub(crate) fn new(
        policy: BoundingPolicy,
        exact: f64,
        records: Vec<SampleRecord>,
    ) -> Self {
        SampleSeries {
            policy,
            exact,
            records,
        }
    }

    /// The bounding policy the series was sampled under
    #[inline]
    pub fn policy(&self) -> BoundingPolicy {
        self.policy
    }

    /// The analytic reference area the deviations are measured against
    #[inline]
    pub fn exact(&self) -> f64 {
        self.exact
    }

    /// The records, ordered by sample count
    #[inline]
    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the series holds no records
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterator over the records
    pub fn iter(&self) -> std::slice::Iter<'_, SampleRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a SampleRecord;
    type IntoIter = std::slice::Iter<'a, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The two series of a full run, one per policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ExperimentOutcome {
    pub wide: SampleSeries,
    pub narrow: SampleSeries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum ExperimentError {
    /// The sample-count schedule was empty
    EmptyCounts,
    /// The sample-count schedule contained a zero
    ZeroCount { index: usize },
}

impl std::error::Error for ExperimentError {}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCounts => write!(f, "empty sample-count schedule"),
            Self::ZeroCount { index } => {
                write!(f, "zero sample count at schedule index {}", index)
            }
        }
    }
}

/// The default sample-count schedule: 100, 600, 1100, ... up to but
/// excluding 100000.
///
/// # Example
///
/// ```
/// use tricirc::experiment::default_counts;
///
/// let counts = default_counts();
/// assert_eq!(counts.first(), Some(&100));
/// assert_eq!(counts.last(), Some(&99_600));
/// ```
pub fn default_counts() -> Vec<usize> {
    (100..100_000).step_by(500).collect()
}

/// A configured convergence experiment over three circles.
///
/// The analytic reference area is computed once at construction; each run
/// maps the sample-count schedule to `(estimate, exact - estimate)` under a
/// policy.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tricirc::exact::reference_circles;
/// use tricirc::experiment::Experiment;
///
/// let experiment =
///     Experiment::new(reference_circles(), vec![100, 600, 1100]).unwrap();
/// let mut rng = SmallRng::seed_from_u64(0xFEED);
/// let outcome = experiment.run(&mut rng).unwrap();
///
/// assert_eq!(outcome.wide.len(), outcome.narrow.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Experiment {
    circles: [Circle; 3],
    counts: Vec<usize>,
    exact: f64,
}

impl Experiment {
    /// Create a new experiment over `circles` with the given sample-count
    /// schedule. Fails if the schedule is empty or contains a zero.
    pub fn new(
        circles: [Circle; 3],
        counts: Vec<usize>,
    ) -> Result<Self, ExperimentError> {
        if counts.is_empty() {
            return Err(ExperimentError::EmptyCounts);
        }
        if let Some(index) = counts.iter().position(|&n| n == 0) {
            return Err(ExperimentError::ZeroCount { index });
        }
        let exact =
            exact_intersection_area(&circles[0], &circles[1], &circles[2]);
        Ok(Experiment {
            circles,
            counts,
            exact,
        })
    }

    /// The reference experiment: [`reference_circles`] with the
    /// [`default_counts`] schedule.
    pub fn reference() -> Self {
        let circles = reference_circles();
        let exact =
            exact_intersection_area(&circles[0], &circles[1], &circles[2]);
        Experiment {
            circles,
            counts: default_counts(),
            exact,
        }
    }

    /// The circles under test
    #[inline]
    pub fn circles(&self) -> &[Circle; 3] {
        &self.circles
    }

    /// The sample-count schedule
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The analytic reference area
    #[inline]
    pub fn exact(&self) -> f64 {
        self.exact
    }

    /// Run the schedule under one policy.
    ///
    /// Every count must succeed for the series to be valid; the first
    /// estimator failure aborts the run with no partial series.
    pub fn run_policy<R: Rng>(
        &self,
        policy: BoundingPolicy,
        rng: &mut R,
    ) -> Result<SampleSeries, EstimateError> {
        let [c1, c2, c3] = &self.circles;
        let mut records = Vec::with_capacity(self.counts.len());
        for &n in &self.counts {
            let estimate = estimate_area(c1, c2, c3, policy, n, rng)?;
            records.push(SampleRecord {
                n,
                estimate,
                deviation: self.exact - estimate,
            });
        }
        Ok(SampleSeries::new(policy, self.exact, records))
    }

    /// Run the schedule under both policies
    pub fn run<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<ExperimentOutcome, EstimateError> {
        let wide = self.run_policy(BoundingPolicy::Wide, rng)?;
        let narrow = self.run_policy(BoundingPolicy::Narrow, rng)?;
        Ok(ExperimentOutcome { wide, narrow })
    }
}
