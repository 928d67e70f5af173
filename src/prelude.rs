//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::exact::{exact_intersection_area, reference_circles};
#[doc(no_inline)]
pub use crate::experiment::{
    default_counts, Experiment, ExperimentError, ExperimentOutcome,
    SampleRecord, SampleSeries,
};
#[doc(no_inline)]
pub use crate::geom::{in_all_three, Circle, CircleError, Point};
#[doc(no_inline)]
pub use crate::mc::{
    estimate_area, estimate_both, BoundingPolicy, BoundingRect, EstimateError,
};
#[doc(no_inline)]
pub use crate::sink::{write_series, SeriesSink, TextFileSink};
