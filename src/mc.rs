//! Rejection-sampling area estimator over a policy-derived bounding rectangle
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::{in_all_three, Circle, Point};
use rand::Rng;
use rand_distr::Uniform;
use std::fmt;

/// How the sampling rectangle is derived from the three circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BoundingPolicy {
    /// The bounding box of the union of the three circles
    Wide,
    /// An inner box leaning toward the intersection. Tight for circles with
    /// near-full pairwise overlap, but not guaranteed to contain the whole
    /// intersection for arbitrary configurations.
    Narrow,
}

impl BoundingPolicy {
    /// Lower-case name, used for labeling output
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BoundingPolicy::Wide => "wide",
            BoundingPolicy::Narrow => "narrow",
        }
    }
}

impl fmt::Display for BoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The axis-aligned sampling rectangle `[start_x, end_x] x [start_y, end_y]`.
///
/// Under the `Narrow` policy the interval ends may coincide or invert; the
/// extent methods take absolute values so the rectangle still has a
/// well-defined sampling area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct BoundingRect {
    start_x: f64,
    end_x: f64,
    start_y: f64,
    end_y: f64,
}

impl BoundingRect {
    /// Derive the sampling rectangle for three circles under a policy.
    ///
    /// `Wide` takes the min of `x - r` and the max of `x + r` over the
    /// circles (and likewise for y); `Narrow` swaps min and max.
    ///
    /// # Example
    ///
    /// ```
    /// use tricirc::mc::{BoundingPolicy, BoundingRect};
    /// use tricirc::geom::Circle;
    ///
    /// let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
    /// let c2 = Circle::from_xyr(1.0, 0.0, 1.0).unwrap();
    /// let c3 = Circle::from_xyr(0.5, 1.0, 1.0).unwrap();
    ///
    /// let wide = BoundingRect::enclosing(&c1, &c2, &c3, BoundingPolicy::Wide);
    /// let narrow = BoundingRect::enclosing(&c1, &c2, &c3, BoundingPolicy::Narrow);
    ///
    /// assert_eq!(wide.start_x(), -1.0);
    /// assert_eq!(wide.end_x(), 2.0);
    /// assert!(wide.contains(&narrow));
    /// ```
    pub fn enclosing(
        c1: &Circle,
        c2: &Circle,
        c3: &Circle,
        policy: BoundingPolicy,
    ) -> Self {
        let lo = |c: &Circle| (c.x() - c.radius(), c.y() - c.radius());
        let hi = |c: &Circle| (c.x() + c.radius(), c.y() + c.radius());
        let (lo1, lo2, lo3) = (lo(c1), lo(c2), lo(c3));
        let (hi1, hi2, hi3) = (hi(c1), hi(c2), hi(c3));

        match policy {
            BoundingPolicy::Wide => BoundingRect {
                start_x: lo1.0.min(lo2.0).min(lo3.0),
                end_x: hi1.0.max(hi2.0).max(hi3.0),
                start_y: lo1.1.min(lo2.1).min(lo3.1),
                end_y: hi1.1.max(hi2.1).max(hi3.1),
            },
            BoundingPolicy::Narrow => BoundingRect {
                start_x: lo1.0.max(lo2.0).max(lo3.0),
                end_x: hi1.0.min(hi2.0).min(hi3.0),
                start_y: lo1.1.max(lo2.1).max(lo3.1),
                end_y: hi1.1.min(hi2.1).min(hi3.1),
            },
        }
    }

    /// Start of the x interval
    #[inline]
    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    /// End of the x interval
    #[inline]
    pub fn end_x(&self) -> f64 {
        self.end_x
    }

    /// Start of the y interval
    #[inline]
    pub fn start_y(&self) -> f64 {
        self.start_y
    }

    /// End of the y interval
    #[inline]
    pub fn end_y(&self) -> f64 {
        self.end_y
    }

    /// Absolute width of the x interval
    #[inline]
    pub fn width(&self) -> f64 {
        (self.end_x - self.start_x).abs()
    }

    /// Absolute height of the y interval
    #[inline]
    pub fn height(&self) -> f64 {
        (self.end_y - self.start_y).abs()
    }

    /// Area of the rectangle
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns `true` if `other` lies within this rectangle coordinate-wise
    #[inline]
    pub fn contains(&self, other: &BoundingRect) -> bool {
        self.start_x <= other.start_x
            && self.end_x >= other.end_x
            && self.start_y <= other.start_y
            && self.end_y >= other.end_y
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum EstimateError {
    /// The requested sample count was zero
    NoSamples,
}

impl std::error::Error for EstimateError {}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSamples => write!(f, "cannot estimate from zero samples"),
        }
    }
}

// Closed-interval uniform over the rectangle edge. The interval may be
// degenerate (a == b) or inverted under the Narrow policy.
#[inline]
fn edge_distr(a: f64, b: f64) -> Uniform<f64> {
    Uniform::new_inclusive(a.min(b), a.max(b))
}

/// Estimate the area of the intersection of three circles by drawing `n`
/// uniform points from the policy's bounding rectangle and scaling the hit
/// ratio by the rectangle area.
///
/// Fails with [`EstimateError::NoSamples`] when `n` is zero.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tricirc::geom::Circle;
/// use tricirc::mc::{estimate_area, BoundingPolicy};
///
/// let c1 = Circle::from_xyr(1.0, 1.0, 1.0).unwrap();
/// let c2 = Circle::from_xyr(1.5, 2.0, 5.0_f64.sqrt() / 2.0).unwrap();
/// let c3 = Circle::from_xyr(2.0, 1.5, 5.0_f64.sqrt() / 2.0).unwrap();
///
/// let mut rng = SmallRng::seed_from_u64(0x1729);
/// let area =
///     estimate_area(&c1, &c2, &c3, BoundingPolicy::Wide, 10_000, &mut rng)
///         .unwrap();
///
/// assert!(area > 0.0);
/// ```
pub fn estimate_area<R: Rng>(
    c1: &Circle,
    c2: &Circle,
    c3: &Circle,
    policy: BoundingPolicy,
    n: usize,
    rng: &mut R,
) -> Result<f64, EstimateError> {
    if n == 0 {
        return Err(EstimateError::NoSamples);
    }

    let rect = BoundingRect::enclosing(c1, c2, c3, policy);
    let ux = edge_distr(rect.start_x(), rect.end_x());
    let uy = edge_distr(rect.start_y(), rect.end_y());

    let hits = (0..n)
        .filter(|_| {
            let p = Point::new(rng.sample(ux), rng.sample(uy));
            in_all_three(&p, c1, c2, c3)
        })
        .count();

    // hits/n must be a float ratio; integer division would floor to zero
    Ok(hits as f64 / n as f64 * rect.area())
}

/// Estimate under both policies with the same sample count.
///
/// Returns `(wide, narrow)`. The two estimates consume draws from the same
/// generator in sequence, so they are independent.
pub fn estimate_both<R: Rng>(
    c1: &Circle,
    c2: &Circle,
    c3: &Circle,
    n: usize,
    rng: &mut R,
) -> Result<(f64, f64), EstimateError> {
    let wide = estimate_area(c1, c2, c3, BoundingPolicy::Wide, n, rng)?;
    let narrow = estimate_area(c1, c2, c3, BoundingPolicy::Narrow, n, rng)?;
    Ok((wide, narrow))
}
