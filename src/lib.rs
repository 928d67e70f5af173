//! Monte Carlo estimation of the area of the intersection of three circles.
//!
//! The estimator draws uniform points from a bounding rectangle derived from
//! the circles under one of two policies ([`mc::BoundingPolicy::Wide`] is the
//! union box, [`mc::BoundingPolicy::Narrow`] an inner box leaning toward the
//! intersection) and scales the hit ratio by the rectangle area. The
//! [`exact`] module carries the analytic area the estimates converge to, and
//! [`experiment`] sweeps a schedule of sample counts to produce convergence
//! series for the [`sink`] stage to persist.
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use tricirc::prelude::*;
//!
//! let [c1, c2, c3] = reference_circles();
//! let mut rng = SmallRng::seed_from_u64(0xC1BC);
//!
//! let estimate =
//!     estimate_area(&c1, &c2, &c3, BoundingPolicy::Narrow, 100_000, &mut rng)
//!         .unwrap();
//! let exact = exact_intersection_area(&c1, &c2, &c3);
//!
//! assert!((estimate - exact).abs() < 0.05);
//! ```
#![warn(missing_debug_implementations)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod exact;
pub mod experiment;
pub mod geom;
pub mod mc;
pub mod prelude;
pub mod sink;

/// Implements Display for a type with `From<&T> for String`
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
