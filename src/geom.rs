//! 2D geometry primitives: points and circles with inclusive membership
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;
use std::fmt;

/// A point in the plane.
///
/// # Example
///
/// ```
/// use tricirc::geom::Point;
///
/// let p = Point::new(1.0, -2.5);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), -2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a new point at (x, y)
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The x coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to another point
    ///
    /// # Example
    ///
    /// ```
    /// use tricirc::geom::Point;
    ///
    /// let p = Point::new(0.0, 0.0);
    /// let q = Point::new(3.0, 4.0);
    /// assert_eq!(p.dist_sq(&q), 25.0);
    /// ```
    #[inline]
    pub fn dist_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }
}

impl From<&Point> for String {
    fn from(p: &Point) -> String {
        format!("({}, {})", p.x, p.y)
    }
}

impl_display!(Point);

/// A circle with a center and a non-negative radius.
///
/// Membership is inclusive: points on the boundary are inside.
///
/// # Example
///
/// ```
/// use tricirc::geom::{Circle, Point};
///
/// let c = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
///
/// assert!(c.contains(&Point::new(1.0, 0.0)));
/// assert!(!c.contains(&Point::new(1.0001, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum CircleError {
    /// The radius was infinite or NaN
    NonFiniteRadius { radius: f64 },
    /// A center coordinate was infinite or NaN
    NonFiniteCenter { x: f64, y: f64 },
}

impl Circle {
    /// Create a new circle with the given center and radius.
    ///
    /// A negative radius is normalized by its absolute value. Fails if the
    /// radius or either center coordinate is non-finite.
    ///
    /// # Example
    ///
    /// ```
    /// use tricirc::geom::{Circle, Point};
    ///
    /// let c = Circle::new(Point::new(2.0, 3.0), -1.5).unwrap();
    /// assert_eq!(c.radius(), 1.5);
    ///
    /// assert!(Circle::new(Point::new(0.0, 0.0), f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn new(center: Point, radius: f64) -> Result<Self, CircleError> {
        if !radius.is_finite() {
            Err(CircleError::NonFiniteRadius { radius })
        } else if !center.x().is_finite() || !center.y().is_finite() {
            Err(CircleError::NonFiniteCenter {
                x: center.x(),
                y: center.y(),
            })
        } else {
            Ok(Circle::new_unchecked(center, radius.abs()))
        }
    }

    /// Create a new circle from raw center coordinates and a radius
    #[inline]
    pub fn from_xyr(x: f64, y: f64, radius: f64) -> Result<Self, CircleError> {
        Circle::new(Point::new(x, y), radius)
    }

    /// Creates a new Circle without checking whether the parameters are
    /// valid
    #[inline]
    pub fn new_unchecked(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// The center point
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The x coordinate of the center
    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x()
    }

    /// The y coordinate of the center
    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y()
    }

    /// The radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `true` if `p` is inside the circle, boundary included.
    ///
    /// Compares squared distances, so no square root is taken.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.dist_sq(&self.center) <= self.radius * self.radius
    }
}

/// Returns `true` if `p` is inside all three circles.
///
/// # Example
///
/// ```
/// use tricirc::geom::{in_all_three, Circle, Point};
///
/// let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
/// let c2 = Circle::from_xyr(1.0, 0.0, 1.0).unwrap();
/// let c3 = Circle::from_xyr(0.5, 0.5, 1.0).unwrap();
///
/// assert!(in_all_three(&Point::new(0.5, 0.0), &c1, &c2, &c3));
/// assert!(!in_all_three(&Point::new(-0.9, 0.0), &c1, &c2, &c3));
/// ```
#[inline]
pub fn in_all_three(p: &Point, c1: &Circle, c2: &Circle, c3: &Circle) -> bool {
    c1.contains(p) && c2.contains(p) && c3.contains(p)
}

impl From<&Circle> for String {
    fn from(c: &Circle) -> String {
        format!("Circle({}, r: {})", c.center, c.radius)
    }
}

impl_display!(Circle);

impl std::error::Error for CircleError {}

impl fmt::Display for CircleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteRadius { radius } => {
                write!(f, "non-finite radius: {}", radius)
            }
            Self::NonFiniteCenter { x, y } => {
                write!(f, "non-finite center: ({}, {})", x, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    #[test]
    fn new_keeps_center_and_radius() {
        let c = Circle::from_xyr(1.0, 2.0, 3.0).unwrap();
        assert::close(c.x(), 1.0, TOL);
        assert::close(c.y(), 2.0, TOL);
        assert::close(c.radius(), 3.0, TOL);
    }

    #[test]
    fn new_takes_abs_of_negative_radius() {
        let c = Circle::from_xyr(0.0, 0.0, -2.0).unwrap();
        assert::close(c.radius(), 2.0, TOL);
    }

    #[test]
    fn new_rejects_non_finite_radius() {
        assert!(Circle::from_xyr(0.0, 0.0, f64::INFINITY).is_err());
        assert!(Circle::from_xyr(0.0, 0.0, f64::NEG_INFINITY).is_err());
        assert!(Circle::from_xyr(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn new_rejects_non_finite_center() {
        assert!(Circle::from_xyr(f64::NAN, 0.0, 1.0).is_err());
        assert!(Circle::from_xyr(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn contains_is_inclusive_at_the_boundary() {
        let c = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        assert!(c.contains(&Point::new(1.0, 0.0)));
        assert!(!c.contains(&Point::new(1.0001, 0.0)));
        assert!(c.contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn contains_is_invariant_under_translation() {
        let p = Point::new(10.3, -2.1);
        let c = Circle::from_xyr(10.0, -2.0, 0.5).unwrap();
        let q = Point::new(0.3, -0.1);
        let d = Circle::from_xyr(0.0, 0.0, 0.5).unwrap();
        assert_eq!(c.contains(&p), d.contains(&q));
    }

    #[test]
    fn in_all_three_is_the_conjunction() {
        let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        let c2 = Circle::from_xyr(0.5, 0.0, 1.0).unwrap();
        let c3 = Circle::from_xyr(0.0, 0.5, 1.0).unwrap();
        let inside = Point::new(0.25, 0.25);
        let outside = Point::new(0.9, -0.4);

        assert!(in_all_three(&inside, &c1, &c2, &c3));
        // inside c1 and c2 but not c3
        assert!(c1.contains(&outside));
        assert!(c2.contains(&outside));
        assert!(!c3.contains(&outside));
        assert!(!in_all_three(&outside, &c1, &c2, &c3));
    }

    #[test]
    fn display_shows_center_and_radius() {
        let c = Circle::from_xyr(1.0, 1.0, 2.0).unwrap();
        assert_eq!(format!("{}", c), "Circle((1, 1), r: 2)");
    }
}
