//! Closed-form area of the intersection of three circles
use crate::geom::{Circle, Point};
use itertools::Itertools;
use std::f64::consts::{PI, TAU};

// tolerance on squared distances (vertex dedup, membership)
const DIST_SQ_EPS: f64 = 1E-9;
// tolerance on linear distances (boundary classification, containment)
const DIST_EPS: f64 = 1E-7;

/// The reference three-circle configuration: `(1, 1, r=1)`,
/// `(1.5, 2, r=sqrt(5)/2)` and `(2, 1.5, r=sqrt(5)/2)`.
///
/// Its intersection area has the closed form
/// `0.25 pi + 1.25 asin(0.8) - 1`.
///
/// # Example
///
/// ```
/// use tricirc::exact::{exact_intersection_area, reference_circles};
///
/// let [c1, c2, c3] = reference_circles();
/// let area = exact_intersection_area(&c1, &c2, &c3);
/// let closed_form = 0.25 * std::f64::consts::PI + 1.25 * 0.8_f64.asin() - 1.0;
///
/// assert!((area - closed_form).abs() < 1E-9);
/// ```
pub fn reference_circles() -> [Circle; 3] {
    let r = 5.0_f64.sqrt() / 2.0;
    [
        Circle::new_unchecked(Point::new(1.0, 1.0), 1.0),
        Circle::new_unchecked(Point::new(1.5, 2.0), r),
        Circle::new_unchecked(Point::new(2.0, 1.5), r),
    ]
}

/// Analytic area of the intersection of three circles.
///
/// The boundary of the intersection is a convex circular polygon: its
/// vertices are the pairwise circle crossings that lie inside the remaining
/// circle, and its edges are arcs. The area is the shoelace area of the
/// vertex polygon plus one circular segment per boundary arc. With no
/// vertices the intersection is either empty or a disc nested inside the
/// other two.
///
/// Exact tangencies resolve through a small tolerance and may degenerate to
/// zero area.
pub fn exact_intersection_area(c1: &Circle, c2: &Circle, c3: &Circle) -> f64 {
    let cs = [*c1, *c2, *c3];

    let mut verts: Vec<Point> = Vec::new();
    for ((i, a), (j, b)) in cs.iter().enumerate().tuple_combinations::<(_, _)>()
    {
        let k = 3 - i - j;
        if let Some((p, q)) = crossing_points(a, b) {
            if inside(&cs[k], &p) {
                verts.push(p);
            }
            if inside(&cs[k], &q) {
                verts.push(q);
            }
        }
    }

    // tangencies and triple crossings report the same point more than once
    let mut uniq: Vec<Point> = Vec::new();
    for v in verts {
        if uniq.iter().all(|u| u.dist_sq(&v) > DIST_SQ_EPS) {
            uniq.push(v);
        }
    }

    if uniq.len() < 2 {
        return contained_disc_area(&cs);
    }

    // counterclockwise order about the centroid; the region is convex, so
    // the centroid of its boundary vertices is interior
    let m = uniq.len();
    let gx = uniq.iter().map(|p| p.x()).sum::<f64>() / m as f64;
    let gy = uniq.iter().map(|p| p.y()).sum::<f64>() / m as f64;
    uniq.sort_by(|p, q| {
        let ap = (p.y() - gy).atan2(p.x() - gx);
        let aq = (q.y() - gy).atan2(q.x() - gx);
        ap.total_cmp(&aq)
    });

    let mut area = 0.0;
    for t in 0..m {
        let p = &uniq[t];
        let q = &uniq[(t + 1) % m];
        area += 0.5 * p.x().mul_add(q.y(), -(q.x() * p.y()));
        area += arc_segment_area(&cs, p, q);
    }
    area
}

#[inline]
fn inside(c: &Circle, p: &Point) -> bool {
    p.dist_sq(&c.center()) <= c.radius().mul_add(c.radius(), DIST_SQ_EPS)
}

#[inline]
fn on_boundary(c: &Circle, p: &Point) -> bool {
    (p.dist_sq(&c.center()).sqrt() - c.radius()).abs() <= DIST_EPS
}

#[inline]
fn disc_within(inner: &Circle, outer: &Circle) -> bool {
    let d = inner.center().dist_sq(&outer.center()).sqrt();
    d + inner.radius() <= outer.radius() + DIST_EPS
}

// The two points where the boundaries of `a` and `b` cross. None for
// concentric, separate, or strictly nested circles; a tangency yields the
// same point twice.
fn crossing_points(a: &Circle, b: &Circle) -> Option<(Point, Point)> {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    let d2 = dx.mul_add(dx, dy * dy);
    if d2 <= DIST_SQ_EPS {
        return None;
    }
    let d = d2.sqrt();
    let (ra, rb) = (a.radius(), b.radius());
    if d > ra + rb || d < (ra - rb).abs() {
        return None;
    }

    let l = (d2 + ra.mul_add(ra, -(rb * rb))) / (2.0 * d);
    let h = ra.mul_add(ra, -(l * l)).max(0.0).sqrt();
    let (ux, uy) = (dx / d, dy / d);
    let (mx, my) = (l.mul_add(ux, a.x()), l.mul_add(uy, a.y()));
    Some((
        Point::new(h.mul_add(-uy, mx), h.mul_add(ux, my)),
        Point::new(h.mul_add(uy, mx), h.mul_add(-ux, my)),
    ))
}

// Area between the chord pq and the boundary arc from p to q, traversed
// counterclockwise. Of the circles through both endpoints, the boundary arc
// is the one whose midpoint stays inside the other discs.
fn arc_segment_area(cs: &[Circle; 3], p: &Point, q: &Point) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for c in cs {
        if !on_boundary(c, p) || !on_boundary(c, q) {
            continue;
        }
        let a1 = (p.y() - c.y()).atan2(p.x() - c.x());
        let a2 = (q.y() - c.y()).atan2(q.x() - c.x());
        let theta = (a2 - a1).rem_euclid(TAU);
        let mid_angle = 0.5_f64.mul_add(theta, a1);
        let mid = Point::new(
            c.radius().mul_add(mid_angle.cos(), c.x()),
            c.radius().mul_add(mid_angle.sin(), c.y()),
        );
        let worst = cs
            .iter()
            .map(|o| mid.dist_sq(&o.center()).sqrt() - o.radius())
            .fold(f64::MIN, f64::max);
        let segment = 0.5 * c.radius() * c.radius() * (theta - theta.sin());
        if best.map_or(true, |(w, _)| worst < w) {
            best = Some((worst, segment));
        }
    }
    best.map_or(0.0, |(_, segment)| segment)
}

// With no boundary vertices the intersection is either empty or a full disc
// nested inside the other two.
fn contained_disc_area(cs: &[Circle; 3]) -> f64 {
    'candidates: for (i, inner) in cs.iter().enumerate() {
        for (j, outer) in cs.iter().enumerate() {
            if i != j && !disc_within(inner, outer) {
                continue 'candidates;
            }
        }
        return PI * inner.radius() * inner.radius();
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1E-9;

    #[test]
    fn reference_configuration_matches_closed_form() {
        let [c1, c2, c3] = reference_circles();
        let area = exact_intersection_area(&c1, &c2, &c3);
        let closed_form = 0.25 * PI + 1.25 * 0.8_f64.asin() - 1.0;
        assert::close(area, closed_form, TOL);
    }

    #[test]
    fn reference_area_is_order_independent() {
        let [c1, c2, c3] = reference_circles();
        let a = exact_intersection_area(&c1, &c2, &c3);
        let b = exact_intersection_area(&c3, &c1, &c2);
        let c = exact_intersection_area(&c2, &c3, &c1);
        assert::close(a, b, TOL);
        assert::close(a, c, TOL);
    }

    #[test]
    fn disjoint_circles_have_zero_area() {
        let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        let c2 = Circle::from_xyr(10.0, 0.0, 1.0).unwrap();
        let c3 = Circle::from_xyr(0.0, 10.0, 1.0).unwrap();
        assert::close(exact_intersection_area(&c1, &c2, &c3), 0.0, TOL);
    }

    #[test]
    fn pairwise_overlap_without_common_region_is_zero() {
        let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        let c2 = Circle::from_xyr(1.8, 0.0, 1.0).unwrap();
        let c3 = Circle::from_xyr(0.9, 1.75, 1.0).unwrap();
        assert::close(exact_intersection_area(&c1, &c2, &c3), 0.0, TOL);
    }

    #[test]
    fn nested_discs_reduce_to_the_smallest() {
        let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        let c2 = Circle::from_xyr(0.1, 0.0, 2.0).unwrap();
        let c3 = Circle::from_xyr(0.0, 0.2, 3.0).unwrap();
        assert::close(exact_intersection_area(&c1, &c2, &c3), PI, TOL);
    }

    #[test]
    fn identical_circles_give_the_full_disc() {
        let c = Circle::from_xyr(2.0, -1.0, 1.5).unwrap();
        assert::close(
            exact_intersection_area(&c, &c, &c),
            PI * 1.5 * 1.5,
            TOL,
        );
    }

    #[test]
    fn lens_inside_a_large_circle_is_the_two_circle_lens() {
        let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        let c2 = Circle::from_xyr(1.0, 0.0, 1.0).unwrap();
        let c3 = Circle::from_xyr(0.5, 0.0, 10.0).unwrap();
        // lens of two unit circles with centers distance 1 apart:
        // 2 acos(1/2) - (1/2) sqrt(3)
        let lens = 2.0 * 0.5_f64.acos() - 0.5 * 3.0_f64.sqrt();
        assert_relative_eq!(
            exact_intersection_area(&c1, &c2, &c3),
            lens,
            epsilon = TOL
        );
    }

    #[test]
    fn symmetric_triple_matches_the_reuleaux_form() {
        // unit circles on an equilateral triangle with side 1; the common
        // region is bounded by three arcs and has the known closed form
        // (pi - sqrt(3)) / 2
        let h = 3.0_f64.sqrt() / 2.0;
        let c1 = Circle::from_xyr(0.0, 0.0, 1.0).unwrap();
        let c2 = Circle::from_xyr(1.0, 0.0, 1.0).unwrap();
        let c3 = Circle::from_xyr(0.5, h, 1.0).unwrap();
        let expected = 0.5 * (PI - 3.0_f64.sqrt());
        assert::close(exact_intersection_area(&c1, &c2, &c3), expected, TOL);
    }

    #[test]
    fn scaling_the_configuration_scales_the_area_quadratically() {
        let [c1, c2, c3] = reference_circles();
        let scale = |c: &Circle, s: f64| {
            Circle::from_xyr(c.x() * s, c.y() * s, c.radius() * s).unwrap()
        };
        let base = exact_intersection_area(&c1, &c2, &c3);
        let scaled = exact_intersection_area(
            &scale(&c1, 3.0),
            &scale(&c2, 3.0),
            &scale(&c3, 3.0),
        );
        assert::close(scaled, 9.0 * base, 1E-8);
    }
}
