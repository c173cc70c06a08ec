//! Planar primitives shared by both hull engines.
//!
//! Everything here is pure and epsilon-free: orientation and collinearity
//! use the exact sign of the cross product, equality is exact coordinate
//! equality. Tolerances are a caller concern; the hull algorithms inherit
//! whatever precision the inputs carry.

use nalgebra::Vector2;

use crate::error::HullError;

/// Signed cross product of `a − origin` and `b − origin`.
///
/// Positive: `b` is counter-clockwise from `a` about `origin`.
/// Zero: collinear. Negative: clockwise.
#[inline]
pub fn orientation(origin: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

/// Euclidean distance. Zero iff `a == b`.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Point reflection through the origin.
///
/// Reduces lower-hull computation to an upper-hull computation on the
/// reflected set.
#[inline]
pub fn flipped(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    points.iter().map(|p| -p).collect()
}

/// True when every point lies on a single line (or fewer than 3 points).
///
/// Anchors on the first point and the first point distinct from it, then
/// tests the exact cross-product sign against that pair.
pub fn all_collinear(points: &[Vector2<f64>]) -> bool {
    let Some((&first, rest)) = points.split_first() else {
        return true;
    };
    let Some(&anchor) = rest.iter().find(|p| **p != first) else {
        return true;
    };
    points.iter().all(|&p| orientation(first, anchor, p) == 0.0)
}

/// Signed shoelace area of a simple polygon (positive for CCW order).
pub fn polygon_area(verts: &[Vector2<f64>]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}

/// Membership test for a convex polygon, boundary inclusive.
///
/// Checks that `p` is on a consistent side of every edge, so it accepts
/// hulls in either rotational direction.
pub fn hull_contains(hull: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    if hull.len() < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let o = orientation(a, b, p);
        if o == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = o.signum();
        } else if o.signum() != sign {
            return false;
        }
    }
    true
}

/// Sorted (by x, then y) copy of `points` with exact duplicates removed.
pub(crate) fn dedup_points(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    pts.dedup();
    pts
}

/// Shared input validation for both engines.
///
/// Returns the deduplicated, x-sorted working set. Fewer than 3 distinct
/// points is `InsufficientPoints`; 3 or more on one line is
/// `DegenerateCollinear`.
pub(crate) fn validated(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    let pts = dedup_points(points);
    if pts.len() < 3 {
        return Err(HullError::InsufficientPoints);
    }
    if all_collinear(&pts) {
        return Err(HullError::DegenerateCollinear);
    }
    Ok(pts)
}
