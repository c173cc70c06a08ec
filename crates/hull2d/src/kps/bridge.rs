//! Expected-linear search for the upper-hull edge crossing a vertical line.
//!
//! The marriage-before-conquest primitive: pair the points arbitrarily,
//! take the median pair slope, probe with the supporting line of that
//! slope, and either read the bridge off the contact points or discard a
//! quarter of the candidates and repeat. A pair with equal x-coordinates
//! is a distinguished case (its lower point can never reach the upper
//! hull), not a numeric slope.
//!
//! Support values are computed as `y·Δx − x·Δy` against the median pair's
//! chord instead of `y − (Δy/Δx)·x`, so contact ties are detected without
//! division rounding; on integer-valued inputs the probe is exact.

use nalgebra::Vector2;
use rand::Rng;

use crate::error::HullError;
use crate::select::quickselect_by;

/// Pair of candidates ordered by ascending x, with the slope of its chord.
#[derive(Clone, Copy, Debug)]
struct SlopedPair {
    left: Vector2<f64>,
    right: Vector2<f64>,
    slope: f64,
}

/// Upper-hull edge `(left, right)` of `points` with `left.x <= line < right.x`.
///
/// Expected O(n) over the whole elimination loop. Fails with
/// [`HullError::NoBridgeFound`] when a round produces no usable slope
/// (every surviving pair shares an x-coordinate).
pub fn find_bridge<R: Rng>(
    points: &[Vector2<f64>],
    line: f64,
    rng: &mut R,
) -> Result<(Vector2<f64>, Vector2<f64>), HullError> {
    let mut pts = points.to_vec();
    loop {
        if pts.len() < 2 {
            return Err(HullError::NoBridgeFound);
        }
        if pts.len() == 2 {
            let (a, b) = (pts[0], pts[1]);
            if a.x == b.x {
                // A vertical pair cannot span the line.
                return Err(HullError::NoBridgeFound);
            }
            return Ok(if a.x < b.x { (a, b) } else { (b, a) });
        }

        let mut candidates: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
        let mut pairs: Vec<SlopedPair> = Vec::with_capacity(pts.len() / 2);
        let chunks = pts.chunks_exact(2);
        if let [odd] = chunks.remainder() {
            candidates.push(*odd);
        }
        for chunk in chunks {
            let (a, b) = (chunk[0], chunk[1]);
            if a.x == b.x {
                // Only the higher point of a vertical pair can be on the
                // upper hull.
                candidates.push(if a.y > b.y { a } else { b });
                continue;
            }
            let (left, right) = if a.x < b.x { (a, b) } else { (b, a) };
            pairs.push(SlopedPair {
                left,
                right,
                slope: (left.y - right.y) / (left.x - right.x),
            });
        }
        if pairs.is_empty() {
            return Err(HullError::NoBridgeFound);
        }

        let rank = (pairs.len() - 1) / 2;
        let mut by_slope = pairs.clone();
        let med = match quickselect_by(&mut by_slope, rank, rng, |a, b| {
            a.slope
                .partial_cmp(&b.slope)
                .unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(p) => p,
            Err(e) => return Err(e.into()),
        };

        // Supporting line of the median slope. Contacts maximize
        // y·Δx − x·Δy (Δx > 0), the division-free form of y − m·x.
        let dx = med.right.x - med.left.x;
        let dy = med.right.y - med.left.y;
        let support = |p: Vector2<f64>| p.y * dx - p.x * dy;
        let mut best = f64::NEG_INFINITY;
        for &p in &pts {
            let v = support(p);
            if v > best {
                best = v;
            }
        }
        let mut pk = pts[0];
        let mut pm = pts[0];
        let mut seen = false;
        for &p in &pts {
            if support(p) == best {
                if !seen || p.x < pk.x {
                    pk = p;
                }
                if !seen || p.x > pm.x {
                    pm = p;
                }
                seen = true;
            }
        }

        if pk.x <= line && pm.x > line {
            return Ok((pk, pm));
        }
        if pm.x <= line {
            // Contact left of the line: the bridge slope is smaller than
            // the median, so the left point of every pair with slope >=
            // median is out.
            for pr in &pairs {
                if pr.slope < med.slope {
                    candidates.push(pr.left);
                    candidates.push(pr.right);
                } else {
                    candidates.push(pr.right);
                }
            }
        } else {
            // Contact right of the line: mirror case, the right point of
            // every pair with slope <= median is out.
            for pr in &pairs {
                if pr.slope > med.slope {
                    candidates.push(pr.left);
                    candidates.push(pr.right);
                } else {
                    candidates.push(pr.left);
                }
            }
        }
        pts = candidates;
    }
}
