//! Jarvis March (gift wrapping).
//!
//! The walk starts at the leftmost point and repeatedly takes the most
//! counter-clockwise candidate until it closes on the start vertex, O(n·h).
//! `JarvisMarch` is the resumable form: one vertex discovery per
//! resumption, yielding the partial hull for animation. The one-shot
//! [`jarvis_march`] drives the same walk, so both produce the identical
//! vertex sequence.

use nalgebra::Vector2;

use crate::error::HullError;
use crate::geom::{distance, orientation, validated};

/// Point with minimum x, ties broken by minimum y. `None` on empty input.
pub fn leftmost_point(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    points.iter().copied().reduce(|best, p| {
        if p.x < best.x || (p.x == best.x && p.y < best.y) {
            p
        } else {
            best
        }
    })
}

/// Next hull vertex after `current`.
///
/// Scans every point, replacing the candidate when the probe is strictly
/// more counter-clockwise, when no candidate has been chosen yet, or when
/// the probe is exactly collinear but farther away. The farthest-point
/// tie-break makes each hull edge extend to its true extreme and skips
/// interior collinear points.
pub fn find_next_vertex(
    points: &[Vector2<f64>],
    current: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let mut next = *points.first()?;
    for &p in &points[1..] {
        if p == current {
            continue;
        }
        let o = orientation(current, next, p);
        if o > 0.0
            || next == current
            || (o == 0.0 && distance(current, p) > distance(current, next))
        {
            next = p;
        }
    }
    Some(next)
}

/// Resumable gift-wrapping walk.
///
/// Each [`Iterator::next`] performs exactly one [`find_next_vertex`] call
/// and yields the partial hull discovered so far; the iterator is fused
/// once the walk returns to its start vertex. Restart by constructing a
/// new instance.
#[derive(Clone, Debug)]
pub struct JarvisMarch {
    points: Vec<Vector2<f64>>,
    start: Vector2<f64>,
    current: Vector2<f64>,
    hull: Vec<Vector2<f64>>,
    done: bool,
}

impl JarvisMarch {
    /// Validate the input and park the walk at the leftmost point.
    pub fn new(points: &[Vector2<f64>]) -> Result<Self, HullError> {
        let pts = validated(points)?;
        // The validated set is sorted by (x, y): front is the start vertex.
        let start = pts[0];
        Ok(Self {
            points: pts,
            start,
            current: start,
            hull: Vec::new(),
            done: false,
        })
    }

    /// Hull vertices discovered so far, in walk order.
    #[inline]
    pub fn hull(&self) -> &[Vector2<f64>] {
        &self.hull
    }

    /// True once the walk has closed on its start vertex.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Consume the walk, returning the hull accumulated so far.
    #[inline]
    pub fn into_hull(self) -> Vec<Vector2<f64>> {
        self.hull
    }

    /// One vertex discovery. False when the walk had already finished.
    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.hull.push(self.current);
        match find_next_vertex(&self.points, self.current) {
            Some(next) if next != self.start => self.current = next,
            _ => self.done = true,
        }
        true
    }
}

impl Iterator for JarvisMarch {
    type Item = Vec<Vector2<f64>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.hull.clone())
        } else {
            None
        }
    }
}

/// Convex hull by gift wrapping.
///
/// Walk order starts at the leftmost point; termination is guaranteed for
/// validated input because every step makes strict angular progress around
/// the convex boundary.
pub fn jarvis_march(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    let mut walk = JarvisMarch::new(points)?;
    while walk.advance() {}
    Ok(walk.into_hull())
}
