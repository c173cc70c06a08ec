//! Kirkpatrick–Seidel convex hull (marriage-before-conquest).
//!
//! The upper hull is built by finding bridge edges before recursing
//! ([`find_bridge`] + [`UpperHullWalk`]), O(n log h); the lower hull is the
//! upper hull of the point-reflected set, mapped back. A monotone-chain
//! scan ([`upper_hull_chain`]) is kept as the O(n log n) cross-check path.
//!
//! Randomized pivots only affect running time, never the result; every
//! entry point takes a seed through [`KpsCfg`] so tests can pin the pivot
//! sequence.

mod bridge;
mod stepper;

pub use bridge::find_bridge;
pub use stepper::{KpsStepper, Step};

use std::cmp::Ordering;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::HullError;
use crate::geom::{flipped, orientation, validated};
use crate::select::quickselect_by;

#[cfg(test)]
mod tests;

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct KpsCfg {
    /// Seed for quickselect pivots. `None` draws from OS entropy; results
    /// are identical either way, only the partition order changes.
    pub pivot_seed: Option<u64>,
    /// Stepper only: additionally yield every bridge discovery
    /// ([`Step::BridgedPoints`]) and terminal segment
    /// ([`Step::ConnectedPoints`]) during the hull phases.
    pub trace_bridges: bool,
}

impl KpsCfg {
    pub(crate) fn rng(&self) -> StdRng {
        match self.pivot_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Upper hull by monotone-chain scan, O(n log n).
///
/// Sorts by (x, y) and pops whenever the turn is not strictly convex, so
/// exactly-collinear interior points never survive. Baseline path; the
/// bridge recursion is the production one.
pub fn upper_hull_chain(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup();
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while upper.len() >= 2
            && orientation(upper[upper.len() - 2], upper[upper.len() - 1], p) >= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }
    upper
}

/// One event of [`UpperHullWalk`]: an upper-hull edge, as discovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WalkEvent {
    /// Bridge found across a segment's split line.
    Bridge {
        left: Vector2<f64>,
        right: Vector2<f64>,
    },
    /// Segment reduced to its two boundary vertices.
    Edge {
        left: Vector2<f64>,
        right: Vector2<f64>,
    },
}

impl WalkEvent {
    /// Edge endpoints, ordered by ascending x.
    #[inline]
    pub fn endpoints(&self) -> (Vector2<f64>, Vector2<f64>) {
        match *self {
            WalkEvent::Bridge { left, right } | WalkEvent::Edge { left, right } => (left, right),
        }
    }
}

/// Open x-range of the upper hull still to be resolved.
#[derive(Clone, Debug)]
struct Segment {
    left: Vector2<f64>,
    right: Vector2<f64>,
    points: Vec<Vector2<f64>>,
}

/// Explicit-stack form of the upper-hull recursion.
///
/// Each [`step`](Self::step) pops one pending x-segment and either emits
/// it as a finished edge (point set reduced to its two bounds) or finds
/// its bridge and pushes the unresolved sub-segments. Draining the walk
/// visits every upper-hull edge exactly once, in discovery order.
#[derive(Clone, Debug)]
pub struct UpperHullWalk {
    stack: Vec<Segment>,
}

impl UpperHullWalk {
    /// Seed the walk with the global x-extremes and the strict interior.
    ///
    /// Extreme ties break toward max y (the outside of the upper hull).
    pub fn new(points: &[Vector2<f64>]) -> Result<Self, HullError> {
        if points.len() < 2 {
            return Err(HullError::InsufficientPoints);
        }
        let mut pmin = points[0];
        let mut pmax = points[0];
        for &p in &points[1..] {
            if p.x < pmin.x || (p.x == pmin.x && p.y > pmin.y) {
                pmin = p;
            }
            if p.x > pmax.x || (p.x == pmax.x && p.y > pmax.y) {
                pmax = p;
            }
        }
        if pmin.x == pmax.x {
            return Err(HullError::DegenerateCollinear);
        }
        let mut pts = Vec::with_capacity(points.len());
        pts.push(pmin);
        pts.push(pmax);
        pts.extend(
            points
                .iter()
                .copied()
                .filter(|p| p.x > pmin.x && p.x < pmax.x),
        );
        Ok(Self {
            stack: vec![Segment {
                left: pmin,
                right: pmax,
                points: pts,
            }],
        })
    }

    /// Resolve one pending segment. `None` once the hull is complete.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Option<Result<WalkEvent, HullError>> {
        let mut seg = self.stack.pop()?;
        if seg.points.len() < 2 {
            return Some(Err(HullError::NoBridgeFound));
        }
        if seg.points.len() == 2 {
            return Some(Ok(WalkEvent::Edge {
                left: seg.left,
                right: seg.right,
            }));
        }
        // Split at the x of the segment's median point. Duplicate x values
        // can land that on the right bound, where the crossing condition
        // left.x <= v < right.x is unsatisfiable; the midpoint keeps it
        // valid there.
        let rank = seg.points.len() / 2;
        let median = match quickselect_by(&mut seg.points, rank, rng, cmp_x) {
            Ok(p) => p,
            Err(e) => return Some(Err(e.into())),
        };
        let mut split = median.x;
        if split >= seg.right.x {
            split = 0.5 * (seg.left.x + seg.right.x);
        }
        let (bl, br) = match find_bridge(&seg.points, split, rng) {
            Ok(b) => b,
            Err(e) => return Some(Err(e)),
        };
        // Right segment pushed first so the left one resolves first.
        if br != seg.right {
            let mut pts = vec![br];
            pts.extend(seg.points.iter().copied().filter(|p| p.x > br.x));
            self.stack.push(Segment {
                left: br,
                right: seg.right,
                points: pts,
            });
        }
        if bl != seg.left {
            let mut pts = vec![bl];
            pts.extend(seg.points.iter().copied().filter(|p| p.x < bl.x));
            self.stack.push(Segment {
                left: seg.left,
                right: bl,
                points: pts,
            });
        }
        Some(Ok(WalkEvent::Bridge {
            left: bl,
            right: br,
        }))
    }
}

/// Upper hull via the bridge recursion, O(n log h).
///
/// Input must span at least two distinct x values; collinear or undersized
/// sets error the same way the full engine does.
pub fn upper_hull<R: Rng>(
    points: &[Vector2<f64>],
    rng: &mut R,
) -> Result<Vec<Vector2<f64>>, HullError> {
    let mut walk = UpperHullWalk::new(points)?;
    let mut edges = Vec::new();
    while let Some(ev) = walk.step(rng) {
        edges.push(ev?.endpoints());
    }
    Ok(chain_edges(edges))
}

/// Order collected edges by x and chain them into a vertex list.
///
/// The walk's edges partition the segment's x-range, so consecutive edges
/// share an endpoint.
pub(crate) fn chain_edges(
    mut edges: Vec<(Vector2<f64>, Vector2<f64>)>,
) -> Vec<Vector2<f64>> {
    edges.sort_by(|a, b| a.0.x.partial_cmp(&b.0.x).unwrap_or(Ordering::Equal));
    let mut hull = Vec::with_capacity(edges.len() + 1);
    hull.push(edges[0].0);
    for &(_, right) in &edges {
        hull.push(right);
    }
    hull
}

/// Concatenate upper and lower hulls, dropping shared extreme points.
pub(crate) fn join_hulls(
    mut upper: Vec<Vector2<f64>>,
    mut lower: Vec<Vector2<f64>>,
) -> Vec<Vector2<f64>> {
    if upper.last() == lower.first() {
        upper.pop();
    }
    if upper.first() == lower.last() {
        lower.pop();
    }
    upper.extend(lower);
    upper
}

/// Convex hull by Kirkpatrick–Seidel with default configuration.
pub fn kps(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    kps_with(points, KpsCfg::default())
}

/// Convex hull by Kirkpatrick–Seidel.
///
/// Upper hull left-to-right, then lower hull right-to-left; the two share
/// at most the global x-extremes, which are de-duplicated before the
/// concatenation closes the polygon.
pub fn kps_with(points: &[Vector2<f64>], cfg: KpsCfg) -> Result<Vec<Vector2<f64>>, HullError> {
    let pts = validated(points)?;
    let mut rng = cfg.rng();
    let upper = upper_hull(&pts, &mut rng)?;
    let lower = flipped(&upper_hull(&flipped(&pts), &mut rng)?);
    Ok(join_hulls(upper, lower))
}

fn cmp_x(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
}

fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
