//! Phase stepper over the Kirkpatrick–Seidel computation.
//!
//! The nominal path yields exactly three steps — upper hull, lower hull,
//! final hull — each computed on resumption, with the final step equal to
//! the one-shot result for the same pivot seed. With
//! [`KpsCfg::trace_bridges`] the stepper additionally surfaces every
//! bridge discovery and terminal segment, which is the granularity a
//! visualizer needs to animate the recursion itself.

use nalgebra::Vector2;
use rand::rngs::StdRng;

use super::{chain_edges, join_hulls, KpsCfg, UpperHullWalk, WalkEvent};
use crate::error::HullError;
use crate::geom::{flipped, validated};

/// One visualization step.
///
/// Hull phases carry the vertices computed so far; bridge and terminal
/// events carry exactly the two edge endpoints.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Completed upper hull, left to right.
    UpperHull(Vec<Vector2<f64>>),
    /// Completed lower hull, right to left.
    LowerHull(Vec<Vector2<f64>>),
    /// Final hull, upper then lower with shared extremes dropped.
    ConvexHull(Vec<Vector2<f64>>),
    /// A bridge edge found mid-recursion (trace mode only).
    BridgedPoints([Vector2<f64>; 2]),
    /// A segment emitted as a finished edge (trace mode only).
    ConnectedPoints([Vector2<f64>; 2]),
}

impl Step {
    /// Point payload of the step, regardless of phase.
    pub fn points(&self) -> &[Vector2<f64>] {
        match self {
            Step::UpperHull(p) | Step::LowerHull(p) | Step::ConvexHull(p) => p.as_slice(),
            Step::BridgedPoints(p) | Step::ConnectedPoints(p) => p.as_slice(),
        }
    }
}

enum Phase {
    Upper {
        walk: UpperHullWalk,
        edges: Vec<(Vector2<f64>, Vector2<f64>)>,
    },
    Lower {
        upper: Vec<Vector2<f64>>,
        walk: UpperHullWalk,
        edges: Vec<(Vector2<f64>, Vector2<f64>)>,
    },
    Join {
        upper: Vec<Vector2<f64>>,
        lower: Vec<Vector2<f64>>,
    },
    Done,
}

/// Resumable Kirkpatrick–Seidel stepper.
///
/// A fused iterator: exhausted (or failed) steppers keep returning `None`.
/// Restart by constructing a new instance; no cleanup is needed on
/// abandonment.
pub struct KpsStepper {
    flipped_points: Vec<Vector2<f64>>,
    trace: bool,
    rng: StdRng,
    phase: Phase,
}

impl KpsStepper {
    /// Validate the input and park before the upper-hull phase.
    pub fn new(points: &[Vector2<f64>], cfg: KpsCfg) -> Result<Self, HullError> {
        let pts = validated(points)?;
        let walk = UpperHullWalk::new(&pts)?;
        Ok(Self {
            flipped_points: flipped(&pts),
            trace: cfg.trace_bridges,
            rng: cfg.rng(),
            phase: Phase::Upper {
                walk,
                edges: Vec::new(),
            },
        })
    }

    fn trace_step(&self, ev: WalkEvent, flip: bool) -> Option<Step> {
        if !self.trace {
            return None;
        }
        let (l, r) = ev.endpoints();
        let pair = if flip { [-l, -r] } else { [l, r] };
        Some(match ev {
            WalkEvent::Bridge { .. } => Step::BridgedPoints(pair),
            WalkEvent::Edge { .. } => Step::ConnectedPoints(pair),
        })
    }
}

impl Iterator for KpsStepper {
    type Item = Result<Step, HullError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Take the phase out; error paths leave the stepper Done.
            match std::mem::replace(&mut self.phase, Phase::Done) {
                Phase::Upper { mut walk, mut edges } => match walk.step(&mut self.rng) {
                    Some(Ok(ev)) => {
                        edges.push(ev.endpoints());
                        let step = self.trace_step(ev, false);
                        self.phase = Phase::Upper { walk, edges };
                        if let Some(s) = step {
                            return Some(Ok(s));
                        }
                    }
                    Some(Err(e)) => return Some(Err(e)),
                    None => {
                        let upper = chain_edges(edges);
                        let walk = match UpperHullWalk::new(&self.flipped_points) {
                            Ok(w) => w,
                            Err(e) => return Some(Err(e)),
                        };
                        self.phase = Phase::Lower {
                            upper: upper.clone(),
                            walk,
                            edges: Vec::new(),
                        };
                        return Some(Ok(Step::UpperHull(upper)));
                    }
                },
                Phase::Lower {
                    upper,
                    mut walk,
                    mut edges,
                } => match walk.step(&mut self.rng) {
                    Some(Ok(ev)) => {
                        edges.push(ev.endpoints());
                        // Trace events are reported in original coordinates.
                        let step = self.trace_step(ev, true);
                        self.phase = Phase::Lower { upper, walk, edges };
                        if let Some(s) = step {
                            return Some(Ok(s));
                        }
                    }
                    Some(Err(e)) => return Some(Err(e)),
                    None => {
                        let lower = flipped(&chain_edges(edges));
                        self.phase = Phase::Join {
                            upper,
                            lower: lower.clone(),
                        };
                        return Some(Ok(Step::LowerHull(lower)));
                    }
                },
                Phase::Join { upper, lower } => {
                    return Some(Ok(Step::ConvexHull(join_hulls(upper, lower))));
                }
                Phase::Done => return None,
            }
        }
    }
}
