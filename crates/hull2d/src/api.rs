//! Curated flat re-export surface.
//!
//! Callers that prefer a single import path can use this module instead of
//! reaching into the per-algorithm modules.

pub use crate::error::{HullError, SelectError};
pub use crate::geom::{
    all_collinear, distance, flipped, hull_contains, orientation, polygon_area,
};
pub use crate::jarvis::{find_next_vertex, jarvis_march, leftmost_point, JarvisMarch};
pub use crate::kps::{
    find_bridge, kps, kps_with, upper_hull, upper_hull_chain, KpsCfg, KpsStepper, Step,
    UpperHullWalk, WalkEvent,
};
pub use crate::scatter::{draw_points, Region, ReplayToken, ScatterCfg};
pub use crate::select::{quickselect, quickselect_by};
