//! Planar convex hulls via gift wrapping and marriage-before-conquest.
//!
//! Two independent engines over the same point-set vocabulary:
//! - `jarvis`: Jarvis March, O(n·h), plus a per-vertex resumable walk.
//! - `kps`: Kirkpatrick–Seidel, O(n log h) upper/lower bridge recursion,
//!   plus a per-phase resumable stepper for visualization.
//!
//! The core is pure: algorithms copy their input into owned working
//! buffers, hold no module-level state, and perform no I/O. Randomized
//! pivot selection is the only nondeterminism and is seedable everywhere
//! (`KpsCfg::pivot_seed`, `scatter::ReplayToken`).

pub mod api;
pub mod error;
pub mod geom;
pub mod jarvis;
pub mod kps;
pub mod scatter;
pub mod select;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Points are plain nalgebra vectors; exact coordinate equality throughout.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{HullError, SelectError};
    pub use crate::geom::{
        all_collinear, distance, flipped, hull_contains, orientation, polygon_area,
    };
    pub use crate::jarvis::{jarvis_march, JarvisMarch};
    pub use crate::kps::{kps, kps_with, KpsCfg, KpsStepper, Step};
    pub use crate::scatter::{draw_points, Region, ReplayToken, ScatterCfg};
    pub use crate::select::{quickselect, quickselect_by};
    pub use nalgebra::Vector2 as Vec2;
}
