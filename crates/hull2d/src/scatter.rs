//! Reproducible random point scatters for tests, benches, and demos.
//!
//! Not part of the hull core's purity contract — this module feeds inputs
//! to it. Determinism uses a replay token `(seed, index)` mixed into a
//! single RNG, so a draw can be reproduced from two integers.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling region, centered on the origin.
#[derive(Clone, Copy, Debug)]
pub enum Region {
    /// Uniform over a disc.
    Disc { radius: f64 },
    /// Uniform over an axis-aligned rectangle.
    Rect { half_width: f64, half_height: f64 },
}

/// Scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub region: Region,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 50,
            region: Region::Disc { radius: 20.0 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a reproducible uniform scatter.
pub fn draw_points(cfg: &ScatterCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count).map(|_| sample(cfg.region, &mut rng)).collect()
}

/// One point of the region; disc draws reject from the bounding square.
fn sample<R: Rng>(region: Region, rng: &mut R) -> Vector2<f64> {
    match region {
        Region::Disc { radius } => {
            let r = radius.abs();
            loop {
                let x = (rng.gen::<f64>() * 2.0 - 1.0) * r;
                let y = (rng.gen::<f64>() * 2.0 - 1.0) * r;
                if x * x + y * y <= r * r {
                    return Vector2::new(x, y);
                }
            }
        }
        Region::Rect {
            half_width,
            half_height,
        } => Vector2::new(
            (rng.gen::<f64>() * 2.0 - 1.0) * half_width,
            (rng.gen::<f64>() * 2.0 - 1.0) * half_height,
        ),
    }
}
