//! Compute both hulls of a reproducible scatter and walk the KPS stepper.
//!
//! Usage:
//!   cargo run -p hull2d --example hull_demo -- [count] [seed]

use hull2d::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let points = draw_points(
        &ScatterCfg {
            count,
            region: Region::Disc { radius: 20.0 },
        },
        ReplayToken { seed, index: 0 },
    );
    println!("{} points, seed {}", points.len(), seed);

    match jarvis_march(&points) {
        Ok(hull) => println!(
            "jarvis march: {} vertices, area {:.3}",
            hull.len(),
            polygon_area(&hull).abs()
        ),
        Err(e) => println!("jarvis march failed: {e}"),
    }

    let cfg = KpsCfg {
        pivot_seed: Some(seed),
        ..KpsCfg::default()
    };
    match kps_with(&points, cfg) {
        Ok(hull) => println!(
            "kirkpatrick-seidel: {} vertices, area {:.3}",
            hull.len(),
            polygon_area(&hull).abs()
        ),
        Err(e) => println!("kirkpatrick-seidel failed: {e}"),
    }

    match KpsStepper::new(&points, cfg) {
        Ok(stepper) => {
            for step in stepper {
                match step {
                    Ok(s) => {
                        let label = match &s {
                            Step::UpperHull(_) => "upper hull",
                            Step::LowerHull(_) => "lower hull",
                            Step::ConvexHull(_) => "convex hull",
                            Step::BridgedPoints(_) => "bridge",
                            Step::ConnectedPoints(_) => "edge",
                        };
                        println!("step: {label}, {} points", s.points().len());
                    }
                    Err(e) => println!("stepper failed: {e}"),
                }
            }
        }
        Err(e) => println!("stepper rejected input: {e}"),
    }
}
