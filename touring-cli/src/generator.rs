//! Generates random points to exercise tour building.

#[cfg(test)]
#[path = "../tests/unit/generator_test.rs"]
mod generator_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use touring_core::prelude::{Float, GenericResult, Point};

/// Default side size of the square where points are generated.
pub const DEFAULT_AREA_SIZE: Float = 1000.;

/// Generates `size` points uniformly distributed in `[0, area) x [0, area)` square. The same seed
/// always gives the same points.
pub fn generate_points(size: usize, area: Float, seed: u64) -> GenericResult<Vec<Point>> {
    if !(area.is_finite() && area > 0.) {
        return Err(format!("area size should be a positive number, got: '{area}'").into());
    }

    let mut rng = SmallRng::seed_from_u64(seed);

    Ok((0..size).map(|_| Point::new(rng.gen_range(0. ..area), rng.gen_range(0. ..area))).collect())
}
