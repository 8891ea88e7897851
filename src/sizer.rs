use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// Workload-size bounds, in corpus lines. Every sizing draw is clamped into
/// this range regardless of mutability.
pub const WORD_MIN: usize = 2_500;
pub const WORD_MAX: usize = 50_000;

const SCALE: f64 = WORD_MAX as f64 / 20.0;

/// Default RNG seed. Fixed so that repeated runs of the same binary draw the
/// same workload-size sequence and their timings stay comparable.
pub const DEFAULT_SEED: u64 = 42;

/// Produces bounded Gaussian workload sizes around the midpoint of
/// `[WORD_MIN, WORD_MAX]`. The `mutability` parameter widens the spread
/// without moving the center.
///
/// Owns its generator: the stream is injected at construction rather than
/// shared process-wide, so reproducibility is explicit in the caller.
pub struct WorkloadSizer {
    rng: StdRng,
}

impl WorkloadSizer {
    pub fn new(seed: u64) -> WorkloadSizer {
        WorkloadSizer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one workload size: `z * sqrt(mutability) * SCALE + midpoint`,
    /// clamped to `[WORD_MIN, WORD_MAX]` and truncated to an integer.
    ///
    /// Always in bounds for `mutability >= 0`. Advances the owned stream.
    pub fn size(&mut self, mutability: f64) -> usize {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        let raw = z * mutability.sqrt() * SCALE + (WORD_MIN + WORD_MAX) as f64 / 2.0;
        raw.clamp(WORD_MIN as f64, WORD_MAX as f64) as usize
    }
}
