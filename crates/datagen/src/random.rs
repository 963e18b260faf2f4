//! Injectable randomness for the generators.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform random draws.
///
/// Implementors only expose the underlying generator; slice shuffles and
/// picks go through [`rand::seq::SliceRandom`] on [`RandomSource::rng`].
pub trait RandomSource {
    /// Generator backing this source.
    fn rng(&mut self) -> &mut dyn RngCore;

    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize {
        self.rng().gen_range(0..bound)
    }

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.rng().gen::<f64>()
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniform integer in `lo..=hi`.
    fn between(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng().gen_range(lo..=hi)
    }
}

/// Adapts any `rand::RngCore` to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Reproducible source, for tests and `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.0
    }
}
