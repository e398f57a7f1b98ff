//! Seeded normal draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::error::PerturbError;
use crate::seed::{SeedContext, mix_seed};

/// Standard deviation of the multiplicative regional variation (±15 %).
pub const DEFAULT_SIGMA: f64 = 0.15;

/// One standard-normal sample from a ChaCha8 stream seeded with `seed`.
///
/// `ChaCha8Rng` has a documented, portable output stream, so a seed maps to
/// the same draw across platforms and rand releases. `StdRng` makes no such
/// promise.
pub fn standard_normal(seed: u64) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.sample(StandardNormal)
}

/// Multiplicative perturbation with a fixed standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturber {
    sigma: f64,
}

impl Default for Perturber {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl Perturber {
    /// Creates a perturber with standard deviation `sigma`.
    ///
    /// # Errors
    ///
    /// Returns [`PerturbError::InvalidSigma`] if `sigma` is negative or
    /// non-finite.
    pub fn new(sigma: f64) -> Result<Self, PerturbError> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(PerturbError::InvalidSigma { sigma });
        }
        Ok(Self { sigma })
    }

    /// The configured standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The relative deviation `z * sigma` drawn for this context and point.
    pub fn sample(&self, ctx: &SeedContext<'_>, lat: f64, lon: f64) -> f64 {
        standard_normal(mix_seed(ctx, lat, lon)) * self.sigma
    }

    /// Returns `value * (1 + sample)`.
    pub fn perturb(&self, value: f64, lat: f64, lon: f64, ctx: &SeedContext<'_>) -> f64 {
        value * (1.0 + self.sample(ctx, lat, lon))
    }
}

/// Multiplicative perturbation with [`DEFAULT_SIGMA`].
pub fn perturb(value: f64, lat: f64, lon: f64, ctx: &SeedContext<'_>) -> f64 {
    Perturber::default().perturb(value, lat, lon, ctx)
}

/// Additive zero-mean noise with standard deviation `sigma`.
pub fn normal_noise(ctx: &SeedContext<'_>, lat: f64, lon: f64, sigma: f64) -> f64 {
    standard_normal(mix_seed(ctx, lat, lon)) * sigma
}
