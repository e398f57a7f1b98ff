//! Deterministic perturbation for synthesised climate indicators.
//!
//! Every draw is keyed by a [`SeedContext`] plus a coordinate, so the same
//! inputs always give bit-identical output regardless of evaluation order or
//! thread. This is what makes re-running a synthesis idempotent.
//!
//! # Draw Order
//!
//! 1. **Seed**: [`mix_seed`] hashes (scheme version, tag, scenario, period,
//!    latitude, longitude) into a `u64`
//! 2. **Sample**: a fresh `ChaCha8Rng` seeded from it yields one standard normal
//! 3. **Apply**: multiplicative ([`Perturber::perturb`]) or additive
//!    ([`normal_noise`])
//! 4. **Rails**: callers clamp into the indicator's valid range
//!    ([`clamp_to`], [`floor_at`])

mod error;
mod noise;
mod safety;
mod seed;

pub use error::PerturbError;
pub use noise::{DEFAULT_SIGMA, Perturber, normal_noise, perturb, standard_normal};
pub use safety::{clamp_to, floor_at};
pub use seed::{SEED_SCHEME_VERSION, SeedContext, channel, mix_seed};
