//! Seeded, scaled 2D noise fields sampled at integer world coordinates.
//!
//! A [`NoiseField`] wraps one 2D noise primitive, multiplies integer
//! coordinates by a scale factor, and normalizes the raw `[-1, 1]` output to
//! `[0, 1]`. The primitive is either one of the built-in [`NoiseAlgorithm`]
//! families or any [`NoiseFn`] produced by a caller-supplied [`SourceFactory`].

use std::fmt;

use noise::{NoiseFn, OpenSimplex, Perlin, Simplex, SuperSimplex, Value};
use serde::{Deserialize, Serialize};

use crate::seed::fold_seed;

/// Selects the underlying noise family of a [`NoiseField`].
///
/// Fields sharing a seed but using different families produce decorrelated
/// output, which keeps altitude and temperature maps from mirroring each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseAlgorithm {
    /// Lattice value noise. Blocky at high frequency, cheap.
    Value,
    /// OpenSimplex gradient noise.
    OpenSimplex,
    /// Classic Perlin gradient noise.
    Perlin,
    /// Simplex gradient noise.
    Simplex,
    /// SuperSimplex gradient noise.
    SuperSimplex,
}

impl NoiseAlgorithm {
    /// Every supported family, in declaration order.
    pub const ALL: [NoiseAlgorithm; 5] = [
        NoiseAlgorithm::Value,
        NoiseAlgorithm::OpenSimplex,
        NoiseAlgorithm::Perlin,
        NoiseAlgorithm::Simplex,
        NoiseAlgorithm::SuperSimplex,
    ];

    /// Build a boxed 2D noise source of this family keyed by `seed`.
    pub fn build(self, seed: u64) -> Box<dyn NoiseFn<f64, 2>> {
        let seed = fold_seed(seed);
        match self {
            NoiseAlgorithm::Value => Box::new(Value::new(seed)),
            NoiseAlgorithm::OpenSimplex => Box::new(OpenSimplex::new(seed)),
            NoiseAlgorithm::Perlin => Box::new(Perlin::new(seed)),
            NoiseAlgorithm::Simplex => Box::new(Simplex::new(seed)),
            NoiseAlgorithm::SuperSimplex => Box::new(SuperSimplex::new(seed)),
        }
    }
}

/// Builds a noise source keyed by a world seed. Called again on every reseed.
///
/// The returned source should yield values in `[-1, 1]`; anything outside is
/// clamped by [`NoiseField::sample`].
pub type SourceFactory = Box<dyn Fn(u64) -> Box<dyn NoiseFn<f64, 2>>>;

enum Provider {
    Builtin(NoiseAlgorithm),
    Custom(SourceFactory),
}

impl Provider {
    fn build(&self, seed: u64) -> Box<dyn NoiseFn<f64, 2>> {
        match self {
            Provider::Builtin(algorithm) => algorithm.build(seed),
            Provider::Custom(factory) => factory(seed),
        }
    }
}

/// A deterministic 2D noise field over integer world coordinates.
pub struct NoiseField {
    provider: Provider,
    scale: f64,
    seed: u64,
    source: Box<dyn NoiseFn<f64, 2>>,
}

impl NoiseField {
    /// Create a field of the given family. Smaller `scale` means lower
    /// spatial frequency and broader features.
    pub fn new(algorithm: NoiseAlgorithm, scale: f64, seed: u64) -> Self {
        Self::from_provider(Provider::Builtin(algorithm), scale, seed)
    }

    /// Create a field backed by a caller-supplied noise source.
    ///
    /// `factory` is invoked with `seed` now and with the new seed on every
    /// [`update_seed`](Self::update_seed).
    pub fn with_source<F>(scale: f64, seed: u64, factory: F) -> Self
    where
        F: Fn(u64) -> Box<dyn NoiseFn<f64, 2>> + 'static,
    {
        Self::from_provider(Provider::Custom(Box::new(factory)), scale, seed)
    }

    fn from_provider(provider: Provider, scale: f64, seed: u64) -> Self {
        let source = provider.build(seed);
        Self {
            provider,
            scale,
            seed,
            source,
        }
    }

    /// Sample the field at an absolute world coordinate, in `[0, 1]`.
    ///
    /// Raw output is clamped to `[-1, 1]` before the `(raw + 1) / 2`
    /// normalization, since some families overshoot slightly.
    pub fn sample(&self, x: i32, y: i32) -> f64 {
        let raw = self.raw(x, y).clamp(-1.0, 1.0);
        (raw + 1.0) / 2.0
    }

    /// Sample the underlying primitive without normalization.
    pub fn raw(&self, x: i32, y: i32) -> f64 {
        self.source
            .get([f64::from(x) * self.scale, f64::from(y) * self.scale])
    }

    /// Replace the seed. Scale and provider are unchanged.
    pub fn update_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.source = self.provider.build(seed);
    }

    /// The seed currently keying this field.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The coordinate multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The built-in noise family, or `None` for a caller-supplied source.
    pub fn algorithm(&self) -> Option<NoiseAlgorithm> {
        match &self.provider {
            Provider::Builtin(algorithm) => Some(*algorithm),
            Provider::Custom(_) => None,
        }
    }
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField")
            .field("algorithm", &self.algorithm())
            .field("scale", &self.scale)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_determinism_same_seed_same_coord() {
        for algorithm in NoiseAlgorithm::ALL {
            let a = NoiseField::new(algorithm, 0.1, 42);
            let b = NoiseField::new(algorithm, 0.1, 42);
            for (x, y) in [(0, 0), (17, -3), (-250, 999), (i32::MAX / 4, i32::MIN / 4)] {
                let va = a.sample(x, y);
                let vb = b.sample(x, y);
                assert!(
                    (va - vb).abs() < EPSILON,
                    "{algorithm:?} not deterministic at ({x}, {y}): {va} vs {vb}"
                );
            }
        }
    }

    #[test]
    fn test_samples_within_unit_range() {
        for algorithm in NoiseAlgorithm::ALL {
            let field = NoiseField::new(algorithm, 0.07, 7);
            for x in -60..60 {
                for y in -60..60 {
                    let v = field.sample(x, y);
                    assert!(
                        (0.0..=1.0).contains(&v),
                        "{algorithm:?} sample {v} out of [0, 1] at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_normalization_matches_raw() {
        let field = NoiseField::new(NoiseAlgorithm::Perlin, 0.05, 3);
        for x in 0..50 {
            let raw = field.raw(x, 11).clamp(-1.0, 1.0);
            let expected = (raw + 1.0) / 2.0;
            assert!((field.sample(x, 11) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_smooth_between_neighbouring_cells() {
        let altitude = NoiseField::new(NoiseAlgorithm::Value, 0.1, 1234);
        let temperature = NoiseField::new(NoiseAlgorithm::OpenSimplex, 0.01, 1234);

        for x in -200..200 {
            let da = (altitude.sample(x + 1, 5) - altitude.sample(x, 5)).abs();
            let dt = (temperature.sample(x + 1, 5) - temperature.sample(x, 5)).abs();
            assert!(da < 0.25, "Altitude jump {da} between x={x} and x={}", x + 1);
            assert!(dt < 0.25, "Temperature jump {dt} between x={x} and x={}", x + 1);
        }
    }

    #[test]
    fn test_update_seed_changes_samples_only() {
        let mut field = NoiseField::new(NoiseAlgorithm::Value, 0.1, 1);
        let before: Vec<f64> = (0..100).map(|i| field.sample(i, i * 3)).collect();

        field.update_seed(2);
        assert_eq!(field.seed(), 2);
        assert_eq!(field.algorithm(), Some(NoiseAlgorithm::Value));
        assert!((field.scale() - 0.1).abs() < EPSILON);

        let after: Vec<f64> = (0..100).map(|i| field.sample(i, i * 3)).collect();
        assert_ne!(before, after, "New seed should change the field");

        let fresh = NoiseField::new(NoiseAlgorithm::Value, 0.1, 2);
        let expected: Vec<f64> = (0..100).map(|i| fresh.sample(i, i * 3)).collect();
        assert_eq!(after, expected, "Reseeded field must match a fresh one");
    }

    #[test]
    fn test_families_decorrelated_under_same_seed() {
        let value = NoiseField::new(NoiseAlgorithm::Value, 0.05, 99);
        let simplex = NoiseField::new(NoiseAlgorithm::OpenSimplex, 0.05, 99);
        let differing = (0..100)
            .filter(|&i| (value.sample(i * 7, i) - simplex.sample(i * 7, i)).abs() > 1e-6)
            .count();
        assert!(differing > 50, "Only {differing}/100 samples differ");
    }

    /// Deterministic plane whose slope depends on the seed; overshoots
    /// `[-1, 1]` far from the origin.
    struct Ramp {
        slope: f64,
    }

    impl NoiseFn<f64, 2> for Ramp {
        fn get(&self, point: [f64; 2]) -> f64 {
            (point[0] + point[1]) * self.slope
        }
    }

    fn ramp_field(seed: u64) -> NoiseField {
        NoiseField::with_source(0.5, seed, |seed| {
            Box::new(Ramp {
                slope: seed as f64 / 100.0,
            })
        })
    }

    #[test]
    fn test_custom_source_normalized() {
        let field = ramp_field(10);
        assert_eq!(field.algorithm(), None);

        // raw = (2 + 0) * 0.5 * 0.1 = 0.1
        assert!((field.raw(2, 0) - 0.1).abs() < EPSILON);
        assert!((field.sample(2, 0) - 0.55).abs() < EPSILON);
        assert!((field.sample(0, 0) - 0.5).abs() < EPSILON);

        // Clamped at both ends.
        assert!((field.sample(1000, 0) - 1.0).abs() < EPSILON);
        assert!(field.sample(-1000, 0).abs() < EPSILON);
    }

    #[test]
    fn test_custom_source_rebuilt_on_reseed() {
        let mut field = ramp_field(10);
        field.update_seed(20);
        assert_eq!(field.seed(), 20);

        // raw = (2 + 0) * 0.5 * 0.2 = 0.2
        assert!((field.raw(2, 0) - 0.2).abs() < EPSILON);
        let fresh = ramp_field(20);
        for x in -10..10 {
            assert!((field.sample(x, 3) - fresh.sample(x, 3)).abs() < EPSILON);
        }
    }
}
