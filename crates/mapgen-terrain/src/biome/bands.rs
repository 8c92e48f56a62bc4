//! Altitude band table: maps (altitude, temperature) pairs to categories.

use serde::{Deserialize, Serialize};

use super::Category;

/// What an altitude band resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BandRule {
    /// Always this category.
    Fixed(Category),
    /// `warm` when temperature is strictly above `threshold`, else `cold`.
    ByTemperature {
        /// Exclusive temperature threshold.
        threshold: f64,
        /// Category above the threshold.
        warm: Category,
        /// Category at or below the threshold.
        cold: Category,
    },
}

impl BandRule {
    /// Resolve this rule for a temperature.
    #[inline]
    pub fn resolve(&self, temperature: f64) -> Category {
        match *self {
            BandRule::Fixed(category) => category,
            BandRule::ByTemperature {
                threshold,
                warm,
                cold,
            } => {
                if temperature > threshold {
                    warm
                } else {
                    cold
                }
            }
        }
    }
}

/// One altitude band: applies to altitudes below `upper` not claimed by an
/// earlier band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AltitudeBand {
    /// Exclusive upper altitude bound.
    pub upper: f64,
    /// Category rule inside the band.
    pub rule: BandRule,
}

/// Errors raised when validating a custom band table.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// The table has no bands.
    #[error("band table has no bands")]
    Empty,
    /// Upper bounds are not strictly ascending.
    #[error("band {index} upper bound {upper} does not exceed previous bound {previous}")]
    UnorderedBands {
        /// Offending band index.
        index: usize,
        /// Its upper bound.
        upper: f64,
        /// Upper bound of the band before it.
        previous: f64,
    },
}

/// Ordered altitude bands; first match wins, with a catch-all top category.
///
/// Altitude is not clamped: the default table extends past 1.0 up to 1.7,
/// so altitude is read over `[0, ~2.0]` while temperature stays in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    bands: Vec<AltitudeBand>,
    top: Category,
}

impl BandTable {
    /// Build a table, checking that upper bounds strictly ascend.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Empty`] for an empty table and
    /// [`ClassifierError::UnorderedBands`] when bounds do not ascend.
    pub fn new(bands: Vec<AltitudeBand>, top: Category) -> Result<Self, ClassifierError> {
        if bands.is_empty() {
            return Err(ClassifierError::Empty);
        }
        for (index, pair) in bands.windows(2).enumerate() {
            // NaN bounds fail this check too.
            if !(pair[1].upper > pair[0].upper) {
                return Err(ClassifierError::UnorderedBands {
                    index: index + 1,
                    upper: pair[1].upper,
                    previous: pair[0].upper,
                });
            }
        }
        Ok(Self { bands, top })
    }

    /// Re-check a table obtained through deserialization.
    ///
    /// # Errors
    ///
    /// Same as [`BandTable::new`].
    pub fn validate(&self) -> Result<(), ClassifierError> {
        Self::new(self.bands.clone(), self.top).map(|_| ())
    }

    /// Classify one cell. Pure and total.
    pub fn classify(&self, altitude: f64, temperature: f64) -> Category {
        for band in &self.bands {
            if altitude < band.upper {
                return band.rule.resolve(temperature);
            }
        }
        self.top
    }

    /// The bands in evaluation order.
    pub fn bands(&self) -> &[AltitudeBand] {
        &self.bands
    }

    /// Category for altitudes at or above the last band.
    pub fn top(&self) -> Category {
        self.top
    }
}

impl Default for BandTable {
    fn default() -> Self {
        use Category::*;
        let fixed = |upper, category| AltitudeBand {
            upper,
            rule: BandRule::Fixed(category),
        };
        Self {
            bands: vec![
                fixed(0.1, DeepWater),
                fixed(0.5, Water),
                fixed(0.8, Sand),
                fixed(1.0, Grass),
                AltitudeBand {
                    upper: 1.5,
                    rule: BandRule::ByTemperature {
                        threshold: 0.6,
                        warm: Grass,
                        cold: Forest,
                    },
                },
                fixed(1.7, Hill),
            ],
            top: Mountain,
        }
    }
}

/// Classify with the default band table.
pub fn classify(altitude: f64, temperature: f64) -> Category {
    use Category::*;
    match altitude {
        a if a < 0.1 => DeepWater,
        a if a < 0.5 => Water,
        a if a < 0.8 => Sand,
        a if a < 1.0 => Grass,
        a if a < 1.5 => {
            if temperature > 0.6 {
                Grass
            } else {
                Forest
            }
        }
        a if a < 1.7 => Hill,
        _ => Mountain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_bands() {
        let table = BandTable::default();
        assert_eq!(table.classify(0.0, 0.5), Category::DeepWater);
        assert_eq!(table.classify(0.3, 0.5), Category::Water);
        assert_eq!(table.classify(0.65, 0.5), Category::Sand);
        assert_eq!(table.classify(0.9, 0.5), Category::Grass);
        assert_eq!(table.classify(1.2, 0.9), Category::Grass);
        assert_eq!(table.classify(1.2, 0.2), Category::Forest);
        assert_eq!(table.classify(1.6, 0.5), Category::Hill);
        assert_eq!(table.classify(1.9, 0.5), Category::Mountain);
    }

    #[test]
    fn test_boundaries_resolve_upward() {
        let table = BandTable::default();
        assert_eq!(table.classify(0.1, 0.0), Category::Water);
        assert_eq!(table.classify(0.5, 0.0), Category::Sand);
        assert_eq!(table.classify(0.8, 0.0), Category::Grass);
        assert_eq!(table.classify(1.0, 0.0), Category::Forest);
        assert_eq!(table.classify(1.5, 0.0), Category::Hill);
        assert_eq!(table.classify(1.7, 0.0), Category::Mountain);
    }

    #[test]
    fn test_temperature_threshold_is_exclusive() {
        let table = BandTable::default();
        assert_eq!(table.classify(1.2, 0.6), Category::Forest);
        assert_eq!(table.classify(1.2, 0.600_000_1), Category::Grass);
    }

    #[test]
    fn test_table_matches_default_classify_over_domain() {
        let table = BandTable::default();
        let steps = 400;
        for a in 0..=steps {
            for t in 0..=100 {
                let altitude = 2.0 * a as f64 / steps as f64;
                let temperature = t as f64 / 100.0;
                assert_eq!(
                    table.classify(altitude, temperature),
                    classify(altitude, temperature),
                    "Mismatch at altitude={altitude}, temperature={temperature}"
                );
            }
        }
    }

    #[test]
    fn test_unordered_bands_rejected() {
        let result = BandTable::new(
            vec![
                AltitudeBand {
                    upper: 0.5,
                    rule: BandRule::Fixed(Category::Water),
                },
                AltitudeBand {
                    upper: 0.5,
                    rule: BandRule::Fixed(Category::Sand),
                },
            ],
            Category::Mountain,
        );
        assert_eq!(
            result,
            Err(ClassifierError::UnorderedBands {
                index: 1,
                upper: 0.5,
                previous: 0.5,
            })
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            BandTable::new(Vec::new(), Category::Grass),
            Err(ClassifierError::Empty)
        );
    }

    #[test]
    fn test_custom_table_top_is_catch_all() {
        let table = BandTable::new(
            vec![AltitudeBand {
                upper: 0.5,
                rule: BandRule::Fixed(Category::Water),
            }],
            Category::Sand,
        )
        .unwrap();
        assert_eq!(table.classify(0.49, 0.0), Category::Water);
        assert_eq!(table.classify(0.5, 0.0), Category::Sand);
        assert_eq!(table.classify(100.0, 0.0), Category::Sand);
        assert!(table.validate().is_ok());
    }
}
