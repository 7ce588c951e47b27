//! Configuration and builder for fuzzy distribution training.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// Training parameters for a [`Distribution`](crate::Distribution).
///
/// `threshold` is the maximum fuzzy distance at which a row joins a class
/// and at which two finished classes are merged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub feature_terms:   usize,
    pub dependent_terms: usize,
    pub threshold:       f32,
    pub merge:           bool
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.feature_terms == 0 || self.dependent_terms == 0 {
            return Err(Error::InvalidTermCount);
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(())
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    feature_terms:   Option<usize>,
    dependent_terms: Option<usize>,
    threshold:       Option<f32>,
    merge:           Option<bool>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the number of linguistic terms per feature column.
    pub fn feature_terms(mut self, n: usize) -> Self {
        self.feature_terms = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the number of linguistic terms for the dependent column.
    pub fn dependent_terms(mut self, n: usize) -> Self {
        self.dependent_terms = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the class distance threshold.
    pub fn threshold(mut self, t: f32) -> Self {
        self.threshold = Some(t);
        self
    }

    /// # Overview
    ///
    /// Enables or disables the class merge pass (default: enabled).
    pub fn merge(mut self, enabled: bool) -> Self {
        self.merge = Some(enabled);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            feature_terms:   self.feature_terms.ok_or(Error::MissingFeatureTerms)?,
            dependent_terms: self.dependent_terms.ok_or(Error::MissingDependentTerms)?,
            threshold:       self.threshold.ok_or(Error::MissingThreshold)?,
            merge:           self.merge.unwrap_or(true)
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_defaults() {
        let config = Config::builder()
            .feature_terms(3)
            .dependent_terms(5)
            .threshold(0.2)
            .build()
            .unwrap();

        assert_eq!(config.feature_terms, 3);
        assert_eq!(config.dependent_terms, 5);
        assert!((config.threshold - 0.2).abs() < 1e-6);
        assert!(config.merge);
    }

    #[test]
    fn builder_requires_every_count() {
        let missing_features = Config::builder().dependent_terms(3).threshold(0.1).build();
        let missing_dependent = Config::builder().feature_terms(3).threshold(0.1).build();
        let missing_threshold = Config::builder().feature_terms(3).dependent_terms(3).build();

        assert_eq!(missing_features, Err(Error::MissingFeatureTerms));
        assert_eq!(missing_dependent, Err(Error::MissingDependentTerms));
        assert_eq!(missing_threshold, Err(Error::MissingThreshold));
    }

    #[test]
    fn builder_rejects_zero_terms() {
        let result = Config::builder()
            .feature_terms(0)
            .dependent_terms(3)
            .threshold(0.1)
            .build();

        assert_eq!(result, Err(Error::InvalidTermCount));
    }

    #[test]
    fn builder_rejects_bad_threshold() {
        for t in [-0.1, f32::NAN, f32::INFINITY] {
            let result = Config::builder()
                .feature_terms(3)
                .dependent_terms(3)
                .threshold(t)
                .build();
            assert_eq!(result, Err(Error::InvalidThreshold));
        }
    }

    #[test]
    fn zero_threshold_is_valid() {
        let config = Config::builder()
            .feature_terms(2)
            .dependent_terms(2)
            .threshold(0.0)
            .merge(false)
            .build()
            .unwrap();

        assert_eq!(config.threshold, 0.0);
        assert!(!config.merge);
    }
}
