//! Mining thresholds and loop limits.

use serde::{Deserialize, Serialize};

use crate::error::{AprioriError, Result};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.5;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// How a configured `min_lift` takes part in rule selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftPolicy {
    /// Accepted and reported, never used to drop rules.
    #[default]
    Reserved,
    /// Rules with `lift < min_lift` are dropped.
    Enforce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Itemsets with `support >= min_support` are frequent.
    pub min_support: f64,
    /// Rules need `confidence > min_confidence` (strict).
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
    pub lift_policy: LiftPolicy,
    /// Join iterations allowed before mining stops with a warning.
    pub max_iterations: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_lift: None,
            lift_policy: LiftPolicy::Reserved,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = Some(min_lift);
        self
    }

    pub fn with_lift_policy(mut self, lift_policy: LiftPolicy) -> Self {
        self.lift_policy = lift_policy;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The lift threshold actually applied to rules, if any.
    pub fn enforced_min_lift(&self) -> Option<f64> {
        match self.lift_policy {
            LiftPolicy::Enforce => self.min_lift,
            LiftPolicy::Reserved => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_open_fraction("min_support", self.min_support)?;
        check_open_fraction("min_confidence", self.min_confidence)?;

        if let Some(min_lift) = self.min_lift {
            if !min_lift.is_finite() {
                return Err(invalid("min_lift", min_lift, "must be finite"));
            }
            if min_lift < 0.0 {
                return Err(invalid("min_lift", min_lift, "must not be negative"));
            }
        }

        if self.max_iterations == 0 {
            return Err(AprioriError::InvalidConfig {
                field: "max_iterations",
                value: "0".to_owned(),
                reason: "at least one join iteration is required",
            });
        }

        Ok(())
    }
}

/// Thresholds live in `(0, 1]`: at zero every candidate, even one no
/// transaction contains, would pass.
fn check_open_fraction(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value <= 0.0 || value > 1.0 {
        return Err(invalid(field, value, "must lie in (0, 1]"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> AprioriError {
    AprioriError::InvalidConfig {
        field,
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MiningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.enforced_min_lift(), None);
    }

    #[test]
    fn test_rejects_non_finite_thresholds() {
        assert!(MiningConfig::new(f64::NAN, 0.5).validate().is_err());
        assert!(MiningConfig::new(0.5, f64::INFINITY).validate().is_err());
        assert!(MiningConfig::new(0.5, 0.5)
            .with_min_lift(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(MiningConfig::new(1.5, 0.5).validate().is_err());
        assert!(MiningConfig::new(0.5, -0.1).validate().is_err());
        assert!(MiningConfig::new(0.5, 0.5)
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_zero_thresholds() {
        let err = MiningConfig::new(0.0, 0.7).validate().unwrap_err();
        assert!(matches!(err, AprioriError::InvalidConfig { field: "min_support", .. }));

        let err = MiningConfig::new(0.5, 0.0).validate().unwrap_err();
        assert!(matches!(err, AprioriError::InvalidConfig { field: "min_confidence", .. }));

        assert!(MiningConfig::new(1.0, 1.0).validate().is_ok());
        assert!(MiningConfig::new(f64::MIN_POSITIVE, 0.01).validate().is_ok());
    }

    #[test]
    fn test_lift_policy_controls_enforcement() {
        let reserved = MiningConfig::default().with_min_lift(1.2);
        assert_eq!(reserved.enforced_min_lift(), None);

        let enforced = reserved.with_lift_policy(LiftPolicy::Enforce);
        assert_eq!(enforced.enforced_min_lift(), Some(1.2));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: MiningConfig =
            serde_json::from_str(r#"{"min_support": 0.2, "lift_policy": "enforce"}"#).unwrap();
        assert_eq!(config.min_support, 0.2);
        assert_eq!(config.min_confidence, DEFAULT_MIN_CONFIDENCE);
        assert_eq!(config.lift_policy, LiftPolicy::Enforce);
    }
}
