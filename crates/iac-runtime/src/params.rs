//! Activation scalars shared by every node of an IAC network

use crate::error::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Saturation bounds, decay and resting level of unit activations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivationParams {
    /// Lower saturation bound
    pub min: f64,
    /// Upper saturation bound
    pub max: f64,
    /// Fraction of the distance to `rest` recovered per cycle
    pub decay: f64,
    /// Equilibrium activation with no input
    pub rest: f64,
}

impl Default for ActivationParams {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
            decay: 0.05,
            rest: 0.0,
        }
    }
}

impl ActivationParams {
    /// Create new activation parameters with validation
    pub fn new(min: f64, max: f64, decay: f64, rest: f64) -> Result<Self> {
        for (name, value) in [("min", min), ("max", max), ("decay", decay), ("rest", rest)] {
            if !value.is_finite() {
                return Err(IacError::invalid_parameter(name, value.to_string(), "a finite number"));
            }
        }
        if max <= min {
            return Err(IacError::invalid_parameter(
                "max",
                format!("{} (with min={})", max, min),
                "> min",
            ));
        }
        if rest < min || rest > max {
            return Err(IacError::invalid_parameter(
                "rest",
                format!("{} (with min={}, max={})", rest, min, max),
                "within [min, max]",
            ));
        }
        if decay < 0.0 {
            return Err(IacError::invalid_parameter(
                "decay",
                decay.to_string(),
                ">= 0.0",
            ));
        }

        Ok(Self {
            min,
            max,
            decay,
            rest,
        })
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        Self::new(self.min, self.max, self.decay, self.rest)?;
        Ok(())
    }

    /// Change in activation for one cycle given the node's net input.
    ///
    /// Positive drive pulls toward `max` scaled by the remaining headroom,
    /// negative drive pulls toward `min`. Zero (or NaN) drive yields no change,
    /// including no decay. The result is not clamped.
    #[inline]
    pub fn delta(&self, activation: f64, net: f64, rate: f64) -> f64 {
        let leak = self.decay * (activation - self.rest);
        if net > 0.0 {
            rate * ((self.max - activation) * net - leak)
        } else if net < 0.0 {
            rate * ((activation - self.min) * net - leak)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_params_default() {
        let params = ActivationParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.min, -1.0);
        assert_eq!(params.max, 1.0);
        assert_eq!(params.decay, 0.05);
        assert_eq!(params.rest, 0.0);
    }

    #[test]
    fn test_activation_params_validation() {
        // Inverted bounds
        assert!(ActivationParams::new(1.0, -1.0, 0.05, 0.0).is_err());
        // Degenerate bounds
        assert!(ActivationParams::new(0.5, 0.5, 0.05, 0.5).is_err());
        // Rest outside bounds
        assert!(ActivationParams::new(-1.0, 1.0, 0.05, 2.0).is_err());
        // Negative decay
        assert!(ActivationParams::new(-1.0, 1.0, -0.1, 0.0).is_err());
        // Non-finite
        assert!(ActivationParams::new(f64::NEG_INFINITY, 1.0, 0.1, 0.0).is_err());
        assert!(ActivationParams::new(-1.0, 1.0, f64::NAN, 0.0).is_err());

        // Valid parameters, including rest on a bound and zero decay
        assert!(ActivationParams::new(-0.2, 1.0, 0.0, -0.2).is_ok());
        assert!(ActivationParams::new(-1.0, 1.0, 0.1, -0.1).is_ok());
    }

    #[test]
    fn test_delta_positive_drive() {
        let params = ActivationParams::default();
        // 0.1 * ((1 - 0) * 1 - 0.05 * 0)
        assert_eq!(params.delta(0.0, 1.0, 0.1), 0.1);
        let d = params.delta(0.1, 1.0, 0.1);
        assert!((d - 0.0895).abs() < 1e-12);
    }

    #[test]
    fn test_delta_negative_drive() {
        let params = ActivationParams::default();
        let d = params.delta(0.0, -0.1, 0.1);
        assert!((d + 0.01).abs() < 1e-12);
        // At the lower bound only the decay term remains
        let d = params.delta(-1.0, -3.0, 0.1);
        assert!((d - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_delta_zero_drive_skips_decay() {
        let params = ActivationParams::default();
        assert_eq!(params.delta(0.7, 0.0, 0.1), 0.0);
        assert_eq!(params.delta(-0.7, -0.0, 0.1), 0.0);
        assert_eq!(params.delta(0.7, f64::NAN, 0.1), 0.0);
    }
}
