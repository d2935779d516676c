//! Error types produced while evaluating a bridge.

use thiserror::Error;

use crate::bridge::BridgeArm;

/// Error returned when an input leaves the domain of the bridge formula.
///
/// Every variant names the value that was rejected so a presentation layer can
/// tell the user which control is out of range.
///
/// # Examples
///
/// ```
/// use wheatstone::{BridgeArm, BridgeInputs, DomainError};
///
/// let error = BridgeInputs::new(100.0, 0.0, 100.0, 100.0, 5.0)
///     .expect_err("zero resistance is rejected");
/// assert_eq!(
///     error,
///     DomainError::NonPositiveResistance { arm: BridgeArm::R2, value: 0.0 }
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DomainError {
    /// Returned when a resistance is zero, negative, infinite or NaN.
    #[error("{arm} must be a positive, finite resistance (received {value} ohm)")]
    NonPositiveResistance {
        /// Which resistor carried the value.
        arm: BridgeArm,
        /// Rejected resistance in ohms.
        value: f64,
    },
    /// Returned when the supply voltage is NaN or infinite.
    #[error("supply voltage must be finite (received {0} V)")]
    NonFiniteSupply(f64),
    /// Returned when a light level below zero lux reaches the LDR model.
    #[error("light intensity must be zero or more (received {0} lux)")]
    NegativeLightIntensity(f64),
    /// Returned when a strain would drive the gauge resistance to zero or below.
    #[error("strain of {strain}% gives a non-positive gauge resistance ({resistance} ohm)")]
    NonPositiveStrainResistance {
        /// Rejected strain in percent.
        strain: f64,
        /// Gauge resistance the strain would produce in ohms.
        resistance: f64,
    },
    /// Returned when a sweep domain is empty, reversed or reaches non-positive Rx.
    #[error("sweep range [{min}, {max}] must be finite, positive and ascending")]
    InvalidSweepRange {
        /// Requested lower end of the Rx domain.
        min: f64,
        /// Requested upper end of the Rx domain.
        max: f64,
    },
}
