//! Output voltage sampled across a range of unknown resistances.

use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::bridge::BridgeInputs;
use crate::errors::DomainError;

/// Evenly spaced Rx samples over an inclusive domain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepRange {
    /// First Rx sample in ohms.
    pub min: f64,
    /// Last Rx sample in ohms.
    pub max: f64,
    /// Number of samples, both ends included.
    pub samples: usize,
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 1000.0,
            samples: 500,
        }
    }
}

impl SweepRange {
    /// Create a validated sweep domain.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSweepRange`] when either end is not finite,
    /// `min` is not positive or `min > max`.
    pub fn new(min: f64, max: f64, samples: usize) -> Result<Self, DomainError> {
        let range = Self { min, max, samples };
        range.validate()?;
        Ok(range)
    }

    /// Check that every sample would be a usable resistance.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSweepRange`] under the same conditions as [`SweepRange::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        let usable = self.min.is_finite() && self.max.is_finite() && self.min > 0.0;
        if usable && self.min <= self.max {
            Ok(())
        } else {
            Err(DomainError::InvalidSweepRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Sample positions; the first is exactly `min` and the last exactly `max`.
    #[must_use]
    pub fn positions(&self) -> Array1<f64> {
        let mut positions = Array1::linspace(self.min, self.max, self.samples);
        if self.samples > 1 {
            positions[self.samples - 1] = self.max;
        }
        positions
    }
}

/// One sample of the output curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Unknown resistance in ohms.
    pub rx: f64,
    /// Bridge output in volts.
    pub vab: f64,
}

/// Ordered samples of `Vab` against Rx sharing the same R1, R2, R3 and Vs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SweepCurve {
    /// Samples in ascending Rx order.
    points: Vec<SweepPoint>,
}

impl SweepCurve {
    /// All samples in ascending Rx order.
    #[must_use]
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rx column, for plotting.
    #[must_use]
    pub fn rx_values(&self) -> Array1<f64> {
        self.points.iter().map(|point| point.rx).collect()
    }

    /// Vab column, for plotting.
    #[must_use]
    pub fn vab_values(&self) -> Array1<f64> {
        self.points.iter().map(|point| point.vab).collect()
    }

    /// First pair of neighbouring samples that brackets the balance point.
    ///
    /// Returns `None` when the output keeps one sign over the whole curve.
    #[must_use]
    pub fn balance_crossing(&self) -> Option<(SweepPoint, SweepPoint)> {
        self.points
            .windows(2)
            .find(|pair| {
                let (before, after) = (pair[0].vab, pair[1].vab);
                before == 0.0 || after == 0.0 || (before > 0.0) != (after > 0.0)
            })
            .map(|pair| (pair[0], pair[1]))
    }
}

impl<'a> IntoIterator for &'a SweepCurve {
    type Item = &'a SweepPoint;
    type IntoIter = std::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BridgeInputs {
    /// Evaluate the bridge at every Rx in `range`, keeping the other inputs.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSweepRange`] when `range` is not valid.
    ///
    /// # Examples
    /// ```
    /// use wheatstone::{BridgeInputs, SweepRange};
    ///
    /// let curve = BridgeInputs::default()
    ///     .sweep_rx(&SweepRange::default())
    ///     .expect("default range is valid");
    /// assert_eq!(curve.len(), 500);
    /// assert_eq!(curve.points()[499].rx, 1000.0);
    /// ```
    pub fn sweep_rx(&self, range: &SweepRange) -> Result<SweepCurve, DomainError> {
        range.validate()?;
        debug!(
            "sweeping Rx over [{}, {}] ohm with {} samples",
            range.min, range.max, range.samples
        );
        let points = range
            .positions()
            .iter()
            .map(|&rx| {
                let vab = self.with_rx(rx)?.evaluate().vab();
                Ok(SweepPoint { rx, vab })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(SweepCurve { points })
    }
}

/// Sample `Vab` over `sample_count` evenly spaced Rx values in `[domain_min, domain_max]`.
///
/// # Errors
///
/// Returns [`DomainError`] when a fixed resistance or the supply is invalid, or
/// when the domain is not a finite, positive, ascending interval.
pub fn sweep(
    r1: f64,
    r2: f64,
    r3: f64,
    vs: f64,
    domain_min: f64,
    domain_max: f64,
    sample_count: usize,
) -> Result<SweepCurve, DomainError> {
    let range = SweepRange::new(domain_min, domain_max, sample_count)?;
    BridgeInputs::without_rx(r1, r2, r3, vs)?.sweep_rx(&range)
}
