//! Core bridge formula and the threshold classifications built on it.

use std::fmt;

use log::{trace, warn};
use serde::Serialize;

use crate::errors::DomainError;

/// Output magnitude below which the bridge counts as balanced, in volts.
pub const BALANCE_THRESHOLD: f64 = 0.01;

/// Output magnitude above which the strain gauge registers a step, in volts.
pub const MOVEMENT_THRESHOLD: f64 = 0.05;

/// Positive output above which the street light switches on, in volts.
pub const LIGHT_THRESHOLD: f64 = 0.05;

/// Conventional slider bounds for every resistor, in ohms.
pub const RESISTANCE_RANGE: (f64, f64) = (1.0, 1000.0);

/// Conventional slider bounds for the supply voltage, in volts.
pub const SUPPLY_RANGE: (f64, f64) = (1.0, 10.0);

/// Label for one of the four resistors in the bridge.
///
/// R1 and R2 form the reference divider, R3 and Rx the measuring divider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BridgeArm {
    /// Upper resistor of the reference divider.
    R1,
    /// Lower resistor of the reference divider.
    R2,
    /// Upper resistor of the measuring divider.
    R3,
    /// Unknown resistor under measurement.
    Rx,
}

impl fmt::Display for BridgeArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::Rx => "Rx",
        };
        f.write_str(name)
    }
}

/// Reject resistances the divider ratios cannot be formed from.
fn check_resistance(arm: BridgeArm, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositiveResistance { arm, value })
    }
}

/// Reject supply voltages that are not real numbers.
fn check_supply(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteSupply(value))
    }
}

/// The bridge formula itself. Callers guarantee positive resistances.
fn bridge_output(r1: f64, r2: f64, r3: f64, rx: f64, vs: f64) -> f64 {
    vs * (r2 / (r1 + r2) - rx / (r3 + rx))
}

/// Compute the output voltage across the bridge, `Vab`.
///
/// The result is `Vs * (R2 / (R1 + R2) - Rx / (R3 + Rx))`. It is positive when the
/// reference divider sits above the measuring divider, negative below it, and zero
/// when `R1 / R2 == R3 / Rx`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveResistance`] when any resistance is not a
/// positive, finite number and [`DomainError::NonFiniteSupply`] when `vs` is NaN
/// or infinite.
///
/// # Examples
/// ```
/// use wheatstone::compute_vab;
///
/// let vab = compute_vab(100.0, 100.0, 100.0, 200.0, 5.0).expect("valid bridge");
/// assert!((vab - (-0.8333)).abs() < 1.0e-4);
/// ```
pub fn compute_vab(r1: f64, r2: f64, r3: f64, rx: f64, vs: f64) -> Result<f64, DomainError> {
    let inputs = BridgeInputs::new(r1, r2, r3, rx, vs)?;
    Ok(inputs.evaluate().vab())
}

/// Resistor values and supply voltage for one bridge evaluation.
///
/// Construction validates every field, so an existing value can always be
/// evaluated without further checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BridgeInputs {
    /// Reference divider, upper resistor in ohms.
    r1: f64,
    /// Reference divider, lower resistor in ohms.
    r2: f64,
    /// Measuring divider, upper resistor in ohms.
    r3: f64,
    /// Unknown resistor in ohms.
    rx: f64,
    /// Supply voltage in volts.
    vs: f64,
}

impl Default for BridgeInputs {
    fn default() -> Self {
        Self {
            r1: 100.0,
            r2: 100.0,
            r3: 100.0,
            rx: 100.0,
            vs: 5.0,
        }
    }
}

impl BridgeInputs {
    /// Validate and bundle the five bridge inputs.
    ///
    /// Values outside [`RESISTANCE_RANGE`] or [`SUPPLY_RANGE`] are accepted but
    /// logged at `warn` level.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when a resistance is not positive and finite or the
    /// supply voltage is not finite.
    pub fn new(r1: f64, r2: f64, r3: f64, rx: f64, vs: f64) -> Result<Self, DomainError> {
        let inputs = Self {
            r1: check_resistance(BridgeArm::R1, r1)?,
            r2: check_resistance(BridgeArm::R2, r2)?,
            r3: check_resistance(BridgeArm::R3, r3)?,
            rx: check_resistance(BridgeArm::Rx, rx)?,
            vs: check_supply(vs)?,
        };
        inputs.warn_outside_slider_bounds();
        Ok(inputs)
    }

    /// Validate the fixed arms and supply of a bridge whose Rx will be swept.
    ///
    /// Rx holds the default value until a sample replaces it, so only the
    /// caller's own inputs are checked against the slider bounds.
    pub(crate) fn without_rx(r1: f64, r2: f64, r3: f64, vs: f64) -> Result<Self, DomainError> {
        Self::new(r1, r2, r3, Self::default().rx, vs)
    }

    /// Return a copy with the unknown resistor replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveResistance`] when `rx` is not positive and finite.
    pub fn with_rx(self, rx: f64) -> Result<Self, DomainError> {
        Ok(Self {
            rx: check_resistance(BridgeArm::Rx, rx)?,
            ..self
        })
    }

    /// Reference divider, upper resistor in ohms.
    #[must_use]
    pub fn r1(&self) -> f64 {
        self.r1
    }

    /// Reference divider, lower resistor in ohms.
    #[must_use]
    pub fn r2(&self) -> f64 {
        self.r2
    }

    /// Measuring divider, upper resistor in ohms.
    #[must_use]
    pub fn r3(&self) -> f64 {
        self.r3
    }

    /// Unknown resistor in ohms.
    #[must_use]
    pub fn rx(&self) -> f64 {
        self.rx
    }

    /// Supply voltage in volts.
    #[must_use]
    pub fn vs(&self) -> f64 {
        self.vs
    }

    /// Evaluate the bridge output for these inputs.
    ///
    /// # Examples
    /// ```
    /// use wheatstone::{Balance, BridgeInputs};
    ///
    /// let result = BridgeInputs::default().evaluate();
    /// assert_eq!(result.vab(), 0.0);
    /// assert_eq!(result.balance(), Balance::Balanced);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> BridgeResult {
        let vab = bridge_output(self.r1, self.r2, self.r3, self.rx, self.vs);
        trace!("evaluated bridge {:?}: vab = {vab}", self);
        BridgeResult { vab }
    }

    /// Unknown resistance that would balance the other three arms, `R2 * R3 / R1`.
    #[must_use]
    pub fn balancing_rx(&self) -> f64 {
        self.r2 * self.r3 / self.r1
    }

    /// Resistors that fall outside the conventional slider bounds.
    fn arms_outside_slider_bounds(&self) -> Vec<BridgeArm> {
        let (low, high) = RESISTANCE_RANGE;
        [
            (BridgeArm::R1, self.r1),
            (BridgeArm::R2, self.r2),
            (BridgeArm::R3, self.r3),
            (BridgeArm::Rx, self.rx),
        ]
        .into_iter()
        .filter(|&(_, value)| value < low || value > high)
        .map(|(arm, _)| arm)
        .collect()
    }

    /// Log inputs that fall outside the conventional slider bounds.
    fn warn_outside_slider_bounds(&self) {
        let (low, high) = RESISTANCE_RANGE;
        for arm in self.arms_outside_slider_bounds() {
            let value = match arm {
                BridgeArm::R1 => self.r1,
                BridgeArm::R2 => self.r2,
                BridgeArm::R3 => self.r3,
                BridgeArm::Rx => self.rx,
            };
            warn!("{arm} = {value} ohm is outside the usual {low}..{high} ohm range");
        }
        let (low, high) = SUPPLY_RANGE;
        if self.vs < low || self.vs > high {
            warn!("Vs = {} V is outside the usual {low}..{high} V range", self.vs);
        }
    }
}

/// Output of a single bridge evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BridgeResult {
    /// Bridge output voltage in volts.
    vab: f64,
}

impl BridgeResult {
    /// Bridge output voltage in volts.
    #[must_use]
    pub fn vab(&self) -> f64 {
        self.vab
    }

    /// Balance state of this output.
    #[must_use]
    pub fn balance(&self) -> Balance {
        classify_balance(self.vab)
    }
}

/// Whether the bridge output is close enough to zero to call the bridge balanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Balance {
    /// `|Vab|` is below [`BALANCE_THRESHOLD`].
    Balanced,
    /// `|Vab|` is at or above [`BALANCE_THRESHOLD`].
    NotBalanced,
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str("Bridge is Balanced!"),
            Self::NotBalanced => f.write_str("Bridge is Not Balanced!"),
        }
    }
}

/// Step detection outcome for the strain-gauge bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Movement {
    /// `|Vab|` exceeds [`MOVEMENT_THRESHOLD`].
    StepDetected,
    /// `|Vab|` is at most [`MOVEMENT_THRESHOLD`].
    NoMovement,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepDetected => f.write_str("Detected: Movement registered as a step!"),
            Self::NoMovement => f.write_str("No significant movement detected."),
        }
    }
}

/// Street light state driven by the light-dependent resistor bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Streetlight {
    /// `Vab` exceeds [`LIGHT_THRESHOLD`].
    On,
    /// `Vab` is at most [`LIGHT_THRESHOLD`], including every negative output.
    Off,
}

impl fmt::Display for Streetlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("Streetlight: ON (It's getting dark)"),
            Self::Off => f.write_str("Streetlight: OFF (Daytime detected)"),
        }
    }
}

/// Classify a bridge output as balanced when `|vab| < 0.01`.
///
/// # Examples
/// ```
/// use wheatstone::{classify_balance, Balance};
///
/// assert_eq!(classify_balance(-0.0099), Balance::Balanced);
/// assert_eq!(classify_balance(0.01), Balance::NotBalanced);
/// ```
#[must_use]
pub fn classify_balance(vab: f64) -> Balance {
    if vab.abs() < BALANCE_THRESHOLD {
        Balance::Balanced
    } else {
        Balance::NotBalanced
    }
}

/// Classify a strain-gauge output as a step when `|vab| > 0.05`.
#[must_use]
pub fn classify_movement(vab: f64) -> Movement {
    if vab.abs() > MOVEMENT_THRESHOLD {
        Movement::StepDetected
    } else {
        Movement::NoMovement
    }
}

/// Classify a light-sensor output; only positive excursions above 0.05 V turn the light on.
#[must_use]
pub fn classify_light(vab: f64) -> Streetlight {
    if vab > LIGHT_THRESHOLD {
        Streetlight::On
    } else {
        Streetlight::Off
    }
}
