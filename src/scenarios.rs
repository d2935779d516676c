//! The two sensor demonstrations: a strain gauge detecting steps and a
//! light-dependent resistor switching a street light.
//!
//! Each scenario swaps the unknown resistor of an otherwise ordinary bridge for a
//! sensor whose resistance follows one extra input.

use log::debug;
use serde::Serialize;

use crate::bridge::{classify_light, classify_movement, BridgeInputs, Movement, Streetlight};
use crate::errors::DomainError;

/// Unstrained gauge resistance in ohms.
pub const GAUGE_NOMINAL_RESISTANCE: f64 = 100.0;

/// LDR resistance in complete darkness, in ohms.
pub const LDR_DARK_RESISTANCE: f64 = 1000.0;

/// Conventional slider bounds for wrist movement, in percent strain.
pub const STRAIN_RANGE: (f64, f64) = (0.0, 5.0);

/// Conventional slider bounds for ambient light, in lux.
pub const LIGHT_RANGE: (f64, f64) = (0.0, 1000.0);

/// Gauge resistance under `strain_percent` of strain: `100 + strain`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveStrainResistance`] when the strain is NaN or
/// negative enough to bring the gauge to zero ohms or below.
///
/// # Examples
/// ```
/// use wheatstone::strain_resistance;
///
/// assert_eq!(strain_resistance(5.0).expect("valid strain"), 105.0);
/// ```
pub fn strain_resistance(strain_percent: f64) -> Result<f64, DomainError> {
    let resistance = GAUGE_NOMINAL_RESISTANCE + strain_percent;
    if resistance.is_finite() && resistance > 0.0 {
        Ok(resistance)
    } else {
        Err(DomainError::NonPositiveStrainResistance {
            strain: strain_percent,
            resistance,
        })
    }
}

/// LDR resistance under `light_intensity` lux: `1000 / (lux + 1)`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeLightIntensity`] for negative or NaN light levels.
pub fn ldr_resistance(light_intensity: f64) -> Result<f64, DomainError> {
    if light_intensity.is_nan() || light_intensity < 0.0 {
        return Err(DomainError::NegativeLightIntensity(light_intensity));
    }
    Ok(LDR_DARK_RESISTANCE / (light_intensity + 1.0))
}

/// A bridge whose unknown arm is a strain gauge on a smartwatch strap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrainScenario {
    /// Bridge the gauge is wired into.
    pub base: BridgeInputs,
    /// Simulated wrist movement in percent strain.
    pub strain_percent: f64,
}

/// Result of evaluating a [`StrainScenario`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrainReading {
    /// Gauge resistance in ohms.
    pub resistance: f64,
    /// Bridge output in volts.
    pub vab: f64,
    /// Step detection outcome.
    pub movement: Movement,
}

impl StrainScenario {
    /// Pair a bridge with a strain value.
    #[must_use]
    pub fn new(base: BridgeInputs, strain_percent: f64) -> Self {
        Self {
            base,
            strain_percent,
        }
    }

    /// The bridge with the gauge in place of Rx.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the strain gives a non-positive gauge resistance.
    pub fn inputs(&self) -> Result<BridgeInputs, DomainError> {
        self.base.with_rx(strain_resistance(self.strain_percent)?)
    }

    /// Evaluate the gauge bridge and classify the movement.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the strain gives a non-positive gauge resistance.
    ///
    /// # Examples
    /// ```
    /// use wheatstone::{BridgeInputs, Movement, StrainScenario};
    ///
    /// let reading = StrainScenario::new(BridgeInputs::default(), 5.0)
    ///     .evaluate()
    ///     .expect("valid strain");
    /// assert_eq!(reading.movement, Movement::StepDetected);
    /// ```
    pub fn evaluate(&self) -> Result<StrainReading, DomainError> {
        let inputs = self.inputs()?;
        let vab = inputs.evaluate().vab();
        let movement = classify_movement(vab);
        debug!(
            "strain {}% -> gauge {} ohm, vab = {vab}, {movement:?}",
            self.strain_percent,
            inputs.rx()
        );
        Ok(StrainReading {
            resistance: inputs.rx(),
            vab,
            movement,
        })
    }
}

/// A bridge whose unknown arm is a light-dependent resistor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LightScenario {
    /// Bridge the LDR is wired into.
    pub base: BridgeInputs,
    /// Ambient light in lux.
    pub light_intensity: f64,
}

/// Result of evaluating a [`LightScenario`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LightReading {
    /// LDR resistance in ohms.
    pub resistance: f64,
    /// Bridge output in volts.
    pub vab: f64,
    /// Street light state.
    pub streetlight: Streetlight,
}

impl LightScenario {
    /// Pair a bridge with a light level.
    #[must_use]
    pub fn new(base: BridgeInputs, light_intensity: f64) -> Self {
        Self {
            base,
            light_intensity,
        }
    }

    /// The bridge with the LDR in place of Rx.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the light level is negative.
    pub fn inputs(&self) -> Result<BridgeInputs, DomainError> {
        self.base.with_rx(ldr_resistance(self.light_intensity)?)
    }

    /// Evaluate the LDR bridge and decide the street light state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the light level is negative.
    pub fn evaluate(&self) -> Result<LightReading, DomainError> {
        let inputs = self.inputs()?;
        let vab = inputs.evaluate().vab();
        let streetlight = classify_light(vab);
        debug!(
            "light {} lux -> LDR {} ohm, vab = {vab}, {streetlight:?}",
            self.light_intensity,
            inputs.rx()
        );
        Ok(LightReading {
            resistance: inputs.rx(),
            vab,
            streetlight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstrained_gauge_matches_r3_and_stays_quiet() {
        let reading = StrainScenario::new(BridgeInputs::default(), 0.0)
            .evaluate()
            .expect("valid strain");
        assert_eq!(reading.resistance, 100.0);
        assert_eq!(reading.vab, 0.0);
        assert_eq!(reading.movement, Movement::NoMovement);
    }

    #[test]
    fn full_strain_registers_a_step() {
        let reading = StrainScenario::new(BridgeInputs::default(), 5.0)
            .evaluate()
            .expect("valid strain");
        assert_eq!(reading.resistance, 105.0);
        assert!((reading.vab - 5.0 * (0.5 - 105.0 / 205.0)).abs() < 1.0e-12);
        assert!((reading.vab + 0.061).abs() < 1.0e-3);
        assert_eq!(reading.movement, Movement::StepDetected);
    }

    #[test]
    fn small_strain_is_below_step_threshold() {
        let reading = StrainScenario::new(BridgeInputs::default(), 1.0)
            .evaluate()
            .expect("valid strain");
        assert!(reading.vab < 0.0);
        assert_eq!(reading.movement, Movement::NoMovement);
    }

    #[test]
    fn extreme_compression_is_rejected() {
        assert!(matches!(
            strain_resistance(-100.0),
            Err(DomainError::NonPositiveStrainResistance { .. })
        ));
        assert!(strain_resistance(f64::NAN).is_err());
    }

    #[test]
    fn ldr_follows_inverse_law() {
        assert_eq!(ldr_resistance(0.0).expect("dark"), 1000.0);
        let bright = ldr_resistance(1000.0).expect("bright");
        assert!((bright - 1000.0 / 1001.0).abs() < 1.0e-12);
        assert!(bright > 0.999 && bright < 1.0);
    }

    #[test]
    fn ldr_rejects_out_of_domain_light() {
        assert_eq!(
            ldr_resistance(-1.0),
            Err(DomainError::NegativeLightIntensity(-1.0))
        );
        assert!(ldr_resistance(f64::NAN).is_err());
    }

    #[test]
    fn mid_light_turns_streetlight_on() {
        let reading = LightScenario::new(BridgeInputs::default(), 500.0)
            .evaluate()
            .expect("valid light");
        assert!((reading.resistance - 1.996).abs() < 1.0e-3);
        assert!((reading.vab - 2.402).abs() < 1.0e-3);
        assert_eq!(reading.streetlight, Streetlight::On);
    }

    #[test]
    fn darkness_gives_negative_output_and_light_off() {
        let reading = LightScenario::new(BridgeInputs::default(), 0.0)
            .evaluate()
            .expect("valid light");
        assert!(reading.vab < 0.0);
        assert_eq!(reading.streetlight, Streetlight::Off);
    }
}
