//! Dimensioned entry points built on `uom` quantities.

use uom::si::electric_potential::volt;
use uom::si::electrical_resistance::ohm;
use uom::si::f64::{ElectricPotential, ElectricalResistance};

use crate::bridge::{BridgeInputs, BridgeResult};
use crate::errors::DomainError;

/// Convenience helper for creating resistances in ohms.
///
/// # Examples
/// ```
/// use uom::si::electrical_resistance::kiloohm;
/// use wheatstone::ohms;
///
/// assert!((ohms(1500.0).get::<kiloohm>() - 1.5).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn ohms(value: f64) -> ElectricalResistance {
    ElectricalResistance::new::<ohm>(value)
}

/// Convenience helper for creating voltages in volts.
#[must_use]
pub fn volts(value: f64) -> ElectricPotential {
    ElectricPotential::new::<volt>(value)
}

impl BridgeInputs {
    /// Validate bridge inputs given as dimensioned quantities in any unit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] under the same conditions as [`BridgeInputs::new`].
    pub fn from_quantities(
        r1: ElectricalResistance,
        r2: ElectricalResistance,
        r3: ElectricalResistance,
        rx: ElectricalResistance,
        vs: ElectricPotential,
    ) -> Result<Self, DomainError> {
        Self::new(
            r1.get::<ohm>(),
            r2.get::<ohm>(),
            r3.get::<ohm>(),
            rx.get::<ohm>(),
            vs.get::<volt>(),
        )
    }
}

impl BridgeResult {
    /// Bridge output as a dimensioned voltage.
    #[must_use]
    pub fn output_voltage(&self) -> ElectricPotential {
        volts(self.vab())
    }
}
