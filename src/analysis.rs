use log::debug;
use serde::Serialize;
use wheatstone::{
    Balance, BridgeInputs, DomainError, LightReading, LightScenario, StrainReading,
    StrainScenario, SweepCurve,
};

use crate::settings::SimulationSettings;

/// Everything the report shows for one set of settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Validated bridge the other results derive from.
    pub inputs: BridgeInputs,
    /// Bridge output voltage in volts.
    pub vab: f64,
    /// Balance state of the bridge.
    pub balance: Balance,
    /// Rx that would balance R1, R2 and R3.
    pub balancing_rx: f64,
    /// Strain-gauge step detection.
    pub strain: StrainReading,
    /// Light-dependent resistor street light.
    pub light: LightReading,
    /// Vab sampled over the configured Rx domain.
    pub curve: SweepCurve,
}

/// Evaluate the bridge, both sensor demonstrations and the Rx sweep.
///
/// Each piece is an independent pure evaluation sharing R1, R2, R3 and Vs.
pub fn run_analysis(settings: &SimulationSettings) -> Result<SimulationSummary, DomainError> {
    let inputs = settings.bridge()?;
    let result = inputs.evaluate();
    debug!("bridge {inputs:?} -> vab = {}", result.vab());

    let strain = StrainScenario::new(inputs, settings.strain_percent).evaluate()?;
    let light = LightScenario::new(inputs, settings.light_intensity).evaluate()?;
    let curve = inputs.sweep_rx(&settings.sweep)?;

    Ok(SimulationSummary {
        inputs,
        vab: result.vab(),
        balance: result.balance(),
        balancing_rx: inputs.balancing_rx(),
        strain,
        light,
        curve,
    })
}
