#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod bridge;
mod errors;
mod scenarios;
mod sweep;
mod units;

pub use bridge::{
    classify_balance, classify_light, classify_movement, compute_vab, Balance, BridgeArm,
    BridgeInputs, BridgeResult, Movement, Streetlight, BALANCE_THRESHOLD, LIGHT_THRESHOLD,
    MOVEMENT_THRESHOLD, RESISTANCE_RANGE, SUPPLY_RANGE,
};
pub use errors::DomainError;
pub use scenarios::{
    ldr_resistance, strain_resistance, LightReading, LightScenario, StrainReading,
    StrainScenario, GAUGE_NOMINAL_RESISTANCE, LDR_DARK_RESISTANCE, LIGHT_RANGE, STRAIN_RANGE,
};
pub use sweep::{sweep, SweepCurve, SweepPoint, SweepRange};
pub use units::{ohms, volts};
