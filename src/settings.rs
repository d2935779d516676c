use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use wheatstone::{BridgeInputs, DomainError, SweepRange};

/// Every input the simulator evaluates, as a user would set it on sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    /// R1 in ohms.
    pub r1: f64,
    /// R2 in ohms.
    pub r2: f64,
    /// R3 in ohms.
    pub r3: f64,
    /// Unknown resistor in ohms.
    pub rx: f64,
    /// Supply voltage in volts.
    pub vs: f64,
    /// Simulated wrist movement in percent strain.
    pub strain_percent: f64,
    /// Simulated ambient light in lux.
    pub light_intensity: f64,
    /// Rx domain plotted against Vab.
    pub sweep: SweepRange,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let bridge = BridgeInputs::default();
        Self {
            r1: bridge.r1(),
            r2: bridge.r2(),
            r3: bridge.r3(),
            rx: bridge.rx(),
            vs: bridge.vs(),
            strain_percent: 0.0,
            light_intensity: 500.0,
            sweep: SweepRange::default(),
        }
    }
}

impl SimulationSettings {
    /// Parse settings from JSON; missing fields keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("failed to parse settings: {}", path.display()))
    }

    /// Validated bridge built from the resistor and supply settings.
    pub fn bridge(&self) -> Result<BridgeInputs, DomainError> {
        BridgeInputs::new(self.r1, self.r2, self.r3, self.rx, self.vs)
    }
}

/// Command-line interface of the simulator.
#[derive(Debug, Parser)]
#[command(name = "wheatstone")]
#[command(about = "Wheatstone bridge simulator with step and light detection demos", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// JSON settings file applied before the flags below
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// R1 in ohms
    #[arg(long)]
    pub r1: Option<f64>,

    /// R2 in ohms
    #[arg(long)]
    pub r2: Option<f64>,

    /// R3 in ohms
    #[arg(long)]
    pub r3: Option<f64>,

    /// Unknown resistor Rx in ohms
    #[arg(long)]
    pub rx: Option<f64>,

    /// Supply voltage in volts
    #[arg(long, allow_negative_numbers = true)]
    pub vs: Option<f64>,

    /// Simulated wrist movement in percent strain
    #[arg(long, allow_negative_numbers = true)]
    pub strain: Option<f64>,

    /// Simulated light intensity in lux
    #[arg(long, allow_negative_numbers = true)]
    pub light: Option<f64>,

    /// Lower end of the Rx sweep in ohms
    #[arg(long)]
    pub sweep_min: Option<f64>,

    /// Upper end of the Rx sweep in ohms
    #[arg(long)]
    pub sweep_max: Option<f64>,

    /// Number of Rx samples in the sweep
    #[arg(long)]
    pub samples: Option<usize>,

    /// Append the Vab against Rx curve as CSV
    #[arg(long)]
    pub sweep: bool,

    /// Print the whole summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Defaults, then the optional settings file, then individual flags.
    pub fn resolve(&self) -> Result<SimulationSettings> {
        let mut settings = match &self.config {
            Some(path) => SimulationSettings::load(path)?,
            None => SimulationSettings::default(),
        };
        self.apply(&mut settings);
        Ok(settings)
    }

    /// Overwrite every setting that was given on the command line.
    fn apply(&self, settings: &mut SimulationSettings) {
        let overrides = [
            (self.r1, &mut settings.r1),
            (self.r2, &mut settings.r2),
            (self.r3, &mut settings.r3),
            (self.rx, &mut settings.rx),
            (self.vs, &mut settings.vs),
            (self.strain, &mut settings.strain_percent),
            (self.light, &mut settings.light_intensity),
            (self.sweep_min, &mut settings.sweep.min),
            (self.sweep_max, &mut settings.sweep.max),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value;
            }
        }
        if let Some(samples) = self.samples {
            settings.sweep.samples = samples;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_sliders() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.r1, 100.0);
        assert_eq!(settings.vs, 5.0);
        assert_eq!(settings.strain_percent, 0.0);
        assert_eq!(settings.light_intensity, 500.0);
        assert_eq!(settings.sweep, SweepRange::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = SimulationSettings::from_json(r#"{"rx": 200.0, "sweep": {"samples": 50}}"#)
            .expect("valid settings");
        assert_eq!(settings.rx, 200.0);
        assert_eq!(settings.r2, 100.0);
        assert_eq!(settings.sweep.samples, 50);
        assert_eq!(settings.sweep.max, 1000.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SimulationSettings::from_json(r#"{"r4": 1.0}"#).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "wheatstone", "--rx", "250", "--vs", "9", "--light", "0", "--samples", "10",
        ]);
        let settings = args.resolve().expect("no config file");
        assert_eq!(settings.rx, 250.0);
        assert_eq!(settings.vs, 9.0);
        assert_eq!(settings.light_intensity, 0.0);
        assert_eq!(settings.sweep.samples, 10);
        assert_eq!(settings.r1, 100.0);
    }

    #[test]
    fn missing_config_file_reports_path() {
        let args = CliArgs::parse_from(["wheatstone", "--config", "/nonexistent/bridge.json"]);
        let error = args.resolve().expect_err("file does not exist");
        assert!(error.to_string().contains("/nonexistent/bridge.json"));
    }

    #[test]
    fn invalid_bridge_settings_surface_domain_error() {
        let settings = SimulationSettings {
            r1: 0.0,
            ..SimulationSettings::default()
        };
        assert!(matches!(
            settings.bridge(),
            Err(DomainError::NonPositiveResistance { .. })
        ));
    }
}
