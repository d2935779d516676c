use crate::analysis::SimulationSummary;
use std::fmt::Write;
use wheatstone::SweepCurve;

/// Render the bridge reading and both sensor demonstrations as text.
///
/// Voltages are printed to three decimal places, the same precision as the
/// reference page, so numbers can be compared one to one.
#[must_use]
pub fn render_summary(summary: &SimulationSummary) -> String {
    let mut output = String::new();
    let inputs = &summary.inputs;

    writeln!(
        &mut output,
        "Wheatstone bridge (R1 = {:.1} ohm, R2 = {:.1} ohm, R3 = {:.1} ohm, Rx = {:.1} ohm, Vs = {:.1} V)",
        inputs.r1(),
        inputs.r2(),
        inputs.r3(),
        inputs.rx(),
        inputs.vs()
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Bridge Output Voltage (Vab): {:.3} V",
        summary.vab
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{}", summary.balance).expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Rx for balance (R2 * R3 / R1): {:.3} ohm",
        summary.balancing_rx
    )
    .expect("writing to string cannot fail");

    let strain = &summary.strain;
    writeln!(
        &mut output,
        "\nStep detection (strain gauge = {:.3} ohm)",
        strain.resistance
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Output Voltage with Movement: {:.3} V",
        strain.vab
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{}", strain.movement).expect("writing to string cannot fail");

    let light = &summary.light;
    writeln!(
        &mut output,
        "\nLight detection (LDR = {:.3} ohm)",
        light.resistance
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Output Voltage at Current Light Level: {:.3} V",
        light.vab
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{}", light.streetlight).expect("writing to string cannot fail");

    match summary.curve.balance_crossing() {
        Some((before, after)) => writeln!(
            &mut output,
            "\nVab crosses zero between Rx = {:.3} ohm and Rx = {:.3} ohm",
            before.rx, after.rx
        )
        .expect("writing to string cannot fail"),
        None => output.push_str("\nVab does not cross zero over the swept Rx range\n"),
    }

    output
}

/// Render the sweep as two-column CSV for an external plotter.
#[must_use]
pub fn render_sweep_csv(curve: &SweepCurve) -> String {
    let mut output = String::from("rx_ohms,vab_volts\n");
    for point in curve {
        writeln!(&mut output, "{:.6},{:.6}", point.rx, point.vab)
            .expect("writing to string cannot fail");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use crate::settings::SimulationSettings;
    use wheatstone::SweepRange;

    #[test]
    fn formats_reference_messages() {
        let settings = SimulationSettings {
            rx: 200.0,
            strain_percent: 5.0,
            ..SimulationSettings::default()
        };
        let summary = run_analysis(&settings).expect("valid settings");
        let report = render_summary(&summary);

        assert!(report.contains("Bridge Output Voltage (Vab): -0.833 V"));
        assert!(report.contains("Bridge is Not Balanced!"));
        assert!(report.contains("Output Voltage with Movement: -0.061 V"));
        assert!(report.contains("Detected: Movement registered as a step!"));
        assert!(report.contains("Output Voltage at Current Light Level: 2.402 V"));
        assert!(report.contains("Streetlight: ON (It's getting dark)"));
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let settings = SimulationSettings {
            sweep: SweepRange {
                min: 1.0,
                max: 2.0,
                samples: 2,
            },
            ..SimulationSettings::default()
        };
        let summary = run_analysis(&settings).expect("valid settings");
        let csv = render_sweep_csv(&summary.curve);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "rx_ohms,vab_volts");
        assert!(lines[1].starts_with("1.000000,"));
        assert!(lines[2].starts_with("2.000000,"));
    }

    #[test]
    fn reports_missing_crossing() {
        let settings = SimulationSettings {
            sweep: SweepRange {
                min: 500.0,
                max: 1000.0,
                samples: 10,
            },
            ..SimulationSettings::default()
        };
        let summary = run_analysis(&settings).expect("valid settings");
        assert!(render_summary(&summary).contains("does not cross zero"));
    }
}
