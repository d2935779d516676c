#![warn(clippy::pedantic)]

use wheatstone::{
    classify_balance, compute_vab, sweep, Balance, BridgeInputs, DomainError, LightScenario,
    Movement, StrainScenario, Streetlight, SweepRange,
};

fn reference_bridge() -> BridgeInputs {
    BridgeInputs::new(100.0, 100.0, 100.0, 100.0, 5.0).expect("reference bridge is valid")
}

#[test]
fn equal_arms_are_balanced() {
    let vab = compute_vab(100.0, 100.0, 100.0, 100.0, 5.0).expect("valid bridge");
    assert!(vab.abs() < f64::EPSILON);
    assert_eq!(classify_balance(vab), Balance::Balanced);
    assert_eq!(format!("{vab:.3}"), "0.000");
}

#[test]
fn doubled_unknown_reads_negative_output() {
    let vab = compute_vab(100.0, 100.0, 100.0, 200.0, 5.0).expect("valid bridge");
    assert!((vab + 0.833_333).abs() < 1.0e-6);
    assert_eq!(format!("{vab:.3}"), "-0.833");
    assert_eq!(classify_balance(vab), Balance::NotBalanced);
}

#[test]
fn unknown_resistor_limits_match_divider_ratios() {
    let (r1, r2, r3, vs) = (150.0, 100.0, 100.0, 5.0);
    let upper = vs * r2 / (r1 + r2);
    let small = compute_vab(r1, r2, r3, 1.0e-9, vs).expect("tiny rx");
    let large = compute_vab(r1, r2, r3, 1.0e12, vs).expect("huge rx");
    assert!((small - upper).abs() < 1.0e-6);
    assert!((large - (upper - vs)).abs() < 1.0e-6);
}

#[test]
fn strain_and_light_demonstrations() {
    let base = reference_bridge();

    let resting = StrainScenario::new(base, 0.0).evaluate().expect("valid strain");
    assert_eq!(resting.movement, Movement::NoMovement);
    let step = StrainScenario::new(base, 5.0).evaluate().expect("valid strain");
    assert_eq!(format!("{:.3}", step.vab), "-0.061");
    assert_eq!(step.movement, Movement::StepDetected);

    let dusk = LightScenario::new(base, 500.0).evaluate().expect("valid light");
    assert_eq!(format!("{:.3}", dusk.vab), "2.402");
    assert_eq!(dusk.streetlight, Streetlight::On);
}

#[test]
fn reference_sweep_covers_domain_inclusively() {
    let curve = sweep(100.0, 100.0, 100.0, 5.0, 1.0, 1000.0, 500).expect("valid sweep");
    let points = curve.points();
    assert_eq!(points.len(), 500);
    assert!((points[0].rx - 1.0).abs() < f64::EPSILON);
    assert!((points[499].rx - 1000.0).abs() < f64::EPSILON);
    assert!(points.windows(2).all(|pair| pair[0].rx < pair[1].rx));
    assert_eq!(
        curve,
        reference_bridge()
            .sweep_rx(&SweepRange::default())
            .expect("valid sweep")
    );
}

#[test]
fn out_of_domain_inputs_are_reported() {
    assert!(matches!(
        compute_vab(100.0, 100.0, -100.0, 100.0, 5.0),
        Err(DomainError::NonPositiveResistance { .. })
    ));
    assert!(matches!(
        LightScenario::new(reference_bridge(), -1.0).evaluate(),
        Err(DomainError::NegativeLightIntensity(_))
    ));
    assert!(matches!(
        sweep(100.0, 100.0, 100.0, 5.0, 0.0, 1000.0, 500),
        Err(DomainError::InvalidSweepRange { .. })
    ));
}
