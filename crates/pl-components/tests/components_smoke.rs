//! Integration tests for pl-components using the coursework sample values.

use pl_components::{
    Generator, OperatingMode, ParallelCircuits, Transformer, TransmissionLine, WindingSide,
};
use pl_core::eng::{in_mvar, in_mw, in_ohm, in_siemens};
use pl_core::{ErrorKind, Tolerances, nearly_equal};

fn tol() -> Tolerances {
    Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    }
}

#[test]
fn double_circuit_line_with_compensation() {
    let mut line = TransmissionLine::new(0.01, 0.03, 3.25, 100.0).unwrap();

    line.add_parallel_lines(2).unwrap();
    assert!(nearly_equal(in_ohm(line.r_line()), 0.5, tol()));
    assert!(nearly_equal(in_ohm(line.x_line()), 1.5, tol()));
    assert!(nearly_equal(in_siemens(line.b_line()), 6.5e-4, tol()));

    // Compensation larger than the line reactance is accepted as given
    line.line_compensation(-15.0).unwrap();
    assert!(nearly_equal(in_ohm(line.x_line()), -13.5, tol()));
}

#[test]
fn lines_usable_through_trait_object() {
    let mut lines: Vec<Box<dyn ParallelCircuits>> = vec![
        Box::new(TransmissionLine::new(0.01, 0.03, 3.25, 100.0).unwrap()),
        Box::new(TransmissionLine::new(0.12, 0.4, 2.7, 35.0).unwrap()),
    ];

    for line in &mut lines {
        line.add_parallel_lines(3).unwrap();
    }
    assert!(lines[0].add_parallel_lines(0).is_err());
}

#[test]
fn transformer_referral_then_tap_change() {
    let mut trans = Transformer::new(2.0, 20.0, -15.0, 115.0, 10.5).unwrap();
    assert_eq!(trans.referred_side(), WindingSide::High);

    trans.bring_to_low_voltage();
    assert_eq!(trans.referred_side(), WindingSide::Low);
    let k = 10.5 / 115.0;
    assert!(nearly_equal(in_ohm(trans.r_trans()), 2.0 * k * k, tol()));

    trans.soldering_changing(-2, 1.78).unwrap();
    let expected = 115.0 * (1.0 - 2.0 * 0.0178) / 10.5;
    assert!(nearly_equal(trans.k_trans(), expected, tol()));

    trans.bring_to_low_voltage();
    assert_eq!(trans.referred_side(), WindingSide::High);
}

#[test]
fn generator_full_cycle() {
    let mut gen_1 = Generator::new(15.75, 100.0, 0.75).unwrap();
    assert!(nearly_equal(in_mvar(gen_1.q()), 75.0, tol()));

    gen_1.generation_changing(50.0).unwrap();
    assert!(nearly_equal(in_mvar(gen_1.q()), 37.5, tol()));

    gen_1.motor_mode_switching(-50.0, 20.0).unwrap();
    assert_eq!(gen_1.mode(), OperatingMode::Motoring);
    assert!(nearly_equal(in_mw(gen_1.p()), -50.0, tol()));

    let err = gen_1.motor_mode_switching(-10.0, 20.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(nearly_equal(in_mw(gen_1.p()), -50.0, tol()));

    // Back to generating: Q follows the original tg_phi again
    gen_1.generation_changing(80.0).unwrap();
    assert!(nearly_equal(in_mvar(gen_1.q()), 60.0, tol()));
}
