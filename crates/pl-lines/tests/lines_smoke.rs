//! Integration tests: the three sample lines of the dispatch exercise.

use num_complex::Complex64;
use pl_components::ParallelCircuits;
use pl_core::eng::{in_km, in_kv};
use pl_core::{Tolerances, nearly_equal};
use pl_lines::{LineKind, NetworkLine};

fn sample_lines() -> Vec<NetworkLine> {
    vec![
        NetworkLine::new("ВЛ-330 Каменный Бор-Петрозаводск", 171.0, 330.0).unwrap(),
        NetworkLine::overhead(
            "ВЛ-330 Кондопога-Петрозаводск",
            76.0,
            330.0,
            Complex64::new(1.0, 1.0),
            Complex64::new(0.5, 0.5),
        )
        .unwrap(),
        NetworkLine::cable(
            "КЛ-220 Василеостровская-Северная",
            4.8,
            220.0,
            Complex64::new(0.1, 0.1),
            Complex64::new(0.05, 0.05),
            "XLPE",
        )
        .unwrap(),
    ]
}

#[test]
fn sample_lines_classified() {
    let verdicts: Vec<bool> = sample_lines().iter().map(NetworkLine::is_backbone_line).collect();
    assert_eq!(verdicts, vec![true, true, false]);
}

#[test]
fn sample_lines_displayed() {
    let shown: Vec<String> = sample_lines().iter().map(ToString::to_string).collect();
    assert_eq!(
        shown,
        vec![
            "Transmission line: ВЛ-330 Каменный Бор-Петрозаводск",
            "Overhead line: ВЛ-330 Кондопога-Петрозаводск",
            "Cable line: КЛ-220 Василеостровская-Северная",
        ]
    );
}

#[test]
fn sample_lines_paralleled() {
    let tol = Tolerances::default();
    let mut lines = sample_lines();

    lines[0].add_parallel_lines(3).unwrap();
    lines[1].add_parallel_lines(2).unwrap();
    lines[2].add_parallel_lines(2).unwrap();

    assert!(nearly_equal(in_km(lines[0].conditional_length()), 57.0, tol));
    assert!(nearly_equal(in_km(lines[1].conditional_length()), 38.0, tol));
    assert!(nearly_equal(in_km(lines[2].conditional_length()), 2.4, tol));

    assert_eq!(lines[1].z(), Some(Complex64::new(0.5, 0.5)));
    assert_eq!(lines[1].y(), Some(Complex64::new(1.0, 1.0)));
    assert_eq!(lines[2].z(), Some(Complex64::new(0.05, 0.05)));
    assert_eq!(lines[2].y(), Some(Complex64::new(0.1, 0.1)));
    assert_eq!(lines[2].insulator(), Some("XLPE"));
}

#[test]
fn kind_is_fixed_and_inspectable() {
    let lines = sample_lines();
    assert!(matches!(lines[0].kind(), LineKind::Base));
    assert!(matches!(lines[1].kind(), LineKind::Overhead(_)));
    assert!(matches!(lines[2].kind(), LineKind::Cable { .. }));
    assert!(nearly_equal(in_kv(lines[2].u_nom()), 220.0, Tolerances::default()));
}

#[test]
fn invalid_cable_admittance() {
    let err = NetworkLine::cable(
        "КЛ-10",
        1.2,
        10.0,
        Complex64::new(0.2, 0.08),
        Complex64::new(0.0, -1.0),
        "PVC",
    )
    .unwrap_err();
    assert!(err.to_string().contains("imaginary part of line admittance"));
}
