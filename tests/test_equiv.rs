use ccx_tomography::equiv::{global_phase_equivalent, DEFAULT_ATOL};
use ccx_tomography::gate::Gate;
use ccx_tomography::unitary::ccx_unitary;
use num_complex::Complex64;

#[test]
fn test_identical_matrices_are_equivalent() {
    let u = ccx_unitary();
    let report = global_phase_equivalent(&u, &u, DEFAULT_ATOL);
    assert!(report.equivalent);
    assert!((report.phase - Complex64::new(1.0, 0.0)).norm() < 1e-9);
    assert!(report.max_deviation < 1e-12);
}

#[test]
fn test_global_phase_is_recovered() {
    let v = Gate::H.matrix();
    let gamma = 0.7;
    let u = v.mapv(|e| e * Complex64::from_polar(1.0, gamma));
    let report = global_phase_equivalent(&u, &v, DEFAULT_ATOL);
    assert!(report.equivalent);
    assert!((report.phase - Complex64::from_polar(1.0, gamma)).norm() < 1e-9);
}

#[test]
fn test_orthogonal_matrices_are_not_equivalent() {
    // tr(Z-dagger X) = 0, so no phase can align them
    let report = global_phase_equivalent(&Gate::X.matrix(), &Gate::Z.matrix(), DEFAULT_ATOL);
    assert!(!report.equivalent);
}

#[test]
fn test_small_perturbation_fails_tight_tolerance() {
    let v = Gate::H.matrix();
    let mut u = v.clone();
    u[[0, 0]] += Complex64::new(1e-3, 0.0);
    let report = global_phase_equivalent(&u, &v, DEFAULT_ATOL);
    assert!(!report.equivalent);
    assert!(report.max_deviation > 1e-4);
    assert!(report.max_deviation < 2e-3);
}

#[test]
fn test_scaled_matrix_is_not_equivalent() {
    // a non-unit scale changes magnitudes, not just the phase
    let v = Gate::H.matrix();
    let u = v.mapv(|e| e * Complex64::new(2.0, 0.0));
    let report = global_phase_equivalent(&u, &v, DEFAULT_ATOL);
    assert!(!report.equivalent);
}

#[test]
fn test_repeated_comparison_is_deterministic() {
    let u = ccx_unitary();
    let a = global_phase_equivalent(&u, &u, DEFAULT_ATOL);
    let b = global_phase_equivalent(&u, &u, DEFAULT_ATOL);
    assert_eq!(a, b);
}
