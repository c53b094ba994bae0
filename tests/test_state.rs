use ccx_tomography::state::State;
use ndarray::Array1;
use num_complex::Complex64;

const ATOL: f64 = 1e-10;

#[test]
fn test_zero_state() {
    let state = State::zero_state(3);
    assert_eq!(state.num_qubits, 3);
    assert_eq!(state.total_dim(), 8);
    assert!((state.data[0] - Complex64::new(1.0, 0.0)).norm() < ATOL);
    for i in 1..8 {
        assert!(state.data[i].norm() < ATOL);
    }
}

#[test]
fn test_basis_state() {
    let state = State::basis_state(3, 6);
    assert!((state.data[6] - Complex64::new(1.0, 0.0)).norm() < ATOL);
    assert!((state.norm() - 1.0).abs() < ATOL);
}

#[test]
fn test_product_state_ordering() {
    // |110>: qubit 0 = 1, qubit 1 = 1, qubit 2 = 0 lands at index 6
    let state = State::product_state(3, &[1, 1, 0]);
    assert!((state.data[6] - Complex64::new(1.0, 0.0)).norm() < ATOL);

    // |001>: only qubit 2 set lands at index 1
    let state = State::product_state(3, &[0, 0, 1]);
    assert!((state.data[1] - Complex64::new(1.0, 0.0)).norm() < ATOL);
}

#[test]
fn test_probs_and_norm() {
    let amp = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
    let zero = Complex64::new(0.0, 0.0);
    let state = State::new(2, Array1::from_vec(vec![amp, zero, zero, amp]));
    let probs = state.probs();
    assert!((probs[0] - 0.5).abs() < ATOL);
    assert!((probs[1]).abs() < ATOL);
    assert!((probs[3] - 0.5).abs() < ATOL);
    assert!((state.norm() - 1.0).abs() < ATOL);
}

#[test]
#[should_panic]
fn test_new_rejects_wrong_length() {
    let data = Array1::from_vec(vec![Complex64::new(1.0, 0.0); 3]);
    State::new(2, data);
}

#[test]
#[should_panic]
fn test_basis_state_rejects_out_of_range() {
    State::basis_state(2, 4);
}
