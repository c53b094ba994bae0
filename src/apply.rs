use ndarray::Array2;
use num_complex::Complex64;

use crate::circuit::{Circuit, PositionedGate};
use crate::index::{all_bits_set, bit_at, flip_bit};
use crate::state::State;

/// Applies a 2x2 gate to the amplitude pair at rows `i` and `j`.
///
/// # Examples
/// ```
/// use ccx_tomography::apply::u1rows;
/// use ccx_tomography::gate::Gate;
/// use num_complex::Complex64;
///
/// let mut amps = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// u1rows(&mut amps, 0, 1, &Gate::X.matrix());
/// assert_eq!(amps[0], Complex64::new(0.0, 0.0));
/// assert_eq!(amps[1], Complex64::new(1.0, 0.0));
/// ```
pub fn u1rows(state: &mut [Complex64], i: usize, j: usize, gate: &Array2<Complex64>) {
    let vi = state[i];
    let vj = state[j];
    state[i] = gate[[0, 0]] * vi + gate[[0, 1]] * vj;
    state[j] = gate[[1, 0]] * vi + gate[[1, 1]] * vj;
}

/// Scales the amplitude at row `i` by `factor`.
pub fn mulrow(state: &mut [Complex64], i: usize, factor: Complex64) {
    state[i] *= factor;
}

/// Applies one positioned gate in place.
fn apply_gate(state: &mut State, pg: &PositionedGate) {
    let num_qubits = state.num_qubits;
    let matrix = pg.gate.matrix();
    let data = state.data.as_slice_mut().unwrap();

    if pg.gate.is_diagonal() {
        for index in 0..data.len() {
            if !all_bits_set(index, &pg.controls, num_qubits) {
                continue;
            }
            let b = bit_at(index, pg.target, num_qubits);
            mulrow(data, index, matrix[[b, b]]);
        }
    } else {
        // visit each amplitude pair once, entering from its target-bit-0 member
        for index in 0..data.len() {
            if bit_at(index, pg.target, num_qubits) != 0 {
                continue;
            }
            if !all_bits_set(index, &pg.controls, num_qubits) {
                continue;
            }
            let partner = flip_bit(index, pg.target, num_qubits);
            u1rows(data, index, partner, &matrix);
        }
    }
}

/// Runs a circuit on an input state and returns the evolved state.
pub fn apply(circuit: &Circuit, state: &State) -> State {
    assert_eq!(
        circuit.num_qubits, state.num_qubits,
        "circuit acts on {} qubits but state has {}",
        circuit.num_qubits, state.num_qubits
    );
    let mut out = state.clone();
    for pg in &circuit.gates {
        apply_gate(&mut out, pg);
    }
    out
}
