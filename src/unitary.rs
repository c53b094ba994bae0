use ndarray::Array2;
use num_complex::Complex64;

use crate::circuit::{Circuit, PositionedGate};
use crate::index::{all_bits_set, bit_at, flip_bit};

/// Returns the conjugate transpose of a matrix.
pub fn conjugate_transpose(matrix: &Array2<Complex64>) -> Array2<Complex64> {
    let (rows, cols) = matrix.dim();
    let mut result = Array2::zeros((cols, rows));
    for i in 0..rows {
        for j in 0..cols {
            result[[j, i]] = matrix[[i, j]].conj();
        }
    }
    result
}

fn mat_mul(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    let mut result = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut acc = Complex64::new(0.0, 0.0);
            for k in 0..n {
                acc += a[[i, k]] * b[[k, j]];
            }
            result[[i, j]] = acc;
        }
    }
    result
}

/// Expands one positioned gate to its full matrix on the register.
///
/// Basis columns where some control bit reads 0 pass through unchanged.
pub fn gate_unitary(num_qubits: usize, pg: &PositionedGate) -> Array2<Complex64> {
    let dim = 1usize << num_qubits;
    let matrix = pg.gate.matrix();
    let mut full = Array2::zeros((dim, dim));
    for col in 0..dim {
        if all_bits_set(col, &pg.controls, num_qubits) {
            let b = bit_at(col, pg.target, num_qubits);
            let row0 = if b == 0 { col } else { flip_bit(col, pg.target, num_qubits) };
            let row1 = flip_bit(row0, pg.target, num_qubits);
            full[[row0, col]] = matrix[[0, b]];
            full[[row1, col]] = matrix[[1, b]];
        } else {
            full[[col, col]] = Complex64::new(1.0, 0.0);
        }
    }
    full
}

/// Composes the full unitary of a circuit.
///
/// Gates apply in sequence order, so the product is U = U_k ... U_2 U_1.
pub fn circuit_unitary(circuit: &Circuit) -> Array2<Complex64> {
    let dim = circuit.total_dim();
    let mut result = Array2::eye(dim);
    for pg in &circuit.gates {
        result = mat_mul(&gate_unitary(circuit.num_qubits, pg), &result);
    }
    result
}

/// The 8x8 Toffoli matrix: identity except for swapping |110> and |111>.
pub fn ccx_unitary() -> Array2<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    let mut matrix = Array2::zeros((8, 8));
    for i in 0..6 {
        matrix[[i, i]] = one;
    }
    matrix[[6, 7]] = one;
    matrix[[7, 6]] = one;
    matrix
}

/// Whether M M-dagger is the identity within `atol`.
pub fn is_unitary(matrix: &Array2<Complex64>, atol: f64) -> bool {
    if matrix.nrows() != matrix.ncols() {
        return false;
    }
    let n = matrix.nrows();
    let product = mat_mul(matrix, &conjugate_transpose(matrix));
    for i in 0..n {
        for j in 0..n {
            let expected =
                if i == j { Complex64::new(1.0, 0.0) } else { Complex64::new(0.0, 0.0) };
            if (product[[i, j]] - expected).norm() > atol {
                return false;
            }
        }
    }
    true
}
