use ndarray::Array1;
use num_complex::Complex64;

use crate::index::basis_index;

/// State vector of a qubit register.
#[derive(Debug, Clone)]
pub struct State {
    /// Number of qubits in the register.
    pub num_qubits: usize,
    /// 2^num_qubits amplitudes, row-major with qubit 0 most significant.
    pub data: Array1<Complex64>,
}

impl State {
    /// Creates a state from raw amplitudes.
    ///
    /// # Panics
    /// Panics if `data.len()` is not `2^num_qubits`.
    pub fn new(num_qubits: usize, data: Array1<Complex64>) -> Self {
        assert_eq!(
            data.len(),
            1 << num_qubits,
            "state vector length {} does not match {} qubits",
            data.len(),
            num_qubits
        );
        State { num_qubits, data }
    }

    /// The all-zeros state |00...0>.
    pub fn zero_state(num_qubits: usize) -> Self {
        Self::basis_state(num_qubits, 0)
    }

    /// The computational basis state with the given index.
    pub fn basis_state(num_qubits: usize, index: usize) -> Self {
        let total = 1usize << num_qubits;
        assert!(index < total, "basis index {} out of range for {} qubits", index, num_qubits);
        let mut data = Array1::zeros(total);
        data[index] = Complex64::new(1.0, 0.0);
        State { num_qubits, data }
    }

    /// The product state |b0 b1 ... b(n-1)> for the given bits, qubit 0 first.
    pub fn product_state(num_qubits: usize, bits: &[usize]) -> Self {
        assert_eq!(bits.len(), num_qubits, "expected {} bits, got {}", num_qubits, bits.len());
        Self::basis_state(num_qubits, basis_index(bits))
    }

    /// Dimension of the underlying vector space.
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }

    /// Euclidean norm of the state vector.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Probability of each basis outcome.
    pub fn probs(&self) -> Vec<f64> {
        self.data.iter().map(|c| c.norm_sqr()).collect()
    }
}
