use std::fmt;

use crate::apply::apply;
use crate::circuit::Circuit;
use crate::index::format_bits;
use crate::state::State;

/// Basis-level input to output map of a circuit.
///
/// Row `i` holds the most probable output index when the circuit runs on
/// basis input `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub num_qubits: usize,
    outputs: Vec<usize>,
}

impl TruthTable {
    /// Builds a table directly from per-input outputs.
    ///
    /// # Panics
    /// Panics if `outputs.len()` is not `2^num_qubits`.
    pub fn from_outputs(num_qubits: usize, outputs: Vec<usize>) -> Self {
        assert_eq!(
            outputs.len(),
            1 << num_qubits,
            "expected {} rows, got {}",
            1usize << num_qubits,
            outputs.len()
        );
        TruthTable { num_qubits, outputs }
    }

    /// The recorded output index for a basis input.
    pub fn output_of(&self, input: usize) -> usize {
        self.outputs[input]
    }

    /// Iterates (input, output) index pairs in input order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.outputs.iter().copied().enumerate()
    }

    pub fn num_rows(&self) -> usize {
        self.outputs.len()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (input, output) in self.rows() {
            writeln!(
                f,
                "  {} -> {}",
                format_bits(input, self.num_qubits),
                format_bits(output, self.num_qubits)
            )?;
        }
        Ok(())
    }
}

/// Enumerates a circuit's action on every computational basis input.
///
/// Each input is simulated and read out as its most probable outcome. For
/// circuits that permute the basis this recovers the exact bit strings.
pub fn truth_table(circuit: &Circuit) -> TruthTable {
    let outputs = (0..circuit.total_dim())
        .map(|input| {
            let out = apply(circuit, &State::basis_state(circuit.num_qubits, input));
            argmax(&out.probs())
        })
        .collect();
    TruthTable { num_qubits: circuit.num_qubits, outputs }
}

/// Index of the largest probability, first winner on ties.
fn argmax(probs: &[f64]) -> usize {
    let mut best = 0;
    for (i, &p) in probs.iter().enumerate() {
        if p > probs[best] {
            best = i;
        }
    }
    best
}

/// The Toffoli truth table: identity except for swapping 110 and 111.
pub fn ccx_truth_table() -> TruthTable {
    let mut outputs: Vec<usize> = (0..8).collect();
    outputs.swap(6, 7);
    TruthTable { num_qubits: 3, outputs }
}
