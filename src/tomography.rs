//! Verification of the two-slot Toffoli template.
//!
//! The fixed template interleaves two tunable single-qubit gates with a
//! Clifford+T skeleton on three qubits. With the solved parameters, H for
//! the first slot and T dagger for the second, the template realizes the
//! Toffoli gate exactly.

use std::fmt;

use crate::circuit::{control, put, Circuit};
use crate::equiv::{global_phase_equivalent, EquivalenceReport};
use crate::gate::{Gate, U3Params};
use crate::truth_table::{truth_table, TruthTable};
use crate::unitary::{ccx_unitary, circuit_unitary};

/// Errors raised before any simulation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TomographyError {
    /// A configured angle is NaN or infinite.
    NonFiniteAngle { slot: &'static str, params: U3Params },
}

impl fmt::Display for TomographyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomographyError::NonFiniteAngle { slot, params } => {
                write!(f, "{} slot has a non-finite angle: {}", slot, params)
            }
        }
    }
}

impl std::error::Error for TomographyError {}

/// Numeric disagreement between the template and the Toffoli reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericMismatch {
    /// Largest elementwise deviation from the phase-aligned Toffoli matrix.
    pub max_deviation: f64,
    /// Whether the truth tables still agreed despite the unitary mismatch.
    pub truth_table_matches: bool,
}

impl fmt::Display for NumericMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circuit deviates from CCX: max deviation {:.3e}, truth tables {}",
            self.max_deviation,
            if self.truth_table_matches { "match" } else { "differ" }
        )
    }
}

impl std::error::Error for NumericMismatch {}

/// Combined outcome of the unitary and truth table checks.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub first: U3Params,
    pub second: U3Params,
    pub equivalence: EquivalenceReport,
    pub task_table: TruthTable,
    pub reference_table: TruthTable,
}

impl VerificationReport {
    /// Whether the simulated truth table equals the reference table.
    pub fn truth_table_matches(&self) -> bool {
        self.task_table == self.reference_table
    }

    /// Both checks passed.
    pub fn passed(&self) -> bool {
        self.equivalence.equivalent && self.truth_table_matches()
    }

    /// Collapses the report into a Result for callers that only need pass or fail.
    pub fn as_result(&self) -> Result<(), NumericMismatch> {
        if self.passed() {
            Ok(())
        } else {
            Err(NumericMismatch {
                max_deviation: self.equivalence.max_deviation,
                truth_table_matches: self.truth_table_matches(),
            })
        }
    }
}

/// Builds the fixed 3-qubit template with the two slots filled in.
///
/// The first slot opens the circuit on q2; the second sits between the final
/// pair of CX(0, 2) gates.
pub fn task_circuit(first: U3Params, second: U3Params) -> Circuit {
    Circuit::new(3, vec![
        put(2, first.gate()),
        put(0, Gate::T),
        control(vec![0], 1, Gate::X),
        put(1, Gate::T.dagger()),
        control(vec![0], 1, Gate::X),
        put(1, Gate::T),
        control(vec![1], 2, Gate::X),
        put(2, Gate::T.dagger()),
        control(vec![0], 2, Gate::X),
        put(2, Gate::T),
        control(vec![1], 2, Gate::X),
        put(2, second.gate()),
        control(vec![0], 2, Gate::X),
        put(2, Gate::T),
        put(2, Gate::H),
    ])
    .unwrap()
}

/// The one-gate reference: X on q2 controlled on q0 and q1.
pub fn reference_circuit() -> Circuit {
    Circuit::new(3, vec![control(vec![0, 1], 2, Gate::X)]).unwrap()
}

/// Runs both checks for a candidate pair of angle triples.
///
/// The unitary check compares the composed 8x8 matrix against CCX up to a
/// global phase. The truth table check enumerates all eight basis inputs on
/// both circuits and compares the outcome maps.
pub fn verify(
    first: U3Params,
    second: U3Params,
    atol: f64,
) -> Result<VerificationReport, TomographyError> {
    if !first.is_finite() {
        return Err(TomographyError::NonFiniteAngle { slot: "first", params: first });
    }
    if !second.is_finite() {
        return Err(TomographyError::NonFiniteAngle { slot: "second", params: second });
    }

    let task = task_circuit(first, second);
    let reference = reference_circuit();

    let equivalence = global_phase_equivalent(&circuit_unitary(&task), &ccx_unitary(), atol);
    let task_table = truth_table(&task);
    let reference_table = truth_table(&reference);

    log::info!(
        "verified first={} second={}: unitary {}, truth table {}",
        first,
        second,
        if equivalence.equivalent { "ok" } else { "mismatch" },
        if task_table == reference_table { "ok" } else { "mismatch" },
    );

    Ok(VerificationReport { first, second, equivalence, task_table, reference_table })
}
