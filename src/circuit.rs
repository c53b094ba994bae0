use std::fmt;

use crate::gate::Gate;

/// Error types for circuit validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// A target or control index is outside the register.
    LocOutOfRange { loc: usize, num_qubits: usize },
    /// A control qubit coincides with the target qubit.
    ControlOnTarget { loc: usize },
    /// The same control qubit is listed more than once.
    DuplicateControl { loc: usize },
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::LocOutOfRange { loc, num_qubits } => {
                write!(f, "qubit index {} out of range for {} qubits", loc, num_qubits)
            }
            CircuitError::ControlOnTarget { loc } => {
                write!(f, "control qubit {} coincides with the target", loc)
            }
            CircuitError::DuplicateControl { loc } => {
                write!(f, "control qubit {} listed more than once", loc)
            }
        }
    }
}

impl std::error::Error for CircuitError {}

/// A gate placed on a target qubit, optionally conditioned on control qubits.
///
/// Controls are active-high: the gate acts exactly on the basis states where
/// every control qubit reads 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGate {
    pub gate: Gate,
    pub target: usize,
    pub controls: Vec<usize>,
}

impl PositionedGate {
    pub fn new(gate: Gate, target: usize, controls: Vec<usize>) -> Self {
        PositionedGate { gate, target, controls }
    }
}

/// An ordered gate sequence on a fixed-size register.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    pub num_qubits: usize,
    pub gates: Vec<PositionedGate>,
}

impl Circuit {
    /// Validates gate placement and constructs the circuit.
    pub fn new(num_qubits: usize, gates: Vec<PositionedGate>) -> Result<Self, CircuitError> {
        for pg in &gates {
            if pg.target >= num_qubits {
                return Err(CircuitError::LocOutOfRange { loc: pg.target, num_qubits });
            }
            for (i, &loc) in pg.controls.iter().enumerate() {
                if loc >= num_qubits {
                    return Err(CircuitError::LocOutOfRange { loc, num_qubits });
                }
                if loc == pg.target {
                    return Err(CircuitError::ControlOnTarget { loc });
                }
                if pg.controls[..i].contains(&loc) {
                    return Err(CircuitError::DuplicateControl { loc });
                }
            }
        }
        Ok(Circuit { num_qubits, gates })
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Dimension of the register's state space.
    pub fn total_dim(&self) -> usize {
        1 << self.num_qubits
    }

    /// The adjoint circuit: gate order reversed, every gate daggered.
    pub fn dagger(&self) -> Circuit {
        let gates = self
            .gates
            .iter()
            .rev()
            .map(|pg| PositionedGate::new(pg.gate.dagger(), pg.target, pg.controls.clone()))
            .collect();
        // same placements as self, already validated
        Circuit { num_qubits: self.num_qubits, gates }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nqubits: {}", self.num_qubits)?;
        for pg in &self.gates {
            if pg.controls.is_empty() {
                writeln!(f, "  {} @ q[{}]", pg.gate, pg.target)?;
            } else {
                let controls: Vec<String> = pg.controls.iter().map(|c| c.to_string()).collect();
                writeln!(f, "  C(q[{}]) {} @ q[{}]", controls.join(", "), pg.gate, pg.target)?;
            }
        }
        Ok(())
    }
}

/// Places an uncontrolled gate on a target qubit.
pub fn put(target: usize, gate: Gate) -> PositionedGate {
    PositionedGate::new(gate, target, vec![])
}

/// Places a gate conditioned on the listed control qubits.
pub fn control(controls: Vec<usize>, target: usize, gate: Gate) -> PositionedGate {
    PositionedGate::new(gate, target, controls)
}
