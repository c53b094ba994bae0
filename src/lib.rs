pub mod gate;
pub mod index;
pub mod circuit;
pub mod state;
pub mod apply;
pub mod unitary;
pub mod equiv;
pub mod truth_table;
pub mod tomography;
pub mod json;

pub use gate::{Gate, U3Params};
pub use circuit::{Circuit, PositionedGate, put, control};
pub use state::State;
pub use apply::apply;
pub use unitary::{ccx_unitary, circuit_unitary, gate_unitary};
pub use equiv::{global_phase_equivalent, EquivalenceReport, DEFAULT_ATOL};
pub use truth_table::{truth_table, ccx_truth_table, TruthTable};
pub use tomography::{task_circuit, reference_circuit, verify, VerificationReport};
