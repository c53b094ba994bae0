use ccx_tomography::circuit::{control, put, Circuit};
use ccx_tomography::gate::{Gate, U3Params};
use ccx_tomography::tomography::{reference_circuit, task_circuit};
use ccx_tomography::truth_table::{ccx_truth_table, truth_table, TruthTable};

#[test]
fn test_ccx_truth_table_rows() {
    let table = ccx_truth_table();
    assert_eq!(table.num_rows(), 8);
    for input in 0..6 {
        assert_eq!(table.output_of(input), input);
    }
    assert_eq!(table.output_of(6), 7);
    assert_eq!(table.output_of(7), 6);
}

#[test]
fn test_empty_circuit_is_identity() {
    let circuit = Circuit::new(2, vec![]).unwrap();
    assert_eq!(truth_table(&circuit), TruthTable::from_outputs(2, vec![0, 1, 2, 3]));
}

#[test]
fn test_x_gate_table() {
    let circuit = Circuit::new(1, vec![put(0, Gate::X)]).unwrap();
    assert_eq!(truth_table(&circuit), TruthTable::from_outputs(1, vec![1, 0]));
}

#[test]
fn test_x_on_second_qubit_table() {
    // X on q1 toggles the least significant bit
    let circuit = Circuit::new(2, vec![put(1, Gate::X)]).unwrap();
    assert_eq!(truth_table(&circuit), TruthTable::from_outputs(2, vec![1, 0, 3, 2]));
}

#[test]
fn test_cnot_table() {
    let circuit = Circuit::new(2, vec![control(vec![0], 1, Gate::X)]).unwrap();
    assert_eq!(truth_table(&circuit), TruthTable::from_outputs(2, vec![0, 1, 3, 2]));
}

#[test]
fn test_reference_circuit_table_is_ccx() {
    assert_eq!(truth_table(&reference_circuit()), ccx_truth_table());
}

#[test]
fn test_solved_template_table_is_ccx() {
    let circuit = task_circuit(U3Params::HADAMARD, U3Params::T_DAGGER);
    assert_eq!(truth_table(&circuit), ccx_truth_table());
}

#[test]
fn test_display_format() {
    let text = format!("{}", ccx_truth_table());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "  000 -> 000");
    assert_eq!(lines[5], "  101 -> 101");
    assert_eq!(lines[6], "  110 -> 111");
    assert_eq!(lines[7], "  111 -> 110");
}
