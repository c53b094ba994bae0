use serde::{Deserialize, Serialize};

use crate::circuit::{control, put, Circuit, PositionedGate};
use crate::gate::Gate;

#[derive(Serialize, Deserialize)]
struct CircuitJson {
    num_qubits: usize,
    gates: Vec<GateJson>,
}

#[derive(Serialize, Deserialize)]
struct GateJson {
    gate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Vec<f64>>,
    target: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    controls: Option<Vec<usize>>,
}

/// Helper to convert a PositionedGate to its JSON form.
fn positioned_gate_to_json(pg: &PositionedGate) -> GateJson {
    let (gate_name, params) = match &pg.gate {
        Gate::X => ("X".to_string(), None),
        Gate::Y => ("Y".to_string(), None),
        Gate::Z => ("Z".to_string(), None),
        Gate::H => ("H".to_string(), None),
        Gate::S => ("S".to_string(), None),
        Gate::T => ("T".to_string(), None),
        Gate::Phase(theta) => ("Phase".to_string(), Some(vec![*theta])),
        Gate::U3(theta, phi, lambda) => ("U3".to_string(), Some(vec![*theta, *phi, *lambda])),
    };

    let controls = if pg.controls.is_empty() { None } else { Some(pg.controls.clone()) };

    GateJson { gate: gate_name, params, target: pg.target, controls }
}

/// Serialize a Circuit to a pretty-printed JSON string.
pub fn circuit_to_json(circuit: &Circuit) -> String {
    let circuit_json = CircuitJson {
        num_qubits: circuit.num_qubits,
        gates: circuit.gates.iter().map(positioned_gate_to_json).collect(),
    };
    serde_json::to_string_pretty(&circuit_json).unwrap()
}

/// Helper to convert a parsed GateJson back into a PositionedGate.
fn gate_json_to_positioned(gj: GateJson) -> Result<PositionedGate, String> {
    let gate = match gj.gate.as_str() {
        "X" => Gate::X,
        "Y" => Gate::Y,
        "Z" => Gate::Z,
        "H" => Gate::H,
        "S" => Gate::S,
        "T" => Gate::T,
        "Phase" => {
            let params = gj.params.ok_or("Phase gate requires params")?;
            if params.is_empty() {
                return Err("Phase gate requires 1 parameter".to_string());
            }
            Gate::Phase(params[0])
        }
        "U3" => {
            let params = gj.params.ok_or("U3 gate requires params")?;
            if params.len() != 3 {
                return Err(format!("U3 gate requires 3 parameters, got {}", params.len()));
            }
            Gate::U3(params[0], params[1], params[2])
        }
        other => return Err(format!("Unknown gate type: {}", other)),
    };

    Ok(match gj.controls {
        Some(controls) => control(controls, gj.target, gate),
        None => put(gj.target, gate),
    })
}

/// Deserialize a Circuit from a JSON string.
pub fn circuit_from_json(json: &str) -> Result<Circuit, String> {
    let circuit_json: CircuitJson =
        serde_json::from_str(json).map_err(|e| format!("JSON parse error: {}", e))?;

    let mut gates = Vec::new();
    for gj in circuit_json.gates {
        gates.push(gate_json_to_positioned(gj)?);
    }

    Circuit::new(circuit_json.num_qubits, gates)
        .map_err(|e| format!("Circuit validation error: {}", e))
}
