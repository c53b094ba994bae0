use ccx_tomography::equiv::DEFAULT_ATOL;
use ccx_tomography::gate::U3Params;
use ccx_tomography::tomography::{task_circuit, verify};

fn main() {
    let _ = env_logger::builder().init();

    let first = U3Params::HADAMARD;
    let second = U3Params::T_DAGGER;

    let report = match verify(first, second, DEFAULT_ATOL) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Task circuit ===");
    print!("{}", task_circuit(first, second));
    println!();

    println!("=== Unitary check ===");
    println!("Equivalent to CCX up to global phase: {}", report.equivalence.equivalent);
    println!("Max elementwise deviation: {:.3e}", report.equivalence.max_deviation);
    println!();

    println!("=== Truth table: task circuit ===");
    println!("Input(q0q1q2) -> Output(q0q1q2)");
    print!("{}", report.task_table);
    println!();

    println!("=== Truth table: reference CCX ===");
    println!("Input(q0q1q2) -> Output(q0q1q2)");
    print!("{}", report.reference_table);
    println!();

    println!("Truth tables identical: {}", report.truth_table_matches());
    println!();

    if report.passed() {
        println!("PASS: with first = {} and second = {}, the circuit realizes CCX.", first, second);
    } else {
        println!("FAIL: the circuit does not realize CCX with the configured parameters.");
        std::process::exit(1);
    }
}
