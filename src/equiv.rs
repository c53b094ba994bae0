use ndarray::Array2;
use num_complex::Complex64;

/// Default absolute tolerance for the equivalence checks.
pub const DEFAULT_ATOL: f64 = 1e-6;

/// Outcome of comparing two matrices up to a global phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquivalenceReport {
    /// Whether u = phase * v holds elementwise within the tolerance.
    pub equivalent: bool,
    /// Recovered global phase factor, unit modulus when the matrices overlap.
    pub phase: Complex64,
    /// Largest elementwise deviation |u - phase * v|.
    pub max_deviation: f64,
}

/// Tests whether two same-shaped matrices agree up to one global phase.
///
/// The candidate phase is read off the overlap <v, u> = sum conj(v_ij) u_ij.
/// A vanishing overlap means the matrices are orthogonal and no phase can
/// reconcile them.
pub fn global_phase_equivalent(
    u: &Array2<Complex64>,
    v: &Array2<Complex64>,
    atol: f64,
) -> EquivalenceReport {
    assert_eq!(u.dim(), v.dim(), "matrix shapes differ: {:?} vs {:?}", u.dim(), v.dim());

    let overlap: Complex64 = v.iter().zip(u.iter()).map(|(ve, ue)| ve.conj() * ue).sum();
    if overlap.norm() < atol {
        log::debug!("matrices are orthogonal, overlap magnitude {:.3e}", overlap.norm());
        return EquivalenceReport {
            equivalent: false,
            phase: Complex64::new(1.0, 0.0),
            max_deviation: max_elementwise_deviation(u, v, Complex64::new(1.0, 0.0)),
        };
    }

    let phase = overlap / overlap.norm();
    let max_deviation = max_elementwise_deviation(u, v, phase);
    log::debug!("recovered phase {}, max deviation {:.3e}", phase, max_deviation);
    EquivalenceReport { equivalent: max_deviation <= atol, phase, max_deviation }
}

fn max_elementwise_deviation(
    u: &Array2<Complex64>,
    v: &Array2<Complex64>,
    phase: Complex64,
) -> f64 {
    u.iter()
        .zip(v.iter())
        .map(|(ue, ve)| (ue - phase * ve).norm())
        .fold(0.0, f64::max)
}
