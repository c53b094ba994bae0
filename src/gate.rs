use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

/// Single-qubit gate set used by the Toffoli template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    X,
    Y,
    Z,
    H,
    S,
    T,
    /// Phase shift gate: diag(1, e^{i theta}).
    Phase(f64),
    /// General single-qubit gate with Euler angles (theta, phi, lambda):
    ///
    /// U3 = [[cos(theta/2),              -e^{i lambda} sin(theta/2)],
    ///       [e^{i phi} sin(theta/2),     e^{i (phi+lambda)} cos(theta/2)]]
    U3(f64, f64, f64),
}

impl Gate {
    /// Returns the 2x2 matrix representation of the gate.
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        match self {
            Gate::X => Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap(),
            Gate::Y => Array2::from_shape_vec(
                (2, 2),
                vec![zero, Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0), zero],
            )
            .unwrap(),
            Gate::Z => Array2::from_shape_vec(
                (2, 2),
                vec![one, zero, zero, Complex64::new(-1.0, 0.0)],
            )
            .unwrap(),
            Gate::H => {
                let h = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
                Array2::from_shape_vec((2, 2), vec![h, h, h, -h]).unwrap()
            }
            Gate::S => Array2::from_shape_vec(
                (2, 2),
                vec![one, zero, zero, Complex64::new(0.0, 1.0)],
            )
            .unwrap(),
            Gate::T => Array2::from_shape_vec(
                (2, 2),
                vec![one, zero, zero, Complex64::from_polar(1.0, FRAC_PI_4)],
            )
            .unwrap(),
            Gate::Phase(theta) => Array2::from_shape_vec(
                (2, 2),
                vec![one, zero, zero, Complex64::from_polar(1.0, *theta)],
            )
            .unwrap(),
            Gate::U3(theta, phi, lambda) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let sin = Complex64::new((theta / 2.0).sin(), 0.0);
                Array2::from_shape_vec(
                    (2, 2),
                    vec![
                        cos,
                        -Complex64::from_polar(1.0, *lambda) * sin,
                        Complex64::from_polar(1.0, *phi) * sin,
                        Complex64::from_polar(1.0, phi + lambda) * cos,
                    ],
                )
                .unwrap()
            }
        }
    }

    /// Returns the dagger (conjugate transpose) of the gate.
    pub fn dagger(&self) -> Gate {
        match self {
            // self-adjoint
            Gate::X | Gate::Y | Gate::Z | Gate::H => *self,
            Gate::S => Gate::Phase(-FRAC_PI_2),
            Gate::T => Gate::Phase(-FRAC_PI_4),
            Gate::Phase(theta) => Gate::Phase(-theta),
            // reversing the Euler decomposition swaps phi and lambda
            Gate::U3(theta, phi, lambda) => Gate::U3(-theta, -lambda, -phi),
        }
    }

    /// Whether the matrix is diagonal in the computational basis.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Gate::Z | Gate::S | Gate::T | Gate::Phase(_))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::X => write!(f, "X"),
            Gate::Y => write!(f, "Y"),
            Gate::Z => write!(f, "Z"),
            Gate::H => write!(f, "H"),
            Gate::S => write!(f, "S"),
            Gate::T => write!(f, "T"),
            Gate::Phase(theta) => write!(f, "Phase({:.4})", theta),
            Gate::U3(theta, phi, lambda) => {
                write!(f, "U3({:.4}, {:.4}, {:.4})", theta, phi, lambda)
            }
        }
    }
}

/// Euler angle triple for one of the template's tunable slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct U3Params {
    pub theta: f64,
    pub phi: f64,
    pub lambda: f64,
}

impl U3Params {
    /// Solution for the first slot: U3(pi/2, 0, pi) is the Hadamard gate.
    pub const HADAMARD: U3Params = U3Params { theta: FRAC_PI_2, phi: 0.0, lambda: PI };

    /// Solution for the second slot: U3(0, 0, -pi/4) is T dagger.
    pub const T_DAGGER: U3Params = U3Params { theta: 0.0, phi: 0.0, lambda: -FRAC_PI_4 };

    pub const fn new(theta: f64, phi: f64, lambda: f64) -> Self {
        U3Params { theta, phi, lambda }
    }

    /// The gate this triple parameterizes.
    pub fn gate(&self) -> Gate {
        Gate::U3(self.theta, self.phi, self.lambda)
    }

    /// All three angles are ordinary floats (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.phi.is_finite() && self.lambda.is_finite()
    }
}

impl fmt::Display for U3Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U3({:.4}, {:.4}, {:.4})", self.theta, self.phi, self.lambda)
    }
}
