use crate::math::matrix::Matrix;

/// Logistic sigmoid: maps any real value into the open interval (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Sigmoid derivative evaluated from an **already activated** matrix:
/// `a ⊙ (1 - a)`, where every element of `a` is a sigmoid output.
///
/// Callers must pass sigmoid outputs, not pre-activation values; applying
/// this to raw pre-activations would silently compute the wrong gradient.
pub fn sigmoid_prime(activated: &Matrix) -> Matrix {
    activated.apply(|_, _, a| a * (1.0 - a))
}
