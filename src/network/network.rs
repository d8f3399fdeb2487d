use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activation::{sigmoid, sigmoid_prime};
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Three-layer feedforward network: input → hidden → output, sigmoid
/// activation on both layers, no bias terms.
///
/// The network owns its two weight matrices exclusively; only `train`
/// (and `load_weights`) replaces their element values, and the shapes are
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    hidden_weights: Matrix,
    output_weights: Matrix,
    learning_rate: f64,
}

impl Network {
    /// Creates a network with weights drawn i.i.d. uniform on
    /// `[-1/√fan_in, 1/√fan_in]`, where fan-in is the size of the layer
    /// feeding each weight matrix. Bounding the initial magnitude this way
    /// keeps early pre-activations near zero, away from sigmoid saturation.
    ///
    /// With `seed: Some(s)` initialization is deterministic; with `None`
    /// the RNG is seeded from OS entropy.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        seed: Option<u64>,
    ) -> Result<Network> {
        if input_size == 0 || hidden_size == 0 || output_size == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "layer sizes must be positive, got {input_size}/{hidden_size}/{output_size}"
            )));
        }
        if !(learning_rate > 0.0) || !learning_rate.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "learning rate must be a positive finite number, got {learning_rate}"
            )));
        }

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let hidden_bound = 1.0 / (input_size as f64).sqrt();
        let output_bound = 1.0 / (hidden_size as f64).sqrt();

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            hidden_weights: Matrix::uniform(hidden_size, input_size, hidden_bound, &mut rng),
            output_weights: Matrix::uniform(output_size, hidden_size, output_bound, &mut rng),
            learning_rate,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn hidden_weights(&self) -> &Matrix {
        &self.hidden_weights
    }

    pub fn output_weights(&self) -> &Matrix {
        &self.output_weights
    }

    pub(crate) fn set_weights(&mut self, hidden: Matrix, output: Matrix) {
        self.hidden_weights = hidden;
        self.output_weights = output;
    }

    /// Forward pass. Returns `output_size` values, each strictly in (0, 1).
    /// Network state is unchanged.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;
        let input = Matrix::column(input);
        let (_, final_out) = self.forward(&input)?;
        Ok(final_out.to_column_vec())
    }

    /// One per-sample gradient update.
    ///
    /// Recomputes the forward pass, propagates the error `target - output`
    /// backward through the output weights, and nudges both weight matrices
    /// toward lower squared error. Input and target lengths are validated
    /// before any weight is touched, so a failed call leaves the network
    /// exactly as it was.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        self.check_input(input)?;
        if target.len() != self.output_size {
            return Err(Error::DimensionMismatch {
                op: "train",
                lhs_rows: self.output_size,
                lhs_cols: 1,
                rhs_rows: target.len(),
                rhs_cols: 1,
            });
        }

        let input = Matrix::column(input);
        let target = Matrix::column(target);

        let (hidden_out, final_out) = self.forward(&input)?;

        // Error terms. hidden_err must use the output weights from before
        // this call's update.
        let output_err = target.sub(&final_out)?;
        let hidden_err = self.output_weights.transpose().dot(&output_err)?;

        // sigmoid_prime takes the activated values, so σ'(z) = a(1-a)
        // comes for free without re-running the sigmoid.
        let output_step = output_err
            .hadamard(&sigmoid_prime(&final_out))?
            .dot(&hidden_out.transpose())?
            .scale(self.learning_rate);
        let hidden_step = hidden_err
            .hadamard(&sigmoid_prime(&hidden_out))?
            .dot(&input.transpose())?
            .scale(self.learning_rate);

        self.output_weights = self.output_weights.add(&output_step)?;
        self.hidden_weights = self.hidden_weights.add(&hidden_step)?;
        Ok(())
    }

    /// Shared forward pass; returns (hidden activations, output activations).
    fn forward(&self, input: &Matrix) -> Result<(Matrix, Matrix)> {
        let hidden_in = self.hidden_weights.dot(input)?;
        let hidden_out = hidden_in.apply(|_, _, z| sigmoid(z));
        let final_in = self.output_weights.dot(&hidden_out)?;
        let final_out = final_in.apply(|_, _, z| sigmoid(z));
        Ok((hidden_out, final_out))
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size {
            return Err(Error::DimensionMismatch {
                op: "forward",
                lhs_rows: self.hidden_size,
                lhs_cols: self.input_size,
                rhs_rows: input.len(),
                rhs_cols: 1,
            });
        }
        Ok(())
    }
}
