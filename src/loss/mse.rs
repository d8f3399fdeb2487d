pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical_vectors() {
        assert_eq!(MseLoss::loss(&[0.2, 0.8], &[0.2, 0.8]), 0.0);
    }

    #[test]
    fn averages_squared_differences() {
        // (0.5² + 0.5²) / 2 = 0.25
        assert!((MseLoss::loss(&[1.0, 0.0], &[0.5, 0.5]) - 0.25).abs() < 1e-12);
    }
}
