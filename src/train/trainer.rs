use crate::error::{Error, Result};
use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Trains `network` for `epochs` full passes over the dataset, one
/// per-sample update at a time, and returns the mean MSE of the last
/// completed epoch. `epochs` must be at least 1, so the returned error
/// always reflects a completed pass.
///
/// Logs each epoch's error at `debug` level; callers that want progress
/// output can enable it through `env_logger`.
pub fn fit(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    epochs: usize,
) -> Result<f64> {
    if epochs == 0 {
        return Err(Error::InvalidConfiguration(
            "epochs must be at least 1".into(),
        ));
    }
    if inputs.is_empty() {
        return Err(Error::InvalidConfiguration(
            "training dataset is empty".into(),
        ));
    }
    if inputs.len() != targets.len() {
        return Err(Error::InvalidConfiguration(format!(
            "got {} inputs but {} targets",
            inputs.len(),
            targets.len()
        )));
    }

    let mut last_mse = 0.0;
    for epoch in 1..=epochs {
        let mut total = 0.0;
        for (input, target) in inputs.iter().zip(targets.iter()) {
            network.train(input, target)?;
            let output = network.predict(input)?;
            total += MseLoss::loss(&output, target);
        }
        last_mse = total / inputs.len() as f64;
        log::debug!("epoch {epoch}/{epochs}: mse = {last_mse:.6}");
    }

    Ok(last_mse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_epochs() {
        let mut net = Network::new(2, 2, 1, 0.1, Some(1)).unwrap();
        let inputs = vec![vec![0.5, 0.5]];
        let targets = vec![vec![0.9]];
        let before = net.clone();

        assert!(matches!(
            fit(&mut net, &inputs, &targets, 0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert_eq!(net.hidden_weights(), before.hidden_weights());
        assert_eq!(net.output_weights(), before.output_weights());
    }

    #[test]
    fn rejects_empty_dataset() {
        let mut net = Network::new(2, 2, 1, 0.1, Some(1)).unwrap();
        assert!(matches!(
            fit(&mut net, &[], &[], 10),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_length_mismatch() {
        let mut net = Network::new(2, 2, 1, 0.1, Some(1)).unwrap();
        let inputs = vec![vec![0.5, 0.5]];
        let targets: Vec<Vec<f64>> = vec![];
        assert!(matches!(
            fit(&mut net, &inputs, &targets, 10),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn error_falls_over_epochs() {
        let mut net = Network::new(2, 3, 1, 0.5, Some(8)).unwrap();
        let inputs = vec![vec![0.01, 0.01], vec![0.99, 0.99]];
        let targets = vec![vec![0.01], vec![0.99]];

        let early = fit(&mut net, &inputs, &targets, 20).unwrap();
        let late = fit(&mut net, &inputs, &targets, 500).unwrap();
        assert!(late < early);
    }

    #[test]
    fn bad_sample_shape_surfaces_from_fit() {
        let mut net = Network::new(2, 2, 1, 0.1, Some(1)).unwrap();
        let inputs = vec![vec![0.5, 0.5, 0.5]];
        let targets = vec![vec![0.9]];
        assert!(matches!(
            fit(&mut net, &inputs, &targets, 1),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
