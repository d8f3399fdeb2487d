/// MNIST digit classification demo.
///
/// Architecture: 784 → 200 → 10, sigmoid on both layers, lr = 0.1.
///
/// Expects CSV files in the format `label,p0,...,p783` with raw pixel
/// values in [0, 255]:
///   data/mnist_train.csv
///   data/mnist_test.csv
/// Paths can be overridden with the first two command-line arguments.
///
/// Run with:
///   cargo run --example mnist --release
use std::time::Instant;

use ember_nn::{fit, load_digits_csv, Network};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let train_path = args.next().unwrap_or_else(|| "data/mnist_train.csv".into());
    let test_path = args.next().unwrap_or_else(|| "data/mnist_test.csv".into());

    let train = load_digits_csv(&train_path, 10)
        .unwrap_or_else(|e| panic!("cannot load training set '{train_path}': {e}"));
    println!("loaded {} training samples from {train_path}", train.len());

    let mut network = Network::new(784, 200, 10, 0.1, None).expect("valid configuration");

    let t_start = Instant::now();
    let epochs = 5;
    for epoch in 1..=epochs {
        let mse = fit(&mut network, &train.inputs, &train.targets, 1).expect("training failed");
        println!(
            "epoch {epoch}/{epochs}: mse = {mse:.6} ({:.1?} elapsed)",
            t_start.elapsed()
        );
    }

    std::fs::create_dir_all("data").expect("cannot create data directory");
    network
        .save_weights("data/hidden.weights", "data/output.weights")
        .expect("cannot save weights");
    println!("weights saved to data/hidden.weights and data/output.weights");

    let test = load_digits_csv(&test_path, 10)
        .unwrap_or_else(|e| panic!("cannot load test set '{test_path}': {e}"));

    let mut correct = 0;
    for (input, target) in test.inputs.iter().zip(test.targets.iter()) {
        let output = network.predict(input).expect("predict failed");
        if argmax(&output) == argmax(target) {
            correct += 1;
        }
    }
    println!(
        "test accuracy: {}/{} ({:.2}%)",
        correct,
        test.len(),
        100.0 * correct as f64 / test.len() as f64
    );
}

/// Index of the maximum value in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
