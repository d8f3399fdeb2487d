use ember_nn::{fit, Network};

fn main() {
    env_logger::init();

    let mut network = Network::new(2, 8, 1, 0.5, Some(1234)).expect("valid configuration");

    let inputs = vec![
        vec![0.01, 0.01],
        vec![0.99, 0.99],
        vec![0.01, 0.99],
        vec![0.99, 0.01],
    ];
    let targets = vec![vec![0.01], vec![0.01], vec![0.99], vec![0.99]];

    let epochs = 20_000;
    for round in 1..=10 {
        let mse = fit(&mut network, &inputs, &targets, epochs / 10).expect("training failed");
        println!("after {} epochs: mse = {mse:.6}", round * epochs / 10);
    }

    for input in &inputs {
        let out = network.predict(input).expect("predict failed");
        println!("Input: {:?} -> Output: {:.4}", input, out[0]);
    }
}
