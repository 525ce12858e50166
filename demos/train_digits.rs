/// MNIST digit training demo for digit-nn.
///
/// Architecture: 784 → 81 → 10, sigmoid everywhere
/// Learning rate: 0.001, one online pass per run
///
/// Expects converted datasets (see `data::idx::convert_idx_to_csv`) at:
///   data/mnist_train.csv
///   data/mnist_test.csv
///
/// Run with:
///   cargo run --example train-digits --release
use digit_nn::{data, test, train, LayerTransition, Network, TrainConfig};

fn main() -> digit_nn::Result<()> {
    let training = data::load_samples("data/mnist_train.csv")?;
    let testing = data::load_samples("data/mnist_test.csv")?;
    println!(
        "Loaded {} training and {} testing samples.",
        training.len(),
        testing.len()
    );

    let transitions = vec![LayerTransition::new(784, 81), LayerTransition::new(81, 10)];
    let mut network = Network::xavier(transitions);

    let config = TrainConfig::new(0.001, "data/weight_matrices.csv");
    let stats = train(&mut network, &training, &config)?;
    println!(
        "Trained on {} samples in {} ms.",
        stats.samples, stats.elapsed_ms
    );

    let accuracy = test(&network, &testing)?;
    println!("Test accuracy: {:.2}%", accuracy * 100.0);

    Ok(())
}
