use std::time::Instant;

use crate::data::sample::Sample;
use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::persist::weights::save_weights;
use crate::train::pass_stats::{PassProgress, PassStats};
use crate::train::train_config::TrainConfig;

/// How often a `PassProgress` message is emitted, in samples.
const PROGRESS_INTERVAL: usize = 1000;

/// Runs exactly one online gradient-descent pass over `samples`.
///
/// Samples are visited in input order; each one is pushed forward, its
/// per-layer errors are propagated back, and the weight set is updated
/// before the next sample is touched. Errors late in the pass are computed
/// against weights already adjusted by earlier samples — that ordering is
/// part of the contract, so callers wanting several epochs invoke `train`
/// several times.
///
/// After the full pass the final weight set is written to
/// `config.weights_path`; a failed write aborts with the I/O error rather
/// than discarding progress silently.
pub fn train(network: &mut Network, samples: &[Sample], config: &TrainConfig) -> Result<PassStats> {
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let t_start = Instant::now();

    for (count, sample) in samples.iter().enumerate() {
        let trace = network.forward(sample)?;
        let errors = network.backpropagate(sample, &trace)?;
        network.update_weights(&trace, &errors, config.learning_rate)?;

        if count % PROGRESS_INTERVAL == 0 && count != 0 {
            if let Some(ref tx) = config.progress_tx {
                let _ = tx.send(PassProgress {
                    seen: count,
                    total: samples.len(),
                });
            }
        }
    }

    save_weights(&config.weights_path, network.weights())?;

    Ok(PassStats {
        samples: samples.len(),
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    })
}

/// Classifies every sample and returns the fraction answered correctly,
/// in [0, 1].
///
/// Never mutates the weight set. Fails with `EmptyDataset` on no samples
/// instead of dividing by zero.
pub fn test(network: &Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut correct = 0usize;

    for sample in samples {
        if network.classify(sample)? == sample.label() as usize {
            correct += 1;
        }
    }

    Ok(correct as f64 / samples.len() as f64)
}
