use std::path::PathBuf;
use std::sync::mpsc;

use crate::train::pass_stats::PassProgress;

/// Configuration for one training pass.
///
/// # Fields
/// - `learning_rate` — step size for the per-sample weight update; positive
/// - `weights_path`  — destination the final weight set is written to
/// - `progress_tx`   — optional channel sender; one `PassProgress` is sent
///   every 1000 samples. A dropped receiver only stops the reporting, never
///   the pass itself.
///
/// Validation of the values (positive rate, writable path) happens at the
/// configuration surface; the loop consumes them as-is.
pub struct TrainConfig {
    pub learning_rate: f64,
    pub weights_path: PathBuf,
    pub progress_tx: Option<mpsc::Sender<PassProgress>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel.
    pub fn new(learning_rate: f64, weights_path: impl Into<PathBuf>) -> TrainConfig {
        TrainConfig {
            learning_rate,
            weights_path: weights_path.into(),
            progress_tx: None,
        }
    }
}
