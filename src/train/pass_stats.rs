use serde::{Deserialize, Serialize};

/// Summary of one completed training pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassStats {
    /// Number of samples the pass updated on.
    pub samples: usize,
    /// Wall-clock duration of the pass in milliseconds.
    pub elapsed_ms: u64,
}

/// In-flight progress of a pass, emitted over the optional channel in
/// `TrainConfig` every 1000 samples.
#[derive(Debug, Clone)]
pub struct PassProgress {
    /// Samples processed so far.
    pub seen: usize,
    /// Total samples in this pass.
    pub total: usize,
}
