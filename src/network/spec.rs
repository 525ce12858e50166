use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::error::Result;

/// The declared shape of one layer's weight matrix.
///
/// `input_size` is the number of units feeding the transition and
/// `output_size` the number of units it produces, so the weight matrix is
/// `output_size x input_size` and `weight * input_column` yields the next
/// pre-activation column. Consecutive transitions must chain
/// (`output_size` of one equals `input_size` of the next) for forward
/// propagation to succeed; the engine checks this at multiply time rather
/// than at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTransition {
    pub input_size: usize,
    pub output_size: usize,
}

impl LayerTransition {
    pub fn new(input_size: usize, output_size: usize) -> LayerTransition {
        LayerTransition {
            input_size,
            output_size,
        }
    }

    /// Rows of the weight matrix for this transition.
    pub fn weight_rows(&self) -> usize {
        self.output_size
    }

    /// Columns of the weight matrix for this transition.
    pub fn weight_cols(&self) -> usize {
        self.input_size
    }
}

/// A fully serializable description of a network architecture plus its
/// training hyperparameters.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of the
/// trained weights, so an architecture can be fixed before training starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Ordered list of layer transitions (input → output).
    pub transitions: Vec<LayerTransition>,
    /// Step size for the per-sample weight update.
    pub learning_rate: f64,
}

impl NetworkSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = io::BufReader::new(file);
        let spec = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(spec)
    }
}
