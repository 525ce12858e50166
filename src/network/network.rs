use crate::activation::activation::sigmoid;
use crate::error::{shape, Error, Result};
use crate::math::matrix::Matrix;
use crate::data::sample::Sample;
use crate::network::spec::LayerTransition;

/// The feedforward engine: a fixed sequence of layer transitions plus one
/// weight matrix per transition.
///
/// The engine is a pure function of its weight set and the per-call
/// sample, except for `update_weights`, which is the single mutating
/// operation. Whether a caller is training or evaluating is a property of
/// the caller's loop, not of the engine.
pub struct Network {
    transitions: Vec<LayerTransition>,
    weights: Vec<Matrix>,
}

impl Network {
    /// Builds a network from transitions and matching weight matrices.
    ///
    /// Fails with `ShapeMismatch` if the weight count differs from the
    /// transition count or any matrix is not `output_size x input_size`
    /// for its transition.
    pub fn new(transitions: Vec<LayerTransition>, weights: Vec<Matrix>) -> Result<Network> {
        if weights.len() != transitions.len() {
            return Err(Error::ShapeMismatch {
                op: "network construction",
                expected: format!("{} weight matrices", transitions.len()),
                found: format!("{} weight matrices", weights.len()),
            });
        }

        for (transition, weight) in transitions.iter().zip(weights.iter()) {
            if weight.rows() != transition.weight_rows()
                || weight.cols() != transition.weight_cols()
            {
                return Err(Error::ShapeMismatch {
                    op: "network construction",
                    expected: shape(transition.weight_rows(), transition.weight_cols()),
                    found: shape(weight.rows(), weight.cols()),
                });
            }
        }

        Ok(Network {
            transitions,
            weights,
        })
    }

    /// Builds a network with randomly initialized weights, one
    /// fan-in-scaled matrix per transition.
    pub fn xavier(transitions: Vec<LayerTransition>) -> Network {
        let weights = transitions
            .iter()
            .map(|t| Matrix::xavier(t.weight_rows(), t.weight_cols()))
            .collect();

        Network {
            transitions,
            weights,
        }
    }

    pub fn transitions(&self) -> &[LayerTransition] {
        &self.transitions
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Runs one sample through the network and returns the activation at
    /// every layer.
    ///
    /// Index 0 holds the input layer after the sigmoid has been applied to
    /// each pixel; the last index holds the output layer. The trace always
    /// has one entry more than there are transitions. The weight set is
    /// not touched.
    pub fn forward(&self, sample: &Sample) -> Result<Vec<Matrix>> {
        let mut values = Matrix::column(sample.pixels().iter().map(|&p| sigmoid(p)).collect())?;
        let mut trace = Vec::with_capacity(self.weights.len() + 1);
        trace.push(values.clone());

        for weight in &self.weights {
            let pre_activation = weight.multiply(&values)?;
            values = pre_activation.map(sigmoid);
            trace.push(values.clone());
        }

        Ok(trace)
    }

    /// Error at the output layer: one-hot expected vector minus the output
    /// activation.
    ///
    /// Fails with `LabelOutOfRange` if the sample's label is not a valid
    /// index into the output layer.
    pub fn output_error(&self, sample: &Sample, output_activation: &Matrix) -> Result<Matrix> {
        let output_size = output_activation.rows();
        let label = sample.label() as usize;

        if label >= output_size {
            return Err(Error::LabelOutOfRange {
                label: sample.label(),
                output_size,
            });
        }

        let error: Vec<f64> = (0..output_size)
            .map(|i| {
                let expected = if i == label { 1.0 } else { 0.0 };
                expected - output_activation.get(i, 0)
            })
            .collect();

        Matrix::column(error)
    }

    /// Propagates the output error backward through each weight matrix.
    ///
    /// Starting from `output_error`, each step multiplies the transpose of
    /// the layer's weight matrix with the current error vector, attributing
    /// an error to the preceding layer. Returns one error vector per trace
    /// entry, in forward order.
    ///
    /// The sigmoid-derivative factor is deliberately absent here; it is
    /// applied in `update_weights` instead. The two halves together define
    /// the training numerics and must stay split this way.
    pub fn backpropagate(&self, sample: &Sample, trace: &[Matrix]) -> Result<Vec<Matrix>> {
        let output_activation = self.trace_output(trace, "backpropagate")?;
        let mut error = self.output_error(sample, output_activation)?;
        let mut errors = vec![error.clone()];

        for weight in self.weights.iter().rev() {
            error = weight.transpose().multiply(&error)?;
            errors.insert(0, error.clone());
        }

        Ok(errors)
    }

    /// Applies one gradient-descent step to every weight matrix, in place.
    ///
    /// For each transition `i`:
    ///
    /// ```text
    /// d        = learning_rate * error[i+1] ⊙ a[i+1] ⊙ (1 - a[i+1])
    /// Δweight  = d * a[i]ᵀ
    /// weight   = weight + Δweight
    /// ```
    ///
    /// Every layer's update is computed from the same pre-update activation
    /// trace; the new weight set replaces the old one only after all deltas
    /// have been derived from that single snapshot.
    pub fn update_weights(
        &mut self,
        trace: &[Matrix],
        errors: &[Matrix],
        learning_rate: f64,
    ) -> Result<()> {
        self.trace_output(trace, "update_weights")?;
        if errors.len() != trace.len() {
            return Err(Error::ShapeMismatch {
                op: "update_weights",
                expected: format!("{} error vectors", trace.len()),
                found: format!("{} error vectors", errors.len()),
            });
        }

        let mut updated = Vec::with_capacity(self.weights.len());

        for (i, weight) in self.weights.iter().enumerate() {
            let delta = errors[i + 1]
                .hadamard(&trace[i + 1])?
                .hadamard(&trace[i + 1].map(|a| 1.0 - a))?
                .map(|d| d * learning_rate);

            let change = delta.multiply(&trace[i].transpose())?;
            updated.push(weight.add(&change)?);
        }

        self.weights = updated;
        Ok(())
    }

    /// Classifies one sample: index of the largest output activation.
    /// Ties go to the lowest index.
    pub fn classify(&self, sample: &Sample) -> Result<usize> {
        let trace = self.forward(sample)?;
        let values = trace[trace.len() - 1].column_values()?;

        let mut best = 0;
        for (i, &value) in values.iter().enumerate() {
            if value > values[best] {
                best = i;
            }
        }

        Ok(best)
    }

    /// Checks that a caller-supplied trace matches this network's layer
    /// count and returns its output-layer entry.
    fn trace_output<'a>(&self, trace: &'a [Matrix], op: &'static str) -> Result<&'a Matrix> {
        if trace.len() != self.weights.len() + 1 {
            return Err(Error::ShapeMismatch {
                op,
                expected: format!("{} activation vectors", self.weights.len() + 1),
                found: format!("{} activation vectors", trace.len()),
            });
        }
        Ok(&trace[trace.len() - 1])
    }
}
