use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the digit-nn core.
///
/// Every error is local and synchronous; there are no transient failure
/// modes and no retry policy. A persistence failure aborts the training
/// pass instead of silently continuing with unsaved weights.
#[derive(Debug, Error)]
pub enum Error {
    /// Matrix dimensions are incompatible for the attempted operation.
    #[error("shape mismatch in {op}: expected {expected}, found {found}")]
    ShapeMismatch {
        op: &'static str,
        expected: String,
        found: String,
    },

    /// Matrix construction received a non-rectangular or empty grid.
    #[error("malformed matrix: {reason}")]
    MalformedMatrix { reason: String },

    /// A sample's label is not a valid output-layer index.
    #[error("label {label} is out of range for an output layer of size {output_size}")]
    LabelOutOfRange { label: u8, output_size: usize },

    /// `train` or `test` was invoked with no samples.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A persisted weight file failed to parse back into matrices.
    #[error("corrupt weight file at line {line}: {reason}")]
    CorruptWeightFile { line: usize, reason: String },

    /// A dataset CSV row failed to parse into a sample.
    #[error("corrupt dataset at line {line}: {reason}")]
    CorruptDataset { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Formats a matrix shape as `rows x cols` for error messages.
pub(crate) fn shape(rows: usize, cols: usize) -> String {
    format!("{}x{}", rows, cols)
}
