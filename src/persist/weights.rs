//! Weight-set persistence.
//!
//! Weights are stored as a single-column CSV table: a `weights` header,
//! then one row per layer transition whose field is the full matrix as a
//! bracketed nested list literal, row-major:
//!
//! ```text
//! weights
//! "[[0.5, -0.25], [0.1, 0.2]]"
//! "[[0.7, -0.6]]"
//! ```
//!
//! The field is quoted because the literal contains commas. Values are
//! written with Rust's shortest round-trip `f64` formatting, so a
//! save/load cycle reproduces every weight bit for bit. Saving always
//! truncates the destination; confirmation policy before overwriting an
//! existing file belongs to the caller, not here.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{shape, Error, Result};
use crate::math::matrix::Matrix;
use crate::network::spec::LayerTransition;

const HEADER: &str = "weights";

/// Writes the weight set to `path`, overwriting any prior file in full.
pub fn save_weights(path: impl AsRef<Path>, weights: &[Matrix]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER)?;

    for matrix in weights {
        writeln!(writer, "\"{}\"", matrix_literal(matrix))?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads a weight set back and checks it against the caller's transitions.
///
/// Fails with `CorruptWeightFile` if a row does not parse to a well-formed
/// rectangular numeric matrix, or with `ShapeMismatch` if the parsed
/// matrices disagree with `transitions`.
pub fn load_weights(
    path: impl AsRef<Path>,
    transitions: &[LayerTransition],
) -> Result<Vec<Matrix>> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, first)) if first.trim() == HEADER => {}
        Some((_, first)) => {
            return Err(Error::CorruptWeightFile {
                line: 1,
                reason: format!("expected header '{}', found '{}'", HEADER, first.trim()),
            })
        }
        None => {
            return Err(Error::CorruptWeightFile {
                line: 1,
                reason: "file is empty".into(),
            })
        }
    }

    let mut weights = Vec::new();

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let rows = parse_matrix_literal(line, line_no)?;
        let matrix = Matrix::from_rows(rows).map_err(|e| Error::CorruptWeightFile {
            line: line_no,
            reason: e.to_string(),
        })?;

        weights.push(matrix);
    }

    if weights.len() != transitions.len() {
        return Err(Error::ShapeMismatch {
            op: "load_weights",
            expected: format!("{} weight matrices", transitions.len()),
            found: format!("{} weight matrices", weights.len()),
        });
    }

    for (transition, weight) in transitions.iter().zip(weights.iter()) {
        if weight.rows() != transition.weight_rows() || weight.cols() != transition.weight_cols() {
            return Err(Error::ShapeMismatch {
                op: "load_weights",
                expected: shape(transition.weight_rows(), transition.weight_cols()),
                found: shape(weight.rows(), weight.cols()),
            });
        }
    }

    Ok(weights)
}

/// Renders a matrix as `[[a, b], [c, d]]`.
fn matrix_literal(matrix: &Matrix) -> String {
    let rows: Vec<String> = matrix
        .as_rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();

    format!("[{}]", rows.join(", "))
}

/// Parses one `"[[...], [...]]"` row back into row vectors.
fn parse_matrix_literal(line: &str, line_no: usize) -> Result<Vec<Vec<f64>>> {
    let corrupt = |reason: String| Error::CorruptWeightFile {
        line: line_no,
        reason,
    };

    let field = line
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(line);

    let inner = field
        .strip_prefix('[')
        .and_then(|f| f.strip_suffix(']'))
        .ok_or_else(|| corrupt("row is not a bracketed list".into()))?;

    let mut rows = Vec::new();
    let mut rest = inner.trim_start();

    while !rest.is_empty() {
        let open = rest
            .strip_prefix('[')
            .ok_or_else(|| corrupt("expected '[' to open a matrix row".into()))?;
        let close = open
            .find(']')
            .ok_or_else(|| corrupt("unterminated matrix row".into()))?;

        let cells = &open[..close];
        let row = cells
            .split(',')
            .map(|cell| {
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| corrupt(format!("'{}' is not a number", cell.trim())))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);

        rest = open[close + 1..].trim_start();
        rest = rest.strip_prefix(',').unwrap_or(rest).trim_start();
    }

    Ok(rows)
}
