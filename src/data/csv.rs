//! Dataset CSV round trip.
//!
//! Converted digit datasets are stored as a two-column CSV table:
//!
//! ```text
//! label,pixels
//! 5,"[0.0, 0.5, ...]"
//! ```
//!
//! The `pixels` field is a bracketed list of 784 normalized intensities,
//! quoted because it contains commas. A malformed row aborts the whole
//! load; silently skipping samples would corrupt the sequential-update
//! contract of the training loop.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data::sample::{Sample, PIXELS_PER_IMAGE};
use crate::error::{Error, Result};

const HEADER: &str = "label,pixels";

/// Reads a dataset CSV into samples, in file order.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, first)) if first.trim() == HEADER => {}
        Some((_, first)) => {
            return Err(Error::CorruptDataset {
                line: 1,
                reason: format!("expected header '{}', found '{}'", HEADER, first.trim()),
            })
        }
        None => {
            return Err(Error::CorruptDataset {
                line: 1,
                reason: "file is empty".into(),
            })
        }
    }

    let mut samples = Vec::new();

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        samples.push(parse_row(line, line_no)?);
    }

    Ok(samples)
}

/// Writes samples as a dataset CSV, truncating any prior file.
pub fn write_samples(path: impl AsRef<Path>, samples: &[Sample]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER)?;

    for sample in samples {
        let pixels: Vec<String> = sample.pixels().iter().map(|p| p.to_string()).collect();
        writeln!(writer, "{},\"[{}]\"", sample.label(), pixels.join(", "))?;
    }

    writer.flush()?;
    Ok(())
}

/// Parses one `label,"[p, p, ...]"` row.
fn parse_row(line: &str, line_no: usize) -> Result<Sample> {
    let (label_field, pixel_field) =
        line.split_once(',')
            .ok_or_else(|| Error::CorruptDataset {
                line: line_no,
                reason: "row has no pixel column".into(),
            })?;

    let label: u8 = label_field
        .trim()
        .parse()
        .map_err(|_| Error::CorruptDataset {
            line: line_no,
            reason: format!("label '{}' is not an integer", label_field.trim()),
        })?;
    if label > 9 {
        return Err(Error::CorruptDataset {
            line: line_no,
            reason: format!("label {} is not a digit in [0, 9]", label),
        });
    }

    let pixels = parse_pixel_list(pixel_field, line_no)?;
    if pixels.len() != PIXELS_PER_IMAGE {
        return Err(Error::CorruptDataset {
            line: line_no,
            reason: format!("expected {} pixels, found {}", PIXELS_PER_IMAGE, pixels.len()),
        });
    }
    for &p in &pixels {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::CorruptDataset {
                line: line_no,
                reason: format!("pixel intensity {} is outside [0, 1]", p),
            });
        }
    }

    Ok(Sample::new(pixels, label))
}

/// Parses the quoted bracketed pixel list into floats.
fn parse_pixel_list(field: &str, line_no: usize) -> Result<Vec<f64>> {
    let field = field.trim();
    let field = field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field);

    let inner = field
        .strip_prefix('[')
        .and_then(|f| f.strip_suffix(']'))
        .ok_or_else(|| Error::CorruptDataset {
            line: line_no,
            reason: "pixel column is not a bracketed list".into(),
        })?;

    inner
        .split(',')
        .map(|cell| {
            cell.trim().parse::<f64>().map_err(|_| Error::CorruptDataset {
                line: line_no,
                reason: format!("pixel value '{}' is not a number", cell.trim()),
            })
        })
        .collect()
}
