//! IDX readers and IDX-to-CSV conversion.
//!
//! The MNIST distribution ships images and labels as big-endian IDX files.
//! The image payload starts at byte offset 16 (magic, count, rows, cols)
//! and the label payload at offset 8 (magic, count). Pixel bytes in
//! [0, 255] are normalized to [0, 1] by dividing by 255, matching the
//! output range of the sigmoid layers.

use std::fs;
use std::path::Path;

use crate::data::csv::write_samples;
use crate::data::sample::{Sample, PIXELS_PER_IMAGE};
use crate::error::{Error, Result};

const IMAGE_HEADER_BYTES: usize = 16;
const LABEL_HEADER_BYTES: usize = 8;

/// Reads an IDX image file into per-image normalized pixel vectors.
pub fn read_idx_images(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let bytes = fs::read(&path)?;
    if bytes.len() < IMAGE_HEADER_BYTES {
        return Err(Error::CorruptDataset {
            line: 0,
            reason: "IDX image file is shorter than its header".into(),
        });
    }

    let payload = &bytes[IMAGE_HEADER_BYTES..];
    if payload.len() % PIXELS_PER_IMAGE != 0 {
        return Err(Error::CorruptDataset {
            line: 0,
            reason: format!(
                "IDX image payload of {} bytes is not a multiple of {}",
                payload.len(),
                PIXELS_PER_IMAGE
            ),
        });
    }

    Ok(payload
        .chunks(PIXELS_PER_IMAGE)
        .map(|chunk| chunk.iter().map(|&b| b as f64 / 255.0).collect())
        .collect())
}

/// Reads an IDX label file into raw digit labels.
pub fn read_idx_labels(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = fs::read(&path)?;
    if bytes.len() < LABEL_HEADER_BYTES {
        return Err(Error::CorruptDataset {
            line: 0,
            reason: "IDX label file is shorter than its header".into(),
        });
    }

    Ok(bytes[LABEL_HEADER_BYTES..].to_vec())
}

/// Converts an IDX image/label pair into the dataset CSV format.
///
/// The output file is truncated and rewritten in full; sample order
/// follows the IDX file order.
pub fn convert_idx_to_csv(
    images_path: impl AsRef<Path>,
    labels_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
) -> Result<()> {
    let pixels = read_idx_images(images_path)?;
    let labels = read_idx_labels(labels_path)?;

    if pixels.len() != labels.len() {
        return Err(Error::CorruptDataset {
            line: 0,
            reason: format!(
                "IDX files disagree: {} images but {} labels",
                pixels.len(),
                labels.len()
            ),
        });
    }

    let samples: Vec<Sample> = pixels
        .into_iter()
        .zip(labels)
        .map(|(p, l)| Sample::new(p, l))
        .collect();

    write_samples(out_path, &samples)
}
