pub mod csv;
pub mod idx;
pub mod sample;

pub use csv::{load_samples, write_samples};
pub use idx::{convert_idx_to_csv, read_idx_images, read_idx_labels};
pub use sample::{Sample, DIGIT_CLASSES, PIXELS_PER_IMAGE};
