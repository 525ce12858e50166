/// Number of pixels in one 28x28 grayscale digit image.
pub const PIXELS_PER_IMAGE: usize = 784;

/// Number of digit classes (0 through 9).
pub const DIGIT_CLASSES: usize = 10;

/// One labeled input image: normalized pixel intensities plus the digit
/// that is drawn on it.
///
/// Immutable after construction. The network only ever reads samples; the
/// dataset loader is responsible for enforcing the contract (784 pixels,
/// each in [0, 1], label in [0, 9]) before handing them over.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pixels: Vec<f64>,
    label: u8,
}

impl Sample {
    pub fn new(pixels: Vec<f64>, label: u8) -> Sample {
        Sample { pixels, label }
    }

    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    pub fn label(&self) -> u8 {
        self.label
    }
}
