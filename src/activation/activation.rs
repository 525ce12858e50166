use std::f64::consts::E;

/// The sigmoid nonlinearity: `1 / (1 + e^-x)`.
///
/// Maps any finite input into (0, 1) and is strictly increasing. Inputs in
/// practice are normalized pixel intensities and weighted sums over them,
/// so no clamping for extreme magnitudes is needed.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}
