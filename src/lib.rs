pub mod activation;
pub mod data;
pub mod error;
pub mod math;
pub mod network;
pub mod persist;
pub mod train;

// Convenience re-exports
pub use activation::activation::sigmoid;
pub use data::sample::Sample;
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::spec::{LayerTransition, NetworkSpec};
pub use persist::weights::{load_weights, save_weights};
pub use train::train_config::TrainConfig;
pub use train::trainer::{test, train};
