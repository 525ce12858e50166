pub mod pass_stats;
pub mod train_config;
pub mod trainer;

pub use pass_stats::{PassProgress, PassStats};
pub use train_config::TrainConfig;
pub use trainer::{test, train};
