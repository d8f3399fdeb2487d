pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use data::csv::{load_digits_csv, parse_digits_csv, Dataset};
pub use error::{Error, Result};
pub use loss::mse::MseLoss;
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use train::trainer::fit;
