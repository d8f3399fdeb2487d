pub mod trainer;

pub use trainer::fit;
