pub mod category;
pub mod classifier;
pub mod code;
pub mod text;
pub mod types;

pub use classifier::Classifier;
