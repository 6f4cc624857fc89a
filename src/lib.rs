pub mod config;
pub mod error;
pub mod vec;

pub use config::Config;
pub use error::VecError;
pub use vec::{DynVec, DEFAULT_CAPACITY, LOAD_FACTOR};
