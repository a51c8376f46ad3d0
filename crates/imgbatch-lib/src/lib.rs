pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filename;
pub mod sources;

pub use config::Config;
pub use error::{FetchError, ImgBatchError};
