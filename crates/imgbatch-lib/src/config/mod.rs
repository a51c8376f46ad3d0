mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    Config, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_DELAY_MS, DEFAULT_USER_AGENT, HttpConfig,
    OutputConfig,
};
