mod batch;
mod download;
mod report;
mod types;

pub use batch::{fetch_batch, run_batch};
pub use download::{CHUNK_SIZE, build_client, download_image};
pub use types::{BatchSummary, FetchOptions};
