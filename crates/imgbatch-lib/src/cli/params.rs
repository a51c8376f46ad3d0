use crate::fetch::FetchOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub urls: Vec<String>,
    pub options: FetchOptions,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub urls: Vec<String>,
    pub output_dir: PathBuf,
}
