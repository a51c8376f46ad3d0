use super::report::report;
use crate::error::FetchError;
use crate::filename::resolve_filename;
use futures::StreamExt;
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

/// Upper bound on a single write to the output file.
pub const CHUNK_SIZE: usize = 8192;

pub fn build_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(user_agent).build()
}

/// Downloads `url` into `output_dir` and reports the outcome on `out`.
///
/// Returns the written path, or `None` on any failure. Errors are printed
/// with the URL and never returned.
pub async fn download_image<W: Write>(
    client: &Client,
    url: &str,
    output_dir: &Path,
    out: &mut W,
) -> Option<PathBuf> {
    match try_download(client, url, output_dir).await {
        Ok((output_path, filename)) => {
            report(out, format_args!("✓ Downloaded: {}", filename));
            Some(output_path)
        }
        Err(err) => {
            let err = eyre::Report::new(err);
            debug!(url = %url, "Download failed: {:?}", err);
            report(out, format_args!("✗ Error downloading {}: {:#}", url, err));
            None
        }
    }
}

async fn try_download(
    client: &Client,
    url: &str,
    output_dir: &Path,
) -> Result<(PathBuf, String), FetchError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| FetchError::DirectoryCreation {
            path: output_dir.to_path_buf(),
            source,
        })?;

    debug!(url = %url, "Sending request");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let filename = resolve_filename(url)?;
    let output_path = output_dir.join(&filename);
    trace!(url = %url, output = %output_path.display(), "Writing body");

    let write_error = |source: std::io::Error| FetchError::FileWrite {
        path: output_path.clone(),
        source,
    };

    let mut file = tokio::fs::File::create(&output_path)
        .await
        .map_err(write_error)?;

    let mut body = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        for piece in chunk.chunks(CHUNK_SIZE) {
            file.write_all(piece).await.map_err(write_error)?;
            written += piece.len() as u64;
        }
    }
    file.flush().await.map_err(write_error)?;

    debug!(url = %url, output = %output_path.display(), bytes = written, "Downloaded");
    Ok((output_path, filename))
}
