use crate::cli::FetchParams;
use crate::error::ImgBatchError;
use crate::fetch::{BatchSummary, fetch_batch};

/// Runs the batch and prints the report to stdout.
///
/// Download failures are part of the summary, not an error: the command
/// succeeds once every URL has been attempted.
pub async fn run_fetch(params: FetchParams) -> Result<BatchSummary, ImgBatchError> {
    let FetchParams { urls, options } = params;

    tracing::info!("Saving images to {}", options.output_dir.display());

    let mut stdout = std::io::stdout();
    let summary = fetch_batch(&urls, &options, &mut stdout).await?;

    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} downloads failed",
            summary.failed,
            summary.attempted()
        );
    }
    Ok(summary)
}
