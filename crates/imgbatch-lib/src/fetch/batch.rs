use super::download::{build_client, download_image};
use super::report::{report, report_header, report_summary};
use super::types::{BatchSummary, FetchOptions};
use crate::error::ImgBatchError;
use crate::filename::display_name;
use reqwest::Client;
use std::io::Write;
use tracing::info;

/// Builds the HTTP client from `options` and runs the batch.
///
/// Only client construction can fail; download failures are counted in the
/// returned summary.
pub async fn fetch_batch<S, W>(
    urls: &[S],
    options: &FetchOptions,
    out: &mut W,
) -> Result<BatchSummary, ImgBatchError>
where
    S: AsRef<str>,
    W: Write,
{
    let client = build_client(&options.user_agent)?;
    Ok(run_batch(&client, urls, options, out).await)
}

/// Downloads every URL in order, one at a time, pausing after each one.
pub async fn run_batch<S, W>(
    client: &Client,
    urls: &[S],
    options: &FetchOptions,
    out: &mut W,
) -> BatchSummary
where
    S: AsRef<str>,
    W: Write,
{
    let total = urls.len();
    info!(
        total,
        output = %options.output_dir.display(),
        "Starting batch"
    );
    report_header(out, total);

    let mut summary = BatchSummary::default();
    for (index, url) in urls.iter().enumerate() {
        let url = url.as_ref();
        report(
            out,
            format_args!("\n[{}/{}] Downloading: {}", index + 1, total, display_name(url)),
        );

        let saved = download_image(client, url, &options.output_dir, out).await;
        summary.record(saved.as_deref());

        tokio::time::sleep(options.request_delay).await;
    }

    report_summary(out, &summary, &options.output_dir);
    info!(
        downloaded = summary.downloaded,
        failed = summary.failed,
        "Batch finished"
    );
    summary
}
