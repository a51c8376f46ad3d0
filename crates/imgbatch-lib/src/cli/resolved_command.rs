use crate::cli::args::Command;
use crate::cli::params::{FetchParams, ListParams};
use crate::config::load_config;
use crate::error::ImgBatchError;
use crate::fetch::FetchOptions;
use crate::sources::IMAGE_URLS;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    List(ListParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, ImgBatchError> {
    match command {
        Command::Fetch {
            config_path,
            output_dir,
            delay_ms,
        } => {
            let app_config = load_config(config_path.as_deref())?;

            let mut options = FetchOptions::from_config(&app_config);
            options.output_dir = resolve_output_dir(output_dir, app_config.output.path)?;
            if let Some(delay_ms) = delay_ms {
                options.request_delay = Duration::from_millis(delay_ms);
            }

            if options.user_agent.trim().is_empty() {
                return Err(ImgBatchError::CliArgumentValidation {
                    details: "http.user_agent must not be empty.".to_string(),
                });
            }

            Ok(ResolvedCommand::Fetch(FetchParams {
                urls: batch_urls(),
                options,
            }))
        }
        Command::List {
            config_path,
            output_dir,
        } => {
            let app_config = load_config(config_path.as_deref())?;

            Ok(ResolvedCommand::List(ListParams {
                urls: batch_urls(),
                output_dir: resolve_output_dir(output_dir, app_config.output.path)?,
            }))
        }
    }
}

fn resolve_output_dir(
    cli_value: Option<String>,
    configured: PathBuf,
) -> Result<PathBuf, ImgBatchError> {
    let output_dir = cli_value.map(PathBuf::from).unwrap_or(configured);
    if output_dir.as_os_str().is_empty() {
        return Err(ImgBatchError::CliArgumentValidation {
            details: "Output directory must not be empty. Configure output.path or pass --output-dir."
                .to_string(),
        });
    }
    Ok(output_dir)
}

fn batch_urls() -> Vec<String> {
    IMAGE_URLS.iter().map(|url| url.to_string()).collect()
}
