use crate::config::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_DELAY_MS, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub request_delay: Duration,
}

impl FetchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.output.path.clone(),
            user_agent: config.http.user_agent.clone(),
            request_delay: Duration::from_millis(config.http.request_delay_ms),
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
        }
    }
}

/// Outcome counters of one batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub downloaded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn attempted(&self) -> usize {
        self.downloaded + self.failed
    }

    pub(crate) fn record(&mut self, outcome: Option<&std::path::Path>) {
        match outcome {
            Some(_) => self.downloaded += 1,
            None => self.failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut summary = BatchSummary::default();
        summary.record(Some(Path::new("images/a.png")));
        summary.record(None);
        summary.record(None);

        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.attempted(), 3);
    }

    #[test]
    fn test_options_follow_config() {
        let mut config = Config::default();
        config.output.path = PathBuf::from("gallery");
        config.http.request_delay_ms = 25;

        let options = FetchOptions::from_config(&config);
        assert_eq!(options.output_dir, PathBuf::from("gallery"));
        assert_eq!(options.request_delay, Duration::from_millis(25));
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
    }
}
