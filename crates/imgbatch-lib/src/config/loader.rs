use super::Config;
use crate::error::ImgBatchError;
use config::Config as ConfigBuilder;

/// Loads the configuration file at `config_path`, or the built-in defaults
/// when no path is given. Keys missing from the file keep their defaults.
pub fn load_config(config_path: Option<&str>) -> Result<Config, ImgBatchError> {
    let Some(config_path) = config_path else {
        return Ok(Config::default());
    };

    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_REQUEST_DELAY_MS, DEFAULT_USER_AGENT};
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.output.path, PathBuf::from("images"));
        assert_eq!(config.http.request_delay_ms, DEFAULT_REQUEST_DELAY_MS);
        assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imgbatch.yaml");
        std::fs::write(&path, "output:\n  path: /tmp/gallery\n").unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.output.path, PathBuf::from("/tmp/gallery"));
        assert_eq!(config.http.request_delay_ms, DEFAULT_REQUEST_DELAY_MS);
    }

    #[test]
    fn test_http_section_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imgbatch.toml");
        std::fs::write(
            &path,
            "[http]\nuser_agent = \"test-agent/1.0\"\nrequest_delay_ms = 0\n",
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.http.user_agent, "test-agent/1.0");
        assert_eq!(config.http.request_delay_ms, 0);
        assert_eq!(config.output.path, PathBuf::from("images"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imgbatch.yaml");
        std::fs::write(&path, "urls:\n  - https://x.test/a.png\n").unwrap();

        let result = load_config(path.to_str());
        assert!(matches!(result, Err(ImgBatchError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_config(Some("/nonexistent/imgbatch.yaml"));
        assert!(matches!(result, Err(ImgBatchError::Config(_))));
    }
}
