//! Local filename derivation from an image URL.

use crate::error::FetchError;

/// Decoded names longer than this are replaced with a synthetic name.
const MAX_FILENAME_CHARS: usize = 100;

const DEFAULT_EXTENSION: &str = "jpg";

/// Resolves the local filename for `url` using the current time for
/// synthetic names.
pub fn resolve_filename(url: &str) -> Result<String, FetchError> {
    resolve_filename_at(url, chrono::Utc::now().timestamp())
}

/// Resolves the local filename for `url`.
///
/// The last path segment is used when it carries an extension, percent-decoded.
/// Otherwise the name is `image_<timestamp>.jpg`. Decoded names over 100
/// characters become `image_<timestamp>.<ext>`, with `<ext>` taken from the
/// undecoded segment; that fallback is not length-checked again.
pub fn resolve_filename_at(url: &str, timestamp: i64) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let mut candidate = last_segment(parsed.path()).to_string();
    if candidate.is_empty() || !candidate.contains('.') {
        candidate = synthetic_name(timestamp, DEFAULT_EXTENSION);
    }

    let decoded = percent_decode(&candidate);
    if decoded.chars().count() > MAX_FILENAME_CHARS {
        let extension = candidate
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(DEFAULT_EXTENSION);
        return Ok(synthetic_name(timestamp, extension));
    }

    Ok(decoded)
}

/// Text after the last `/` of `url`, used to label progress lines.
pub fn display_name(url: &str) -> &str {
    last_segment(url)
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn synthetic_name(timestamp: i64, extension: &str) -> String {
    format!("image_{}.{}", timestamp, extension)
}

fn percent_decode(segment: &str) -> String {
    let bytes = urlencoding::decode_binary(segment.as_bytes());
    // An encoded separator must not turn the name into a path.
    String::from_utf8_lossy(&bytes).replace('/', "_")
}
