use crate::cli::ListParams;
use crate::error::ImgBatchError;
use crate::filename::resolve_filename;
use std::io::Write;
use std::path::Path;

pub async fn run_list(params: ListParams) -> Result<(), ImgBatchError> {
    let ListParams { urls, output_dir } = params;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_listing(&urls, &output_dir, &mut out)?;
    out.flush()?;
    Ok(())
}

/// One line per URL: the URL and the path a download would be written to.
/// Timestamped fallback names use the current time, so they only hint at the
/// name a later download receives.
fn write_listing<W: Write>(urls: &[String], output_dir: &Path, out: &mut W) -> std::io::Result<()> {
    for (index, url) in urls.iter().enumerate() {
        match resolve_filename(url) {
            Ok(filename) => writeln!(
                out,
                "[{}/{}] {} -> {}",
                index + 1,
                urls.len(),
                url,
                output_dir.join(filename).display()
            )?,
            Err(err) => writeln!(out, "[{}/{}] {} -> {}", index + 1, urls.len(), url, err)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_shows_target_paths() {
        let urls = vec![
            "https://x.test/a/b.png".to_string(),
            "https://x.test/c/d%20e.jpg".to_string(),
            "not a url".to_string(),
        ];
        let mut out = Vec::new();
        write_listing(&urls, Path::new("images"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[1/3] https://x.test/a/b.png -> images/b.png");
        assert_eq!(lines[1], "[2/3] https://x.test/c/d%20e.jpg -> images/d e.jpg");
        assert!(lines[2].starts_with("[3/3] not a url -> invalid URL"));
    }
}
