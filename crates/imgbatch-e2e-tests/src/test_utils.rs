use eyre::Result;
use imgbatch_lib::config::{Config, HttpConfig, OutputConfig};
use imgbatch_lib::fetch::FetchOptions;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// A request as seen by [`MockServer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    body: Vec<u8>,
}

/// Minimal HTTP/1.1 server on a background thread. Unknown paths get 404;
/// every connection is closed after one response.
pub struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[derive(Default)]
pub struct MockServerBuilder {
    routes: HashMap<String, Route>,
}

impl MockServerBuilder {
    pub fn ok(self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.route(path, 200, body)
    }

    pub fn route(mut self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            path.to_string(),
            Route {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn start(self) -> MockServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let server_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&server_requests);
                thread::spawn(move || handle(stream, &routes, &requests));
            }
        });

        MockServer {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }
}

impl MockServer {
    pub fn builder() -> MockServerBuilder {
        MockServerBuilder::default()
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log").clone()
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    requests: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let Some(head) = read_request_head(&mut stream) else {
        return;
    };
    let request = parse_request_head(&head);
    let route = routes.get(&request.path).cloned().unwrap_or(Route {
        status: 404,
        body: b"not found".to_vec(),
    });
    requests.lock().expect("request log").push(request);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        route.status,
        reason_phrase(route.status),
        route.body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

fn read_request_head(stream: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8(head).ok()
}

fn parse_request_head(head: &str) -> RecordedRequest {
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("").to_string();

    let user_agent = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim().to_string());

    RecordedRequest {
        method,
        path,
        user_agent,
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A URL on a port nothing listens on, so the connection is refused.
pub fn unreachable_url(path: &str) -> String {
    format!("http://127.0.0.1:1{}", path)
}

pub fn create_test_config(output_dir: &Path) -> Config {
    Config {
        output: OutputConfig {
            path: output_dir.to_path_buf(),
        },
        http: HttpConfig {
            user_agent: "imgbatch-e2e/1.0".to_string(),
            request_delay_ms: 0,
        },
    }
}

/// Options writing into `output_dir` without the inter-request pause.
pub fn fast_options(output_dir: &Path) -> FetchOptions {
    FetchOptions::from_config(&create_test_config(output_dir))
}

/// Temporary directory holding a `config.json` that points at `images/`
/// inside it.
pub fn setup_test_environment() -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;

    let config = create_test_config(&temp_dir.path().join("images"));
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    Ok((temp_dir, config_path))
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("imgbatch_lib=debug,imgbatch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
