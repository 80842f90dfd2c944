use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const DEFAULT_DIST_DIR: &str = "dist";

/// Where the preview host listens and what it serves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS),
            dist_dir: parse_non_empty_string(lookup("DIST_DIR"))
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
        }
    }
}

fn parse_u16_with_bounds(raw: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Static files from `dist_dir`; unknown paths get `index.html` so deep links
/// into the page still load it.
pub fn router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    Router::new().fallback_service(ServeDir::new(dist_dir).fallback(index))
}

pub async fn run(config: HostConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(&config.dist_dir);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log::info!(
        "serving {} on http://127.0.0.1:{}",
        config.dist_dir.display(),
        config.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        assert_eq!(HostConfig::from_lookup(lookup_from(&[])), HostConfig::default());
    }

    #[test]
    fn valid_variables_are_applied() {
        let config = HostConfig::from_lookup(lookup_from(&[("PORT", " 3000 "), ("DIST_DIR", "public")]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        for raw in ["0", "70000", "eighty", ""] {
            let config = HostConfig::from_lookup(lookup_from(&[("PORT", raw)]));
            assert_eq!(config.port, DEFAULT_PORT, "PORT={raw:?}");
        }
    }

    #[test]
    fn blank_dist_dir_falls_back_to_default() {
        let config = HostConfig::from_lookup(lookup_from(&[("DIST_DIR", "   ")]));
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    async fn get(address: SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(address)
            .await
            .expect("connect to host");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream
            .write_all(request.as_bytes())
            .await
            .expect("send request");

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .await
            .expect("read response");
        String::from_utf8_lossy(&response).into_owned()
    }

    #[tokio::test]
    async fn unknown_paths_serve_the_index_page() {
        let dist = std::env::temp_dir().join(format!("portfolio-host-{}", std::process::id()));
        std::fs::create_dir_all(&dist).expect("create dist dir");
        std::fs::write(dist.join("index.html"), "<h1>portfolio index</h1>").expect("write index");
        std::fs::write(dist.join("app.css"), "body { margin: 0; }").expect("write stylesheet");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let address = listener.local_addr().expect("local address");
        let app = router(&dist);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let deep_link = get(address, "/projects/unknown").await;
        assert!(deep_link.starts_with("HTTP/1.1 200"), "{deep_link}");
        assert!(deep_link.contains("portfolio index"));

        let stylesheet = get(address, "/app.css").await;
        assert!(stylesheet.starts_with("HTTP/1.1 200"), "{stylesheet}");
        assert!(stylesheet.contains("margin: 0"));

        let _ = std::fs::remove_dir_all(&dist);
    }
}
