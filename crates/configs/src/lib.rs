use std::{io, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

const DEFAULT_WORKER_THREADS: usize = 4;

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

/// Log output style; maps onto `common::utils::logging`.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("logging.format 不支持: {other}（可选 compact | json）")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct FrontendConfig {
    /// Pre-built frontend served as fallback; `None` disables static serving.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    parse(&content).with_context(|| format!("parsing {path}"))
}

pub fn parse(content: &str) -> Result<AppConfig> {
    Ok(toml::from_str(content)?)
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) and normalise it.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like [`load_and_validate`](Self::load_and_validate), but a missing file
    /// falls back to `SERVER_HOST` / `SERVER_PORT` / `TOKIO_WORKER_THREADS` / `LOG_FORMAT`.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env()?,
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(host) = get("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = get("SERVER_PORT") {
            cfg.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow!("SERVER_PORT 无效: {port}"))?;
        }
        if let Some(threads) = get("TOKIO_WORKER_THREADS") {
            cfg.server.worker_threads = threads.trim().parse().ok();
        }
        if let Some(format) = get("LOG_FORMAT") {
            cfg.logging.format = format.parse()?;
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.frontend.normalize();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }
}

impl FrontendConfig {
    fn normalize(&mut self) {
        if self.static_dir.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            self.static_dir = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [logging]
            format = "json"

            [frontend]
            static_dir = "dist/public"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.frontend.static_dir, Some(PathBuf::from("dist/public")));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let mut cfg = parse("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        assert!(cfg.frontend.static_dir.is_none());
    }

    #[test]
    fn normalize_fills_blank_host_and_zero_threads() {
        let mut cfg = parse("[server]\nhost = \"  \"\nport = 8080\nworker_threads = 0\n[frontend]\nstatic_dir = \"\"").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(cfg.frontend.static_dir.is_none());
    }

    #[test]
    fn rejects_port_zero_and_unknown_format() {
        let mut cfg = parse("[server]\nport = 0").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
        assert!(parse("[logging]\nformat = \"pretty\"").is_err());
        assert!("pretty".parse::<LogFormat>().is_err());
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn env_lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "5000"),
            ("TOKIO_WORKER_THREADS", "8"),
            ("LOG_FORMAT", "json"),
        ]);
        let cfg = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:5000");
        assert_eq!(cfg.server.worker_threads, Some(8));
        assert_eq!(cfg.logging.format, LogFormat::Json);

        assert!(AppConfig::from_lookup(|k| (k == "SERVER_PORT").then(|| "http".to_string())).is_err());
    }

    #[test]
    fn missing_file_is_detected() {
        let err = load_from_file("/definitely/not/here/config.toml").unwrap_err();
        assert!(is_missing_file(&err));
        let other = parse("[server").unwrap_err();
        assert!(!is_missing_file(&other));
    }
}
