use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SNAPSHOT: &str = "tasks.json";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── ServerConfig ─────────────────────────────────────────────────────────────

/// Resolved server configuration.
///
/// Priority (highest to lowest):
///   1. CLI / env — passed as `Some(value)` from clap
///   2. `taskd.toml` in the working directory
///   3. Built-in defaults
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (default: "127.0.0.1").
    pub bind_address: String,
    pub port: u16,
    /// Path of the JSON snapshot file, resolved relative to the working
    /// directory (default: "tasks.json").
    pub snapshot_path: PathBuf,
    /// Log level filter (trace, debug, info, warn, error).
    pub log: String,
}

impl ServerConfig {
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        snapshot_path: Option<PathBuf>,
        log: Option<String>,
    ) -> Self {
        Self::with_file(port, bind_address, snapshot_path, log, Path::new("taskd.toml"))
    }

    /// Same as [`new`](Self::new) but with an explicit config file path, for tests.
    pub fn with_file(
        port: Option<u16>,
        bind_address: Option<String>,
        snapshot_path: Option<PathBuf>,
        log: Option<String>,
        file: &Path,
    ) -> Self {
        // TOML file is the lowest-priority override layer
        let toml = load_toml(file).unwrap_or_default();

        Self {
            port: port.or(toml.port).unwrap_or(DEFAULT_PORT),
            bind_address: bind_address
                .or(toml.bind_address)
                .unwrap_or_else(default_bind_address),
            snapshot_path: snapshot_path
                .or(toml.snapshot_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT)),
            log: log.or(toml.log).unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

// ─── TOML file layer ──────────────────────────────────────────────────────────

/// `taskd.toml` — all fields are optional overrides.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    snapshot_path: Option<PathBuf>,
    log: Option<String>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            // Config is resolved before the tracing subscriber is installed,
            // so report on stderr directly.
            eprintln!(
                "warn: failed to parse config file '{}': {e} — using defaults",
                path.display()
            );
            None
        }
    }
}
