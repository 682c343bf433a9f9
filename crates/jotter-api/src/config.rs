//! Server configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HOST` | `0.0.0.0` | Bind address |
//! | `PORT` | `3000` | Bind port |
//! | `NOTES_STORE` | `memory` | `memory` or `file` |
//! | `NOTES_FILE` | `data/notes.json` | JSON file used when `NOTES_STORE=file` |
//! | `MAX_BODY_BYTES` | `1048576` | Request body limit |
//! | `LOG_FORMAT` | `text` | `text` or `json` |
//! | `LOG_FILE` | unset | Log to a daily-rotated file instead of stdout |
//! | `LOG_ANSI` | auto | Force ANSI colors on (`true`/`1`) or off |

use std::path::PathBuf;
use std::sync::Arc;

use jotter_core::{defaults, Error, NoteStore, Result};
use jotter_store::{FileNoteStore, MemoryNoteStore};

/// Which [`NoteStore`] backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub file: Option<String>,
    pub ansi: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub max_body_bytes: usize,
    pub log: LogConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    ///
    /// Unparseable numbers fall back to their defaults; an unknown
    /// `NOTES_STORE` is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| defaults::SERVER_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::SERVER_PORT);
        let max_body_bytes = lookup("MAX_BODY_BYTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::MAX_BODY_BYTES);

        let store = match lookup("NOTES_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => StoreKind::Memory,
            Some("file") => StoreKind::File(
                lookup("NOTES_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(defaults::NOTES_FILE)),
            ),
            Some(other) => {
                return Err(Error::Config(format!(
                    "NOTES_STORE must be \"memory\" or \"file\", got \"{}\"",
                    other
                )))
            }
        };

        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let log = LogConfig {
            format,
            file: lookup("LOG_FILE"),
            ansi: lookup("LOG_ANSI").map(|v| v == "true" || v == "1"),
        };

        Ok(Self {
            host,
            port,
            store,
            max_body_bytes,
            log,
        })
    }

    /// Construct the configured store.
    pub async fn open_store(&self) -> Result<Arc<dyn NoteStore>> {
        let store: Arc<dyn NoteStore> = match &self.store {
            StoreKind::Memory => Arc::new(MemoryNoteStore::new()),
            StoreKind::File(path) => Arc::new(FileNoteStore::open(path.clone()).await?),
        };
        Ok(store)
    }
}
