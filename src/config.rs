use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CodemindConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub classifier: ClassifierConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    /// URL the dashboard fetches the project payload from.
    pub endpoint: String,
    /// Directory of chat-log JSON files served by `codemind serve`.
    pub logs_dir: String,
}

/// Keyword sets, display caps and labels used by the classifier.
///
/// Built once and handed to [`crate::summary::Classifier::new`]; the classifier
/// never reads ambient state.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    pub function_keywords: Vec<String>,
    pub bug_fix_keywords: Vec<String>,
    pub max_functions: usize,
    pub max_bug_fixes: usize,
    pub max_tags: usize,
    pub max_code_tags: usize,
    pub ai_model: String,
    pub unknown_project: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: String,
}

impl Default for CodemindConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            source: SourceConfig::default(),
            classifier: ClassifierConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5002,
            log_level: "info".into(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        let logs_dir = default_codemind_dir()
            .join("chat_logs")
            .to_string_lossy()
            .into_owned();
        Self {
            endpoint: "http://127.0.0.1:5002/api/projects".into(),
            logs_dir,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            function_keywords: to_strings(&[
                "function",
                "method",
                "added",
                "implemented",
                "create",
                "add",
                "implement",
            ]),
            bug_fix_keywords: to_strings(&["bug", "fix", "error", "issue", "repair", "problem"]),
            max_functions: 5,
            max_bug_fixes: 5,
            max_tags: 6,
            max_code_tags: 8,
            ai_model: "OpenAI GPT-3.5".into(),
            unknown_project: "Unknown Project".into(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".into(),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Returns `~/.codemind/`
pub fn default_codemind_dir() -> PathBuf {
    home_dir().join(".codemind")
}

/// Returns the default config file path: `~/.codemind/config.toml`
pub fn default_config_path() -> PathBuf {
    default_codemind_dir().join("config.toml")
}

impl CodemindConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CodemindConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (CODEMIND_ENDPOINT, CODEMIND_LOGS_DIR,
    /// CODEMIND_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CODEMIND_ENDPOINT") {
            self.source.endpoint = val;
        }
        if let Ok(val) = std::env::var("CODEMIND_LOGS_DIR") {
            self.source.logs_dir = val;
        }
        if let Ok(val) = std::env::var("CODEMIND_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the chat-log directory, expanding `~` if needed.
    pub fn resolved_logs_dir(&self) -> PathBuf {
        expand_tilde(&self.source.logs_dir)
    }

    /// Resolve the export directory, expanding `~` if needed.
    pub fn resolved_output_dir(&self) -> PathBuf {
        expand_tilde(&self.export.output_dir)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
