//! Configuration management for the FAQ desk.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults
//! - Config file (`.faqdesk/config.yaml` in the workspace, or an explicit path)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources win over earlier ones.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default minimum delay before a chat reply is shown, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .faqdesk/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Knowledge file to load instead of the built-in FAQ set
    pub knowledge_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Chat presentation settings
    pub chat: ChatConfig,
}

/// Chat presentation settings.
///
/// The reply delay only imitates typing; it has no bearing on how replies
/// are computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Minimum reply delay. The actual delay is drawn from `[min, 2 * min]`.
    #[serde(rename = "replyDelayMs", default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Whether the typing delay is simulated at all.
    #[serde(rename = "simulateTyping", default = "default_simulate_typing")]
    pub simulate_typing: bool,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_simulate_typing() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            simulate_typing: default_simulate_typing(),
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    knowledge: Option<KnowledgeSection>,
    logging: Option<LoggingConfig>,
    chat: Option<ChatConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct KnowledgeSection {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            knowledge_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
            chat: ChatConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration with an explicit workspace and config file.
    ///
    /// `None` falls back to the current directory and
    /// `<workspace>/.faqdesk/config.yaml` respectively. The CLI resolves
    /// `FAQDESK_WORKSPACE` and `FAQDESK_CONFIG` before calling this.
    ///
    /// Environment variables read here:
    /// - `FAQDESK_KNOWLEDGE`: Knowledge file (YAML or JSON)
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output (any value)
    ///
    /// # Example
    /// ```no_run
    /// use faqdesk_core::config::AppConfig;
    ///
    /// let config = AppConfig::load_with(None, None).expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load_with(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) = workspace {
            config.workspace = workspace;
        }
        config.config_file = config_file;

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => config.faqdesk_dir().join("config.yaml"),
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        if let Ok(knowledge) = std::env::var("FAQDESK_KNOWLEDGE") {
            config.knowledge_file = Some(PathBuf::from(knowledge));
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        let mut result = self.clone();

        if let Some(knowledge) = config_file.knowledge {
            if let Some(path) = knowledge.path {
                result.knowledge_file = Some(PathBuf::from(path));
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(chat) = config_file.chat {
            result.chat = chat;
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over the config file and environment variables.
    pub fn with_overrides(
        mut self,
        knowledge_file: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(knowledge_file) = knowledge_file {
            self.knowledge_file = Some(knowledge_file);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .faqdesk directory.
    pub fn faqdesk_dir(&self) -> PathBuf {
        self.workspace.join(".faqdesk")
    }

    /// Resolve the knowledge file against the workspace.
    ///
    /// Relative paths are taken relative to the workspace root.
    pub fn knowledge_path(&self) -> Option<PathBuf> {
        self.knowledge_file.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.workspace.join(p)
            }
        })
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(path) = self.knowledge_path() {
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "Knowledge file not found: {:?}",
                    path
                )));
            }
        }

        Ok(())
    }
}
