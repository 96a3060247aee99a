use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Interactive loop settings
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    // Line that ends the loop, compared after lowercasing
    #[serde(default = "default_exit_command")]
    pub exit_command: String,

    #[serde(default = "default_blank_line")]
    pub blank_line_after_reply: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_command: default_exit_command(),
            blank_line_after_reply: default_blank_line(),
        }
    }
}

fn default_prompt() -> String {
    "Enter what you want to convert (or exit):".to_string()
}

fn default_exit_command() -> String {
    "exit".to_string()
}

fn default_blank_line() -> bool {
    true
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
