//! Quiz configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizgame configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Path of the JSON question file.
    #[serde(default = "default_questions_file")]
    pub questions_file: PathBuf,
    /// Pause after each answer, in milliseconds.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Shuffle questions before each round.
    #[serde(default = "default_true")]
    pub shuffle: bool,
    /// Fixed shuffle seed for reproducible question order.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_questions_file() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_pause_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_file: default_questions_file(),
            pause_ms: default_pause_ms(),
            shuffle: true,
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizgame.toml` in the current directory
/// 2. `~/.config/quizgame/config.toml`
///
/// Environment variable overrides: `QUIZGAME_QUESTIONS_FILE`, `QUIZGAME_PAUSE_MS`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizgame.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(
        &mut config,
        std::env::var("QUIZGAME_QUESTIONS_FILE").ok(),
        std::env::var("QUIZGAME_PAUSE_MS").ok(),
    )?;

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    config: &mut QuizConfig,
    questions_file: Option<String>,
    pause_ms: Option<String>,
) -> Result<()> {
    if let Some(file) = questions_file.filter(|f| !f.trim().is_empty()) {
        config.questions_file = PathBuf::from(file);
    }
    if let Some(ms) = pause_ms {
        config.pause_ms = ms
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZGAME_PAUSE_MS value: '{}'", ms.trim()))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgame"))
}
