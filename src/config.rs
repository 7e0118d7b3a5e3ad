use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8087".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Default number of keywords returned per analysis.
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
    /// Optional path to a JSON word→weight lexicon that replaces the
    /// embedded one.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Seed the store with the bundled sample corpus on startup.
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword_limit: default_keyword_limit(),
            lexicon_path: None,
            seed_samples: default_seed_samples(),
        }
    }
}

fn default_keyword_limit() -> usize {
    10
}
fn default_seed_samples() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_search_limit")]
    pub limit: usize,
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,
    #[serde(default = "default_content_weight")]
    pub content_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
            title_weight: default_title_weight(),
            content_weight: default_content_weight(),
        }
    }
}

fn default_search_limit() -> usize {
    10
}
fn default_title_weight() -> f64 {
    3.0
}
fn default_content_weight() -> f64 {
    1.0
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate search
    if config.search.limit < 1 {
        anyhow::bail!("search.limit must be >= 1");
    }

    if config.search.title_weight < 0.0 || config.search.content_weight < 0.0 {
        anyhow::bail!("search.title_weight and search.content_weight must be >= 0");
    }

    // Validate analysis
    if let Some(ref lexicon) = config.analysis.lexicon_path {
        if !lexicon.exists() {
            anyhow::bail!("analysis.lexicon_path does not exist: {}", lexicon.display());
        }
    }

    Ok(config)
}
