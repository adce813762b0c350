use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SamplerConfig {
    /// Sampling attempts before generation gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_discount")]
    pub discount: f64,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory the model file is written to
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

// Default values
fn default_max_attempts() -> u32 { 10_000 }
fn default_discount() -> f64 { 0.99 }
fn default_output_dir() -> String { ".".to_string() }

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            discount: default_discount(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sampler: SamplerConfig::default(),
            model: ModelConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if the file
    /// doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}
