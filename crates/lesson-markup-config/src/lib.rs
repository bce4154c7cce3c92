use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("lesson_path in {config_path} must point to a .toml lesson file, got {lesson_path}")]
    NotALessonFile {
        config_path: PathBuf,
        lesson_path: PathBuf,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Lesson file opened when the CLI is given no path.
    ///
    /// A relative path is resolved against the config file's directory.
    pub lesson_path: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured lesson path
        if let Some(expanded) = Self::expand_path(&config.lesson_path) {
            config.lesson_path = Self::resolve_relative(config_path, expanded);
        }

        if !config
            .lesson_path
            .extension()
            .is_some_and(|ext| ext == "toml")
        {
            return Err(ConfigError::NotALessonFile {
                config_path: config_path.to_path_buf(),
                lesson_path: config.lesson_path,
            });
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/lesson-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn resolve_relative(config_path: &Path, lesson_path: PathBuf) -> PathBuf {
        if lesson_path.is_absolute() {
            return lesson_path;
        }
        match config_path.parent() {
            Some(dir) => dir.join(lesson_path),
            None => lesson_path,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
