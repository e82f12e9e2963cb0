/// Application configuration
use crate::cli::Cli;
use crate::error::{AppError, Result};
use folder_index::{parser, CollisionPolicy, IndexOptions, VARIOUS_ARTISTS_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "update-index.toml";

/// Prefix for environment overrides, e.g. `UPDATE_INDEX_ROOT`
pub const ENV_PREFIX: &str = "UPDATE_INDEX";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Root directory to reindex
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default = "default_various_artists_name")]
    pub various_artists_name: String,

    #[serde(default)]
    pub collision_policy: CollisionPolicy,

    #[serde(default)]
    pub normalize_filenames: bool,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise [`DEFAULT_CONFIG_FILE`] is
    /// read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load), reading environment overrides from `env`
    /// instead of the process environment when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with UPDATE_INDEX_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Apply command-line flags on top of file and environment settings
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(root) = &cli.root {
            self.root = Some(root.clone());
        }
        if let Some(name) = &cli.various_artists {
            self.various_artists_name = name.clone();
        }
        if let Some(policy) = cli.on_collision {
            self.collision_policy = policy;
        }
        if cli.normalize {
            self.normalize_filenames = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let name = self.various_artists_name.as_str();

        if name.trim().is_empty() {
            return Err(AppError::Config(
                "Various artists folder name must not be empty".to_string(),
            ));
        }

        if name == "." || name == ".." || name.chars().any(std::path::is_separator) {
            return Err(AppError::Config(format!(
                "Various artists folder name {:?} is not a plain folder name",
                name
            )));
        }

        if parser::remove_counter(name) != name {
            return Err(AppError::Config(format!(
                "Various artists folder name {:?} must not end in a counter",
                name
            )));
        }

        Ok(())
    }

    /// Root directory to reindex, falling back to the current directory
    pub fn resolve_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            various_artists_name: self.various_artists_name.clone(),
            collision_policy: self.collision_policy,
            normalize_filenames: self.normalize_filenames,
        }
    }
}

fn default_various_artists_name() -> String {
    VARIOUS_ARTISTS_NAME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: None,
            various_artists_name: default_various_artists_name(),
            collision_policy: CollisionPolicy::default(),
            normalize_filenames: false,
        }
    }
}
