//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["crossfire.toml", ".crossfire.toml"];
const ENV_PREFIX: &str = "CROSSFIRE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./crossfire.toml` or `./.crossfire.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/crossfire/config.toml`
    /// 4. `CROSSFIRE_*` environment variables
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        Self::figment(config_path, Self::global_config_path(), Self::project_config_path())
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(
        explicit: Option<&PathBuf>,
        global: Option<PathBuf>,
        project: Option<PathBuf>,
    ) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = project {
            figment = figment.merge(Toml::file(project_path));
        }

        // Explicit config path (highest priority)
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/crossfire/config.toml if set,
    /// otherwise falls back to ~/.config/crossfire/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("crossfire").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let found = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", found, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./crossfire.toml or ./.crossfire.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        let env_vars = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .count();
        if env_vars > 0 {
            println!("  [FOUND] Env:     {} {}* variable(s)", env_vars, ENV_PREFIX);
        } else {
            println!("  [     ] Env:     {}*", ENV_PREFIX);
        }

        println!("  [     ] Default: built-in defaults");
    }
}
