//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["interview.toml", ".interview.toml"];
const ENV_PREFIX: &str = "INTERVIEW_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `INTERVIEW_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./interview.toml` or `./.interview.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/interview-orchestrator/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/interview-orchestrator/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("interview-orchestrator").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ env ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./interview.toml or ./.interview.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.models.candidates.len(), 2);
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("interview-orchestrator"));
    }

    #[test]
    fn test_project_file_and_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "interview.toml",
                r#"
[server]
bind = "0.0.0.0:9000"

[models]
candidates = ["gpt-4o-mini"]
"#,
            )?;
            jail.set_env("INTERVIEW_RETRY__MAX_ATTEMPTS", "5");

            let config = ConfigLoader::load(None).expect("config loads");
            assert_eq!(config.server.bind, "0.0.0.0:9000");
            assert_eq!(config.models.candidates, vec!["gpt-4o-mini".to_string()]);
            assert_eq!(config.retry.max_attempts, 5);
            // Untouched sections keep their defaults
            assert_eq!(config.retry.base_delay_ms, 500);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("interview.toml", "[server]\nbind = \"127.0.0.1:1\"\n")?;
            jail.create_file("custom.toml", "[server]\nbind = \"127.0.0.1:2\"\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).expect("config loads");
            assert_eq!(config.server.bind, "127.0.0.1:2");
            Ok(())
        });
    }
}
