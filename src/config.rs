//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/<app>/config.toml`
//! 3. Explicit config file (e.g. `--config`)
//! 4. Environment variables: `<APP>_*` prefix
//!
//! Settings are only read; the framework never writes them back.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

const DEFAULT_PROMPT: &str = "> ";
const DEFAULT_WELCOME: &str = "Welcome!\nType 'help' to see available commands.";

/// Settings of the interactive shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prompt shown before each input line
    pub prompt: String,
    /// Message printed when an interactive session starts
    pub welcome: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.into(),
            welcome: DEFAULT_WELCOME.into(),
        }
    }
}

/// Get the XDG config directory for an application.
pub fn global_config_dir(app_name: &str) -> Option<PathBuf> {
    ProjectDirs::from("", "", app_name).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file of an application.
pub fn global_config_path(app_name: &str) -> Option<PathBuf> {
    global_config_dir(app_name).map(|dir| dir.join("config.toml"))
}

/// Environment variable prefix for an application: `my-app` → `MY_APP`.
pub fn env_prefix(app_name: &str) -> String {
    app_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `app_name` - Names the global config directory and the env var prefix
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(app_name: &str, config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path(app_name).filter(|path| path.exists());
        Self::load_from(&env_prefix(app_name), global.as_deref(), config_file)
    }

    /// Load from explicit sources; `load` resolves them from the app name.
    pub fn load_from(
        env_prefix: &str,
        global_file: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("prompt", defaults.prompt)
            .map_err(config_err)?
            .set_default("welcome", defaults.welcome)
            .map_err(config_err)?;

        if let Some(path) = global_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template(app_name: &str) -> String {
        format!(
            r#"# {app} configuration
#
# Locations (by precedence, lowest to highest):
#   Global: {global}
#   File:   --config <path>
#   Env:    {prefix}_PROMPT, {prefix}_WELCOME

# Prompt shown before each input line
# prompt = "> "

# Message printed when an interactive session starts
# welcome = "Welcome!"
"#,
            app = app_name,
            global = global_config_path(app_name)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<no config dir>".into()),
            prefix = env_prefix(app_name),
        )
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_sources_when_loading_then_uses_defaults() {
        let settings =
            Settings::load_from("CMDKIT_UNIT_NO_SOURCES", None, None).expect("load defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_app_name_with_dashes_when_deriving_env_prefix_then_upper_snake() {
        assert_eq!(env_prefix("my-app.v2"), "MY_APP_V2");
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let settings = Settings {
            prompt: "$ ".into(),
            welcome: "hi".into(),
        };

        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();

        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template("demo")).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
