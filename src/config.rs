use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("FILMSHELF_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        // settings from the environment (with a prefix of FILMSHELF)
        Self::load(
            &config_path,
            config::Environment::with_prefix("FILMSHELF").separator("__"),
        )
    }

    /// Layers built-in defaults, then the optional toml file at `config_path`, then `env`.
    pub fn load(config_path: &str, env: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("logs.level", "info")?
            .set_default("shell.prompt", "filmshelf> ")?
            .set_default("shell.render_after_mutation", true)?
            // Add in config toml, if any
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logs: LogsConfig,
    pub shell: ShellConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    pub level: String,
}

// ===============================================================================
// Shell
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Printed before reading each command.
    pub prompt: String,
    /// Re-print the movie list and collections after every successful change.
    pub render_after_mutation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("FILMSHELF")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn defaults_apply_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let config = Config::load(missing.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config.logs.level, "info");
        assert_eq!(config.shell.prompt, "filmshelf> ");
        assert!(config.shell.render_after_mutation);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[logs]\nlevel = \"debug\"\n\n[shell]\nprompt = \"movies> \"\nrender_after_mutation = false\n",
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(config.logs.level, "debug");
        assert_eq!(config.shell.prompt, "movies> ");
        assert!(!config.shell.render_after_mutation);
    }

    #[test]
    fn environment_overrides_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shell]\nprompt = \"movies> \"\n").unwrap();

        let config = Config::load(
            path.to_str().unwrap(),
            env(&[("FILMSHELF__SHELL__PROMPT", "env> ")]),
        )
        .unwrap();
        assert_eq!(config.shell.prompt, "env> ");
        assert_eq!(config.logs.level, "info");
        assert!(config.shell.render_after_mutation);
    }
}
