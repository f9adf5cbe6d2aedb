use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::consts::{DEFAULT_ENTRIES_URL, DEFAULT_LOGIN_URL};

/// Remote endpoint URLs. The Tickspot URLs are the defaults; a config file
/// can point both somewhere else, which is also how the integration tests
/// substitute local servers for the real service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct Endpoints {
    pub(crate) login_url: String,
    pub(crate) entries_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            entries_url: DEFAULT_ENTRIES_URL.to_string(),
        }
    }
}

/// On-disk config shape. All sections optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    projects: BTreeMap<String, String>,
    #[serde(default)]
    endpoints: Endpoints,
}

/// Immutable run configuration: the project-to-task table and the remote
/// endpoints. Built once at startup and passed by reference from there on.
#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) projects: BTreeMap<String, String>,
    pub(crate) endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

impl Config {
    /// Task ids known out of the box. "MTK" is the task the tool was written
    /// for; `[projects]` in a config file extends or overrides this table.
    fn builtin_projects() -> BTreeMap<String, String> {
        BTreeMap::from([("MTK".to_string(), "17471389".to_string())])
    }

    fn from_file(file: ConfigFile) -> Self {
        let mut projects = Self::builtin_projects();
        projects.extend(file.projects);
        Self {
            projects,
            endpoints: file.endpoints,
        }
    }

    pub(crate) fn task_id(&self, project: &str) -> Option<&str> {
        self.projects.get(project).map(String::as_str)
    }

    /// Comma-separated project codes, for the unknown-project message.
    pub(crate) fn valid_projects(&self) -> String {
        self.projects
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn load() -> Self {
        for path in Self::config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<ConfigFile>(&content) {
                    Ok(file) => {
                        eprintln!("Loaded config from {}", path.display());
                        return Self::from_file(file);
                    }
                    Err(e) => {
                        eprintln!("Warning: failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Explicit override, highest priority
        if let Ok(path) = std::env::var("TICKLOAD_CONFIG") {
            paths.push(PathBuf::from(path));
        }

        // 2. XDG config: ~/.config/tickload/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tickload").join("config.toml"));
        }

        // 3. Platform config dir (differs from the above on macOS/Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("tickload").join("config.toml");
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        // 4. Home directory: ~/.tickload.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".tickload.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_know_mtk() {
        let config = Config::default();
        assert_eq!(config.task_id("MTK"), Some("17471389"));
        assert_eq!(config.task_id("UNKNOWN"), None);
        assert_eq!(config.endpoints.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(config.endpoints.entries_url, DEFAULT_ENTRIES_URL);
    }

    #[test]
    fn file_projects_extend_and_override_builtins() {
        let file: ConfigFile = toml::from_str(
            r#"
            [projects]
            ACME = "42"
            MTK = "99"
            "#,
        )
        .unwrap();
        let config = Config::from_file(file);
        assert_eq!(config.task_id("ACME"), Some("42"));
        assert_eq!(config.task_id("MTK"), Some("99"));
    }

    #[test]
    fn partial_endpoint_override_keeps_other_default() {
        let file: ConfigFile = toml::from_str(
            r#"
            [endpoints]
            login_url = "http://127.0.0.1:9/login"
            "#,
        )
        .unwrap();
        let config = Config::from_file(file);
        assert_eq!(config.endpoints.login_url, "http://127.0.0.1:9/login");
        assert_eq!(config.endpoints.entries_url, DEFAULT_ENTRIES_URL);
    }

    #[test]
    fn valid_projects_is_sorted_and_comma_separated() {
        let file: ConfigFile = toml::from_str(
            r#"
            [projects]
            ACME = "42"
            "#,
        )
        .unwrap();
        let config = Config::from_file(file);
        assert_eq!(config.valid_projects(), "ACME, MTK");
    }

    #[test]
    fn config_paths_not_empty() {
        assert!(!Config::config_paths().is_empty());
    }
}
