use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::providers::asana::DEFAULT_BASE_URL;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    pub asana_token: String,
    pub whitelist_github_users: Vec<String>,
    pub asana_base_url: String,
}

/// Optional file layer, overridden by action inputs.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub asana_token: Option<String>,
    pub whitelist_github_users: Option<Vec<String>>,
    pub asana_base_url: Option<String>,
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("ASANA_PR_SYNC_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("asana-pr-sync")
        .join("config.toml")
}

pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: FileConfig =
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Value of an action input, following the runner's `INPUT_<NAME>` convention.
/// Unset inputs read as an empty string.
pub fn get_input(name: &str) -> String {
    let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    std::env::var(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Split a comma-separated user list, dropping blanks.
pub fn parse_user_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl ActionConfig {
    pub fn resolve(file: FileConfig, input: impl Fn(&str) -> String) -> Self {
        let non_empty = |name: &str| Some(input(name)).filter(|v| !v.is_empty());

        let asana_token = non_empty("asana-token")
            .or(file.asana_token)
            .unwrap_or_default();
        let whitelist_github_users = non_empty("whitelist-github-users")
            .map(|raw| parse_user_list(&raw))
            .or(file.whitelist_github_users)
            .unwrap_or_default();
        let asana_base_url = non_empty("asana-base-url")
            .or(file.asana_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            asana_token,
            whitelist_github_users,
            asana_base_url,
        }
    }
}

pub fn load_config() -> Result<ActionConfig> {
    let file = load_file_config(&config_path())?;
    Ok(ActionConfig::resolve(file, get_input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn inputs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> String {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned().unwrap_or_default()
    }

    #[test]
    fn parse_user_list_trims_and_drops_blanks() {
        assert_eq!(
            parse_user_list(" alice, bob,,carol ,"),
            vec!["alice", "bob", "carol"]
        );
        assert!(parse_user_list("").is_empty());
    }

    #[test]
    fn inputs_only() {
        let config = ActionConfig::resolve(
            FileConfig::default(),
            inputs(&[("asana-token", "tok"), ("whitelist-github-users", "a,b")]),
        );
        assert_eq!(config.asana_token, "tok");
        assert_eq!(config.whitelist_github_users, vec!["a", "b"]);
        assert_eq!(config.asana_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn inputs_override_file() {
        let file = FileConfig {
            asana_token: Some("file-token".into()),
            whitelist_github_users: Some(vec!["file-user".into()]),
            asana_base_url: Some("http://localhost:9000".into()),
        };
        let config = ActionConfig::resolve(file, inputs(&[("asana-token", "input-token")]));
        assert_eq!(config.asana_token, "input-token");
        assert_eq!(config.whitelist_github_users, vec!["file-user"]);
        assert_eq!(config.asana_base_url, "http://localhost:9000");
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = load_file_config(&dir.path().join("config.toml")).unwrap();
        assert!(file.asana_token.is_none());
    }

    #[test]
    fn load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "asana_token = \"tok\"\nwhitelist_github_users = [\"alice\", \"bob\"]"
        )
        .unwrap();
        let loaded = load_file_config(file.path()).unwrap();
        assert_eq!(loaded.asana_token.as_deref(), Some("tok"));
        assert_eq!(
            loaded.whitelist_github_users,
            Some(vec!["alice".to_string(), "bob".to_string()])
        );
    }

    #[test]
    fn malformed_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "asana_token = ").unwrap();
        assert!(load_file_config(file.path()).is_err());
    }
}
