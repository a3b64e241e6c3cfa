// src/config.rs
//! Resolution of fetch settings from defaults, a settings file and flags.

use std::{path::Path, time::Duration};

use f1_results_infra::{FetchSettings, FetchSettingsBuilder, persistence::FileReader};
use f1_results_shared_kernel::{ErrorContext, InfrastructureError, PresentationError, Result};
use serde::Deserialize;

use crate::args::GlobalOptions;

/// Optional settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub cache_ttl_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl FileConfig {
    /// Reads JSON when the extension is `.json`, YAML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(&text).map_err(InfrastructureError::from)
        } else {
            serde_yaml::from_str(&text).map_err(InfrastructureError::from)
        };
        parsed.with_context(|| format!("reading settings from {}", path.display()))
    }
}

/// Flags win over the settings file, which wins over built-in defaults.
pub fn resolve_fetch_settings(global: &GlobalOptions) -> Result<FetchSettings> {
    let file = match &global.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    build_settings(global, &file)
}

fn build_settings(global: &GlobalOptions, file: &FileConfig) -> Result<FetchSettings> {
    let mut builder = FetchSettingsBuilder::default();

    if let Some(url) = global.base_url.clone().or_else(|| file.base_url.clone()) {
        if url.trim().is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "--base-url".to_string(),
                value: url,
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        builder.base_url(url);
    }
    if let Some(limit) = global.page_size.or(file.page_size) {
        if limit == 0 {
            return Err(PresentationError::InvalidValue {
                flag: "page_size".to_string(),
                value: limit.to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        builder.page_limit(limit);
    }
    if let Some(secs) = global.timeout.or(file.timeout_secs) {
        builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = file.cache_ttl_secs {
        builder.cache_ttl(Duration::from_secs(secs));
    }
    if let Some(agent) = &file.user_agent {
        builder.user_agent(agent.as_str());
    }

    builder.build().map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use f1_results_infra::settings::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

    use super::*;

    #[test]
    fn defaults_without_flags_or_file() {
        let settings = build_settings(&GlobalOptions::default(), &FileConfig::default()).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert_eq!(settings.page_limit, 100);
    }

    #[test]
    fn flags_override_file() {
        let global = GlobalOptions {
            base_url: Some("http://flag.test/api/f1".into()),
            page_size: Some(30),
            ..Default::default()
        };
        let file = FileConfig {
            base_url: Some("http://file.test/api/f1".into()),
            page_size: Some(50),
            timeout_secs: Some(7),
            cache_ttl_secs: Some(60),
            ..Default::default()
        };
        let settings = build_settings(&global, &file).unwrap();
        assert_eq!(settings.base_url, "http://flag.test/api/f1");
        assert_eq!(settings.page_limit, 30);
        assert_eq!(settings.timeout, Duration::from_secs(7));
        assert_eq!(settings.cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn zero_page_size_in_file_is_rejected() {
        let file = FileConfig { page_size: Some(0), ..Default::default() };
        assert!(build_settings(&GlobalOptions::default(), &file).is_err());
    }

    #[test]
    fn loads_yaml_and_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("f1.yaml");
        std::fs::write(&yaml, "base_url: http://yaml.test/api/f1\ntimeout_secs: 3\n").unwrap();
        let json = dir.path().join("f1.json");
        std::fs::write(&json, r#"{"page_size": 25}"#).unwrap();

        assert_eq!(FileConfig::load(&yaml).unwrap().timeout_secs, Some(3));
        assert_eq!(FileConfig::load(&json).unwrap().page_size, Some(25));
    }

    #[test]
    fn unknown_keys_and_missing_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("f1.yaml");
        std::fs::write(&bad, "base_uri: typo\n").unwrap();
        assert!(FileConfig::load(&bad).is_err());
        assert!(FileConfig::load(&PathBuf::from("/nonexistent/f1.yaml")).is_err());
    }
}
