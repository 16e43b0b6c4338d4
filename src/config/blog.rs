//! Blog configuration (_voyage.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured access token
pub const ACCESS_TOKEN_ENV: &str = "VOYAGE_ACCESS_TOKEN";

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Content repository
    pub api_url: String,
    pub access_token: Option<String>,
    pub document_type: String,

    // Listing
    pub page_size: usize,

    // Detail page
    pub neighbor_batch: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Voyage".to_string(),
            description: String::new(),
            language: "en".to_string(),

            api_url: "https://example.cdn.prismic.io/api/v2".to_string(),
            access_token: None,
            document_type: "post".to_string(),

            page_size: 1,

            neighbor_batch: 2,
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides, so the access token can stay out of
    /// the config file
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.is_empty() {
                self.access_token = Some(token);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.title, "Voyage");
        assert_eq!(config.document_type, "post");
        assert_eq!(config.page_size, 1);
        assert_eq!(config.neighbor_batch, 2);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Spacetraveling
api_url: https://spacetraveling.cdn.prismic.io/api/v2
page_size: 5
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Spacetraveling");
        assert_eq!(config.api_url, "https://spacetraveling.cdn.prismic.io/api/v2");
        assert_eq!(config.page_size, 5);
        // Unspecified fields fall back to defaults
        assert_eq!(config.neighbor_batch, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_voyage.yml");
        fs::write(&path, "title: My Blog\ndocument_type: article\n").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.document_type, "article");
    }
}
