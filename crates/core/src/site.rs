//! Site-wide metadata shared by every rendered page.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site configuration, usually loaded from `siteMetadata.yaml` or `.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Default author name.
    pub author: String,
    /// Content language (`lang` attribute).
    pub language: String,
    /// Locale used for date formatting.
    pub locale: String,
    /// Canonical site URL.
    pub site_url: String,
    /// Source repository URL.
    pub site_repo: String,
    /// Prefix prepended to image sources (for sites served under a sub-path).
    pub base_path: String,
    /// Newsletter form settings; the form is still rendered when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<NewsletterConfig>,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            language: "en-us".to_string(),
            locale: "en-US".to_string(),
            site_url: String::new(),
            site_repo: String::new(),
            base_path: String::new(),
            newsletter: None,
        }
    }
}

/// Newsletter provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterConfig {
    /// Provider name (e.g. "buttondown", "mailchimp").
    pub provider: String,
    /// Endpoint the subscription form posts to.
    #[serde(default = "default_newsletter_api_url")]
    pub api_url: String,
}

/// Subscription endpoint used when none is configured.
pub const DEFAULT_NEWSLETTER_API_URL: &str = "/api/newsletter";

fn default_newsletter_api_url() -> String {
    DEFAULT_NEWSLETTER_API_URL.to_string()
}

impl SiteMetadata {
    /// Parses site metadata from a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input).map_err(|err| ConfigError::Yaml(err.to_string()))
    }

    /// Parses site metadata from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|err| ConfigError::Json(err.to_string()))
    }

    /// Loads site metadata from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        let contents = std::fs::read_to_string(path)?;
        let metadata = parse(&contents)?;
        log::debug!("Loaded site metadata from {}", path.display());
        Ok(metadata)
    }

    /// Endpoint for the newsletter form.
    pub fn newsletter_api_url(&self) -> &str {
        self.newsletter
            .as_ref()
            .map(|n| n.api_url.as_str())
            .unwrap_or(DEFAULT_NEWSLETTER_API_URL)
    }
}
