use crate::config::palette::default_palette;
use crate::config::{DEFAULT_CACHE_DIR, DEFAULT_CACHE_TTL_MINUTES};
use crate::core::cache::default_expiry;
use crate::core::normalize::normalize_domain;
use crate::core::ConfigProvider;
use crate::domain::model::{DomainColors, Palette};
use crate::utils::error::{LessenError, Result};
use crate::utils::validation::{
    validate_hex_color, validate_minutes, validate_path, validate_url, Validate,
};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub cache: Option<CacheConfig>,
    pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
    pub dir: Option<String>,
    pub expiry_minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Added to, or replacing, the built-in palette.
    pub domain_colors: Option<HashMap<String, DomainColors>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LessenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LessenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    fn expiry_minutes(&self) -> i64 {
        self.cache
            .as_ref()
            .and_then(|c| c.expiry_minutes)
            .unwrap_or(DEFAULT_CACHE_TTL_MINUTES)
    }

    fn domain_colors(&self) -> Option<&HashMap<String, DomainColors>> {
        self.theme.as_ref().and_then(|t| t.domain_colors.as_ref())
    }
}

impl ConfigProvider for TomlConfig {
    fn dataset_url(&self) -> &str {
        &self.source.url
    }

    fn cache_dir(&self) -> &str {
        self.cache
            .as_ref()
            .and_then(|c| c.dir.as_deref())
            .unwrap_or(DEFAULT_CACHE_DIR)
    }

    fn cache_expiry(&self) -> Duration {
        Duration::try_minutes(self.expiry_minutes()).unwrap_or_else(default_expiry)
    }

    fn cache_enabled(&self) -> bool {
        self.cache.as_ref().and_then(|c| c.enabled).unwrap_or(true)
    }

    fn palette(&self) -> Palette {
        let mut palette = default_palette();
        if let Some(overrides) = self.domain_colors() {
            for (domain, colors) in overrides {
                palette.insert(normalize_domain(domain), colors.clone());
            }
        }
        palette
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.url", &self.source.url)?;
        validate_path("cache.dir", self.cache_dir())?;
        validate_minutes("cache.expiry_minutes", self.expiry_minutes())?;

        if let Some(overrides) = self.domain_colors() {
            for (domain, c) in overrides {
                let field = format!("theme.domain_colors.{}", domain);
                for value in [&c.base, &c.mid, &c.light1, &c.hover] {
                    validate_hex_color(&field, value)?;
                }
            }
        }
        Ok(())
    }
}
