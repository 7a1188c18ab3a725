//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::str::FromStr;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

mod cli;

pub use cli::{
    CliArgs, Command, ListingArgs, PopulateArgs, RecordArgs, SiteOverrides, SitemapArgs,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "aviators-seo";
const ENV_PREFIX: &str = "AVIATORS_SEO";
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.aviatorstrainingcentre.in";
pub(crate) const DEFAULT_SITE_NAME: &str = "Aviators Training Centre";
pub(crate) const DEFAULT_TWITTER_HANDLE: &str = "@aviatorstrainingcentre";
pub(crate) const DEFAULT_LOGO_PATH: &str = "/logo.png";
pub(crate) const DEFAULT_PLACEHOLDER_IMAGE_PATH: &str = "/Blogs/Blog_Header.webp";
pub(crate) const DEFAULT_LOCALE: &str = "en-IN";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub site: SiteSettings,
    pub logging: LoggingSettings,
}

/// Read-only site identity shared by every pipeline call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Absolute base URL without a trailing slash.
    pub base_url: String,
    pub site_name: String,
    /// Handle including the leading `@`.
    pub twitter_handle: String,
    pub logo_path: String,
    pub placeholder_image_path: String,
    pub locale: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            twitter_handle: DEFAULT_TWITTER_HANDLE.to_string(),
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            placeholder_image_path: DEFAULT_PLACEHOLDER_IMAGE_PATH.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    site: RawSiteSettings,
    logging: RawLoggingSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &SiteOverrides) {
        if let Some(url) = overrides.base_url.as_ref() {
            self.site.base_url = Some(url.clone());
        }
        if let Some(name) = overrides.site_name.as_ref() {
            self.site.site_name = Some(name.clone());
        }
        if let Some(handle) = overrides.twitter_handle.as_ref() {
            self.site.twitter_handle = Some(handle.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { site, logging } = raw;

        let site = build_site_settings(site)?;
        let logging = build_logging_settings(logging)?;

        Ok(Self { site, logging })
    }
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let base_url = site
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = normalize_base_url(&base_url)
        .map_err(|reason| LoadError::invalid("site.base_url", reason))?;

    let site_name = required_text(site.site_name, DEFAULT_SITE_NAME, "site.site_name")?;

    let handle = required_text(
        site.twitter_handle,
        DEFAULT_TWITTER_HANDLE,
        "site.twitter_handle",
    )?;
    let twitter_handle = if handle.starts_with('@') {
        handle
    } else {
        format!("@{handle}")
    };

    let logo_path = required_text(site.logo_path, DEFAULT_LOGO_PATH, "site.logo_path")?;
    let placeholder_image_path = required_text(
        site.placeholder_image_path,
        DEFAULT_PLACEHOLDER_IMAGE_PATH,
        "site.placeholder_image_path",
    )?;
    let locale = required_text(site.locale, DEFAULT_LOCALE, "site.locale")?;

    Ok(SiteSettings {
        base_url,
        site_name,
        twitter_handle,
        logo_path,
        placeholder_image_path,
        locale,
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn normalize_base_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let parsed = Url::parse(trimmed).map_err(|err| format!("invalid URL `{trimmed}`: {err}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", parsed.scheme()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err("base URL must not carry a query or fragment".to_string());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn required_text(
    value: Option<String>,
    default: &str,
    key: &'static str,
) -> Result<String, LoadError> {
    let value = value.unwrap_or_else(|| default.to_string());
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LoadError::invalid(key, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    base_url: Option<String>,
    site_name: Option<String>,
    twitter_handle: Option<String>,
    logo_path: Option<String>,
    placeholder_image_path: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[cfg(test)]
mod tests;
