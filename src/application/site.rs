//! Read-only site identity passed into every pipeline call.

use crate::config::SiteSettings;
use crate::domain::schema::{ImageObjectNode, OrganizationNode};

/// Site constants resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    base_url: String,
    site_name: String,
    twitter_handle: String,
    logo_url: String,
    placeholder_image_url: String,
    locale: String,
}

impl SiteProfile {
    pub fn new(settings: &SiteSettings) -> Self {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let logo_url = absolutize(&base_url, &settings.logo_path);
        let placeholder_image_url = absolutize(&base_url, &settings.placeholder_image_path);
        Self {
            base_url,
            site_name: settings.site_name.clone(),
            twitter_handle: settings.twitter_handle.clone(),
            logo_url,
            placeholder_image_url,
            locale: settings.locale.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn twitter_handle(&self) -> &str {
        &self.twitter_handle
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    pub fn placeholder_image_url(&self) -> &str {
        &self.placeholder_image_url
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// `" | {site_name}"`, appended to titles when space allows.
    pub fn brand_suffix(&self) -> String {
        format!(" | {}", self.site_name)
    }

    pub fn blog_url(&self) -> String {
        format!("{}/blog", self.base_url)
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{slug}", self.base_url)
    }

    pub fn blog_name(&self) -> String {
        format!("{} Blog", self.site_name)
    }

    /// Resolve a site-relative path against the base URL; absolute URLs pass through.
    pub fn absolute(&self, path: &str) -> String {
        absolutize(&self.base_url, path)
    }

    /// Publisher block shared by articles and listings.
    pub fn publisher(&self) -> OrganizationNode {
        OrganizationNode {
            name: self.site_name.clone(),
            url: self.base_url.clone(),
            logo: Some(ImageObjectNode {
                url: self.logo_url.clone(),
                width: None,
                height: None,
                caption: None,
                encoding_format: None,
            }),
        }
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::new(&SiteSettings::default())
    }
}

impl From<&SiteSettings> for SiteProfile {
    fn from(settings: &SiteSettings) -> Self {
        Self::new(settings)
    }
}

fn absolutize(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if let Some(host_and_path) = path.strip_prefix("//") {
        let scheme = base_url
            .split_once("://")
            .map_or("https", |(scheme, _)| scheme);
        return format!("{scheme}://{host_and_path}");
    }
    let path = path.trim_start_matches('/');
    format!("{base_url}/{path}")
}
