//! Configuration constants and profile loading for einline
//!
//! Profiles are INI sections. Each one picks the lookup endpoint, an optional
//! default API key and the noun used in banner messages.

use std::path::Path;

use anyhow::{Context, Result};
use ini::Ini;
use reqwest::Url;

use crate::lookup::LookupTemplate;

/// Default profile file path for einline
pub const DEFAULT_PROFILE_PATH: &str = "~/.einline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "EINLINE_PROFILE_PATH";

/// Base URL used when a profile does not set `base_url`
pub const DEFAULT_BASE_URL: &str = "https://api.charityapi.org/api/organizations";

/// Noun used in banner messages when a profile does not set `subject`
pub const DEFAULT_SUBJECT: &str = "organization";

const KEY_BASE_URL: &str = "base_url";
const KEY_FIXED_URL: &str = "fixed_url";
const KEY_API_KEY: &str = "api_key";
const KEY_SUBJECT: &str = "subject";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Settings of a single lookup profile
#[derive(Debug, Clone)]
pub struct LookupProfile {
    template: LookupTemplate,
    api_key: Option<String>,
    subject: String,
}

impl LookupProfile {
    pub fn new(template: LookupTemplate) -> Self {
        Self {
            template,
            api_key: None,
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        let api_key = api_key.into().trim().to_string();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn template(&self) -> &LookupTemplate {
        &self.template
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Credential for every trigger: a non-blank CLI key wins over the profile's
pub fn resolve_credential(cli_api_key: Option<&str>, profile: &LookupProfile) -> Option<String> {
    cli_api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .or(profile.api_key())
        .map(str::to_string)
}

fn default_template() -> Result<LookupTemplate> {
    let base = Url::parse(DEFAULT_BASE_URL).context("Invalid default base URL")?;
    Ok(LookupTemplate::Interpolated { base })
}

/// Load profile `name` from the INI file at `path`
///
/// A missing file or section is not an error: the built-in defaults are returned.
pub fn load_profile(name: &str, path: &str) -> Result<LookupProfile> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand profile path '{path}'"))?;
    let file = Path::new(expanded.as_ref());

    if !file.exists() {
        tracing::debug!("Profile file '{}' not found, using defaults", file.display());
        return Ok(LookupProfile::new(default_template()?));
    }

    let ini = Ini::load_from_file(file)
        .with_context(|| format!("Failed to read profile file '{}'", file.display()))?;

    let Some(section) = ini.section(Some(name)) else {
        tracing::debug!("Profile '{}' not found, using defaults", name);
        return Ok(LookupProfile::new(default_template()?));
    };

    let template = match (section.get(KEY_FIXED_URL), section.get(KEY_BASE_URL)) {
        (Some(fixed), _) => LookupTemplate::Fixed {
            url: Url::parse(fixed.trim())
                .with_context(|| format!("Invalid {KEY_FIXED_URL} in profile '{name}'"))?,
        },
        (None, Some(base)) => LookupTemplate::Interpolated {
            base: Url::parse(base.trim())
                .with_context(|| format!("Invalid {KEY_BASE_URL} in profile '{name}'"))?,
        },
        (None, None) => default_template()?,
    };

    let mut profile = LookupProfile::new(template);
    if let Some(api_key) = section.get(KEY_API_KEY) {
        profile = profile.with_api_key(api_key);
    }
    if let Some(subject) = section.get(KEY_SUBJECT) {
        profile = profile.with_subject(subject.trim());
    }

    tracing::debug!("Profile '{}' loaded: {:?}", name, profile.template());
    Ok(profile)
}
