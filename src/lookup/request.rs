//! # Request Builder
//!
//! Turns the raw identifier and credential fields into a request descriptor.
//! Pure transformation: nothing here touches the network.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;

use super::error::LookupError;

/// Where a lookup goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTemplate {
    /// `<base>/<identifier>`
    Interpolated { base: Url },
    /// Always the same URL, no identifier involved
    Fixed { url: Url },
}

impl LookupTemplate {
    /// Whether a trigger must carry a non-empty identifier
    pub fn requires_identifier(&self) -> bool {
        matches!(self, Self::Interpolated { .. })
    }
}

/// Input fields captured at trigger time, trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    identifier: String,
    credential: Option<String>,
}

impl LookupRequest {
    pub fn new(identifier: &str, credential: Option<&str>) -> Self {
        let credential = credential
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Self {
            identifier: identifier.trim().to_string(),
            credential,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
}

/// Fully formed GET request: URL plus headers
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    url: Url,
    headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl fmt::Display for RequestDescriptor {
    /// Request line and headers, with sensitive values masked
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request: GET {}", self.url)?;
        writeln!(f, "Headers:")?;
        for (name, value) in &self.headers {
            if value.is_sensitive() {
                writeln!(f, "  {name}: ********")?;
            } else {
                writeln!(f, "  {name}: {}", value.to_str().unwrap_or("<binary>"))?;
            }
        }
        Ok(())
    }
}

/// Builds request descriptors for one lookup template
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    template: LookupTemplate,
}

impl RequestBuilder {
    pub fn new(template: LookupTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &LookupTemplate {
        &self.template
    }

    pub fn build(&self, request: &LookupRequest) -> Result<RequestDescriptor, LookupError> {
        let url = self.build_url(request.identifier())?;
        let headers = Self::build_headers(request.credential())?;
        Ok(RequestDescriptor { url, headers })
    }

    fn build_url(&self, identifier: &str) -> Result<Url, LookupError> {
        match &self.template {
            LookupTemplate::Fixed { url } => Ok(url.clone()),
            LookupTemplate::Interpolated { base } => {
                if identifier.is_empty() {
                    return Err(LookupError::empty_identifier());
                }

                let mut url = base.clone();
                url.path_segments_mut()
                    .map_err(|_| {
                        LookupError::Validation(format!("Base URL '{base}' cannot take a path"))
                    })?
                    .pop_if_empty()
                    .push(identifier);
                Ok(url)
            }
        }
    }

    fn build_headers(credential: Option<&str>) -> Result<HeaderMap, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(credential) = credential {
            let mut value = HeaderValue::from_str(&format!("Bearer {credential}")).map_err(|_| {
                LookupError::Validation("API key contains characters not allowed in a header".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}
