//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use crate::constants::VIEWER_QUERY_PARAM;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

// Manual Serialize/Deserialize implementation for Url
impl Serialize for ValidatedUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidatedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the underlying URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a manifest entry is already a fully-qualified resource URL
/// rather than a library name to look up.
pub fn is_resource_url(entry: &str) -> bool {
    ValidatedUrl::parse(entry).is_ok()
}

/// The address that opens an uploaded pen definition in the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerUrl(Url);

impl ViewerUrl {
    /// Builds `<viewer>?pen=<reference>`, form-encoding the reference
    /// (spaces become `+`, `~!'()` are percent-escaped).
    ///
    /// Any query already present on the viewer base is replaced.
    pub fn new(viewer: &ValidatedUrl, reference: &str) -> Result<Self, ValidationError> {
        if reference.trim().is_empty() {
            return Err(ValidationError::EmptyField("pen reference"));
        }

        let mut url = viewer.as_url().clone();
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair(VIEWER_QUERY_PARAM, reference);
        Ok(Self(url))
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the decoded pen reference carried by this URL.
    pub fn pen_reference(&self) -> Option<String> {
        self.0
            .query_pairs()
            .find(|(key, _)| key == VIEWER_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
    }
}

impl fmt::Display for ViewerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
