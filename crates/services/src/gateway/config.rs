use url::Url;

use crate::error::GatewayError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: Url,
}

impl GatewayConfig {
    /// Parse and validate a backend base URL.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` if the value is not an absolute
    /// http(s) URL that can carry path segments.
    pub fn new(raw: &str) -> Result<Self, GatewayError> {
        let trimmed = raw.trim();
        let base_url =
            Url::parse(trimmed).map_err(|_| GatewayError::InvalidBaseUrl(trimmed.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidBaseUrl(trimmed.to_string()));
        }
        Ok(Self { base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-escaping each segment.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(GatewayConfig::new("localhost:8000/api").is_err());
        assert!(GatewayConfig::new("mailto:tutor@example.com").is_err());
        assert!(GatewayConfig::new("ftp://example.com").is_err());
        assert!(GatewayConfig::new("").is_err());
    }

    #[test]
    fn endpoint_escapes_topic_segment() {
        let config = GatewayConfig::new(DEFAULT_BACKEND_URL).unwrap();
        let url = config.endpoint(&["api", "lesson", "Stacks & Queues"]);
        assert_eq!(url.as_str(), "http://localhost:8000/api/lesson/Stacks%20&%20Queues");
    }

    #[test]
    fn endpoint_escapes_slashes_inside_a_segment() {
        let config = GatewayConfig::new(DEFAULT_BACKEND_URL).unwrap();
        let url = config.endpoint(&["api", "lesson", "Input/Output"]);
        assert_eq!(url.path(), "/api/lesson/Input%2FOutput");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let config = GatewayConfig::new("https://tutor.example.com/v2/").unwrap();
        let url = config.endpoint(&["api", "chat"]);
        assert_eq!(url.as_str(), "https://tutor.example.com/v2/api/chat");
    }
}
