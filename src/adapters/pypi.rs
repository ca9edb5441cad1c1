use crate::domain::model::ProjectMetadata;
use crate::domain::ports::Registry;
use crate::utils::error::{DevcracksError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub const DEFAULT_REGISTRY_URL: &str = "https://pypi.org";

/// Client for the PyPI JSON API (`{base}/pypi/{project}/json`).
#[derive(Debug, Clone)]
pub struct PypiClient {
    base_url: Url,
    client: Client,
}

impl PypiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| DevcracksError::InvalidRegistryUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DevcracksError::InvalidRegistryUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn project_url(&self, library: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["pypi", library, "json"]);
        }
        url
    }
}

#[async_trait]
impl Registry for PypiClient {
    async fn project(&self, library: &str) -> Result<Option<ProjectMetadata>> {
        let url = self.project_url(library);
        tracing::debug!("Making registry request to: {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Registry response status: {}", response.status());

        if response.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }

        // read as text first so a malformed body surfaces as a serde error
        let body = response.text().await?;
        let metadata: ProjectMetadata = serde_json::from_str(&body)?;
        Ok(Some(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_url() {
        let client = PypiClient::new(DEFAULT_REGISTRY_URL).unwrap();
        assert_eq!(
            client.project_url("requests").as_str(),
            "https://pypi.org/pypi/requests/json"
        );

        let mirrored = PypiClient::new("http://localhost:3141/root/").unwrap();
        assert_eq!(
            mirrored.project_url("flask").as_str(),
            "http://localhost:3141/root/pypi/flask/json"
        );
    }

    #[test]
    fn test_library_name_is_escaped() {
        let client = PypiClient::new(DEFAULT_REGISTRY_URL).unwrap();
        assert_eq!(
            client.project_url("a/b").as_str(),
            "https://pypi.org/pypi/a%2Fb/json"
        );
        assert_eq!(
            client.project_url("foo bar").as_str(),
            "https://pypi.org/pypi/foo%20bar/json"
        );
    }

    #[test]
    fn test_rejects_unusable_base() {
        assert!(PypiClient::new("not a url").is_err());
        assert!(PypiClient::new("mailto:someone@example.com").is_err());
    }
}
