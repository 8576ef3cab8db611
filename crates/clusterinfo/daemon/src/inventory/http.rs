//! HTTP client for the node inventory service

use super::traits::NodeInventory;
use crate::config::InventoryConfig;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use clusterinfo_types::{DeploymentId, NodeList};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// Fetches node lists over HTTP
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: Url,
}

impl HttpInventoryClient {
    /// Create a new inventory client
    pub fn new(config: &InventoryConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        Ok(Self { client, base_url })
    }

    /// Ids are pushed as single path segments and percent-encoded
    fn node_list_url(&self, deployment: &DeploymentId) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["nodes", "v2", "application"])
            .push(deployment.application.as_str())
            .push("zone")
            .push(deployment.zone.as_str());
        Ok(url)
    }
}

#[async_trait]
impl NodeInventory for HttpInventoryClient {
    async fn node_list(&self, deployment: &DeploymentId) -> FetchResult<NodeList> {
        let url = self.node_list_url(deployment)?;
        tracing::debug!(deployment = %deployment, url = %url, "Fetching node list");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => FetchError::InvalidArgument(
                    format!("{} rejected by inventory: {}", deployment, message),
                ),
                _ => FetchError::Api {
                    status: status.as_u16(),
                    message,
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterinfo_types::{ApplicationId, ZoneId};

    #[test]
    fn test_node_list_url() {
        let client = HttpInventoryClient::new(&InventoryConfig {
            base_url: "http://inventory.local:4080/".into(),
            request_timeout_secs: 5,
        })
        .unwrap();

        let deployment = DeploymentId::new(
            ApplicationId::new("tenant.music.default"),
            ZoneId::new("prod.us-east-3"),
        );
        assert_eq!(
            client.node_list_url(&deployment).unwrap().as_str(),
            "http://inventory.local:4080/nodes/v2/application/tenant.music.default/zone/prod.us-east-3"
        );
    }

    #[test]
    fn test_node_list_url_encodes_ids() {
        let client = HttpInventoryClient::new(&InventoryConfig {
            base_url: "http://inventory.local:4080/api".into(),
            request_timeout_secs: 5,
        })
        .unwrap();

        let deployment = DeploymentId::new(
            ApplicationId::new("tenant/music default"),
            ZoneId::new("prod.us-east-3?x=1"),
        );
        assert_eq!(
            client.node_list_url(&deployment).unwrap().as_str(),
            "http://inventory.local:4080/api/nodes/v2/application/tenant%2Fmusic%20default/zone/prod.us-east-3%3Fx=1"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        for base_url in ["not a url", "mailto:ops@example.com"] {
            let result = HttpInventoryClient::new(&InventoryConfig {
                base_url: base_url.into(),
                request_timeout_secs: 5,
            });
            assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
        }
    }
}
