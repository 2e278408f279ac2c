//! Connector lifecycle endpoints

use crate::ControlPlaneClient;
use crate::error::Result;
use sluice_core::domain::connector::Connector;
use sluice_core::dto::connector::CreateConnectorRequest;

impl ControlPlaneClient {
    // =============================================================================
    // Connector Lifecycle
    // =============================================================================

    /// Create a new connector attached to a pipeline
    ///
    /// # Arguments
    /// * `req` - The connector creation request, including the settings map
    ///
    /// # Returns
    /// The created connector, including its remote identifier
    pub async fn create_connector(&self, req: CreateConnectorRequest) -> Result<Connector> {
        let url = format!("{}/v1/connectors", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Delete a connector
    ///
    /// # Arguments
    /// * `connector_id` - The remote connector identifier to delete
    pub async fn delete_connector(&self, connector_id: &str) -> Result<()> {
        let url = format!("{}/v1/connectors/{}", self.base_url, connector_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::ControlPlaneClient;
    use sluice_core::domain::spec::SourceConnectorSpec;
    use sluice_core::dto::connector::{AwsCredentials, CreateConnectorRequest};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_connector_posts_settings_map() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/connectors"))
            .and(body_json(serde_json::json!({
                "type": "TYPE_SOURCE",
                "plugin": "builtin:s3",
                "pipelineId": "pl-1",
                "config": {
                    "name": "orders-in",
                    "settings": {
                        "aws.accessKeyId": "AKIA_TEST",
                        "aws.secretAccessKey": "secret",
                        "aws.region": "eu-central-1",
                        "aws.bucket": "raw-orders",
                        "prefix": "incoming/"
                    }
                }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "cn-7" })),
            )
            .mount(&server)
            .await;

        let spec = SourceConnectorSpec {
            name: "orders-in".to_string(),
            bucket: "raw-orders".to_string(),
            prefix: "incoming/".to_string(),
        };
        let credentials = AwsCredentials {
            access_key_id: "AKIA_TEST".to_string(),
            secret_access_key: "secret".to_string(),
            region: "eu-central-1".to_string(),
        };

        let client = ControlPlaneClient::new(server.uri());
        let connector = client
            .create_connector(CreateConnectorRequest::source("pl-1", &spec, &credentials))
            .await
            .unwrap();

        assert_eq!(connector.id, "cn-7");
    }

    #[tokio::test]
    async fn delete_connector_uses_delete_verb() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/connectors/cn-7"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ControlPlaneClient::new(server.uri());
        client.delete_connector("cn-7").await.unwrap();
    }
}
