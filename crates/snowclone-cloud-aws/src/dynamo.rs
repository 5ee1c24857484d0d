//! DynamoDB endpoint registry

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use snowclone_cloud::{CloudError, EndpointRegistry, Result};

/// Table mapping project names to deployed endpoints
///
/// The table itself is provisioned by the admin stack.
pub const ENDPOINT_TABLE: &str = "snowclone-endpoints";

const ATTR_PROJECT: &str = "projectName";
const ATTR_ENDPOINT: &str = "endpoint";

/// DynamoDB-backed endpoint registry
pub struct DynamoRegistry {
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoRegistry {
    pub fn new(config: &SdkConfig) -> Self {
        Self::with_table(config, ENDPOINT_TABLE)
    }

    /// Use a non-default table name
    pub fn with_table(config: &SdkConfig, table: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(config),
            table: table.into(),
        }
    }
}

#[async_trait]
impl EndpointRegistry for DynamoRegistry {
    async fn register(&self, project: &str, endpoint: &str) -> Result<()> {
        tracing::debug!("Registering endpoint for {}: {}", project, endpoint);

        self.client
            .put_item()
            .table_name(&self.table)
            .item(ATTR_PROJECT, AttributeValue::S(project.to_string()))
            .item(ATTR_ENDPOINT, AttributeValue::S(endpoint.to_string()))
            .send()
            .await
            .map_err(|e| CloudError::ApiError(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }

    async fn resolve(&self, project: &str) -> Result<String> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(ATTR_PROJECT, AttributeValue::S(project.to_string()))
            .send()
            .await
            .map_err(|e| CloudError::ApiError(DisplayErrorContext(e).to_string()))?;

        let item = response
            .item()
            .ok_or_else(|| CloudError::EndpointNotFound(project.to_string()))?;

        item.get(ATTR_ENDPOINT)
            .and_then(|v| v.as_s().ok())
            .cloned()
            .ok_or_else(|| CloudError::MalformedEntry(project.to_string()))
    }
}
