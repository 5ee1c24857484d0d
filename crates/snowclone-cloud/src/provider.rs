//! Cloud collaborator trait definitions

use crate::error::Result;
use async_trait::async_trait;

/// Object storage abstraction
///
/// Implemented by providers that can create a named bucket, used as the
/// terraform remote-state backend.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create a bucket with the given name
    async fn create_bucket(&self, name: &str) -> Result<()>;
}

/// Endpoint registry abstraction
///
/// A key-value table mapping a project name to the URL of its deployed
/// service. Written once per deploy, read when resolving an upload target.
#[async_trait]
pub trait EndpointRegistry: Send + Sync {
    /// Record the endpoint for a project (overwrites any previous entry)
    async fn register(&self, project: &str, endpoint: &str) -> Result<()>;

    /// Look up the endpoint registered for a project
    async fn resolve(&self, project: &str) -> Result<String>;
}
