//! Remote state backend configuration

/// Remote state key of the shared admin stack
const ADMIN_STATE_KEY: &str = "admin/terraform.tfstate";

/// Key/value parameters telling terraform where to store its state file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub bucket: String,
    pub region: String,
    pub key: String,
}

impl BackendConfig {
    /// Backend for the shared admin stack
    pub fn for_admin(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            key: ADMIN_STATE_KEY.to_string(),
        }
    }

    /// Backend for a project stack
    ///
    /// The key is derived from the project name alone, so each project
    /// gets an isolated state file in the shared bucket and repeated
    /// deploys of the same project reuse the same state.
    pub fn for_project(
        bucket: impl Into<String>,
        region: impl Into<String>,
        project: &str,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            key: format!("{}/terraform.tfstate", project),
        }
    }

    /// Render as `-backend-config=` arguments for `terraform init`
    pub fn to_args(&self) -> Vec<String> {
        vec![
            format!("-backend-config=bucket={}", self.bucket),
            format!("-backend-config=region={}", self.region),
            format!("-backend-config=key={}", self.key),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_backend_key() {
        let backend = BackendConfig::for_admin("snowclone-abc123", "us-west-2");
        assert_eq!(backend.key, "admin/terraform.tfstate");
    }

    #[test]
    fn test_project_backend_key_is_deterministic() {
        let a = BackendConfig::for_project("snowclone-abc123", "us-west-2", "myproject");
        let b = BackendConfig::for_project("snowclone-abc123", "us-west-2", "myproject");
        assert_eq!(a, b);
        assert_eq!(a.key, "myproject/terraform.tfstate");
    }

    #[test]
    fn test_to_args() {
        let backend = BackendConfig::for_project("snowclone-abc123", "us-west-2", "blog");
        assert_eq!(
            backend.to_args(),
            vec![
                "-backend-config=bucket=snowclone-abc123",
                "-backend-config=region=us-west-2",
                "-backend-config=key=blog/terraform.tfstate",
            ]
        );
    }
}
