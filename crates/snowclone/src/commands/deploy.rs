//! プロジェクトのデプロイ
//!
//! 保存済みステートバケットをバックエンドにしてプロジェクトスタックを
//! apply し、出力の `app_url` をエンドポイントレジストリへ登録する。

use colored::Colorize;
use snowclone_cloud::EndpointRegistry;
use snowclone_cloud_aws::{DynamoRegistry, load_sdk_config};
use snowclone_config::{ProjectConfig, StateStore};
use snowclone_terraform::{BackendConfig, StackLayout, Terraform};

pub async fn handle(region: &str) -> anyhow::Result<()> {
    println!("{}", "プロジェクトをデプロイします...".blue().bold());

    let config = ProjectConfig::discover()?;
    println!("プロジェクト: {}", config.name.cyan());

    let record = StateStore::from_home()?.load()?;
    println!("ステートバケット: {}", record.bucket_name.cyan());

    let layout = StackLayout::discover()?;
    let terraform = Terraform::new(layout.project_dir()?);

    let sdk_config = load_sdk_config(region).await;
    let registry = DynamoRegistry::new(&sdk_config);

    let endpoint = run(
        &terraform,
        &registry,
        &config.name,
        &record.bucket_name,
        region,
    )
    .await?;

    println!();
    println!(
        "{}",
        format!("✓ デプロイ完了: {}", endpoint).green().bold()
    );

    Ok(())
}

/// デプロイ本体
///
/// init -migrate-state → apply → output -json → レジストリ登録。
/// 途中で失敗した場合、レジストリへは書き込まない。
async fn run(
    terraform: &Terraform,
    registry: &dyn EndpointRegistry,
    project: &str,
    bucket: &str,
    region: &str,
) -> anyhow::Result<String> {
    println!();
    println!("{}", "【Step 1/3】リモートステートを初期化中...".blue());
    let backend = BackendConfig::for_project(bucket, region, project);
    terraform.init_migrate_state(&backend).await?;
    println!("  ✓ 初期化完了");

    println!();
    println!("{}", "【Step 2/3】プロジェクトスタックをapply中...".blue());
    terraform.apply().await?;
    println!("  ✓ apply完了");

    println!();
    println!("{}", "【Step 3/3】エンドポイントを登録中...".blue());
    let outputs = terraform.outputs().await?;
    let endpoint = outputs.endpoint()?.to_string();
    registry.register(project, &endpoint).await?;
    println!("  ✓ {} を登録しました", endpoint.cyan());

    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use snowclone_cloud::CloudError;
    use snowclone_terraform::{ProcessRunner, RunOutput};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    /// terraform呼び出しを記録する偽ランナー
    struct ScriptedRunner {
        calls: Mutex<Vec<Vec<String>>>,
        fail_on: Option<&'static str>,
        output_json: &'static str,
    }

    impl ScriptedRunner {
        fn new(output_json: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: None,
                output_json,
            }
        }

        fn failing_on(subcommand: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: Some(subcommand),
                output_json: "{}",
            }
        }
    }

    #[async_trait]
    impl ProcessRunner for ScriptedRunner {
        async fn run(
            &self,
            _program: &str,
            args: &[String],
            _cwd: &Path,
        ) -> std::io::Result<RunOutput> {
            self.calls.lock().unwrap().push(args.to_vec());

            let subcommand = args.first().map(String::as_str).unwrap_or("");
            if self.fail_on == Some(subcommand) {
                return Ok(RunOutput {
                    status_code: 1,
                    stdout: String::new(),
                    stderr: "Error: apply failed".to_string(),
                });
            }

            let stdout = if subcommand == "output" {
                self.output_json.to_string()
            } else {
                String::new()
            };

            Ok(RunOutput {
                status_code: 0,
                stdout,
                stderr: String::new(),
            })
        }
    }

    /// 登録内容を記録する偽レジストリ
    #[derive(Default)]
    struct RecordingRegistry {
        entries: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl EndpointRegistry for RecordingRegistry {
        async fn register(&self, project: &str, endpoint: &str) -> snowclone_cloud::Result<()> {
            self.entries
                .lock()
                .unwrap()
                .push((project.to_string(), endpoint.to_string()));
            Ok(())
        }

        async fn resolve(&self, project: &str) -> snowclone_cloud::Result<String> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .find(|(name, _)| name == project)
                .map(|(_, endpoint)| endpoint.clone())
                .ok_or_else(|| CloudError::EndpointNotFound(project.to_string()))
        }
    }

    #[tokio::test]
    async fn test_deploy_registers_endpoint() {
        let runner = Arc::new(ScriptedRunner::new(
            r#"{"app_url":{"value":"https://example.test"}}"#,
        ));
        let terraform = Terraform::with_runner("/tmp/stack", runner);
        let registry = RecordingRegistry::default();

        let endpoint = run(
            &terraform,
            &registry,
            "myproject",
            "snowclone-abc123",
            "us-west-2",
        )
        .await
        .unwrap();

        assert_eq!(endpoint, "https://example.test");
        assert_eq!(
            *registry.entries.lock().unwrap(),
            vec![(
                "myproject".to_string(),
                "https://example.test".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_backend_key_derived_from_project_name() {
        let runner = Arc::new(ScriptedRunner::new(
            r#"{"app_url":{"value":"https://example.test"}}"#,
        ));
        let terraform = Terraform::with_runner("/tmp/stack", runner.clone());
        let registry = RecordingRegistry::default();

        run(
            &terraform,
            &registry,
            "myproject",
            "snowclone-abc123",
            "us-west-2",
        )
        .await
        .unwrap();

        let calls = runner.calls.lock().unwrap();
        assert!(
            calls[0].contains(&"-backend-config=key=myproject/terraform.tfstate".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_apply_skips_registry_write() {
        let runner = Arc::new(ScriptedRunner::failing_on("apply"));
        let terraform = Terraform::with_runner("/tmp/stack", runner);
        let registry = RecordingRegistry::default();

        let result = run(
            &terraform,
            &registry,
            "myproject",
            "snowclone-abc123",
            "us-west-2",
        )
        .await;

        assert!(result.is_err());
        assert!(registry.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_app_url_skips_registry_write() {
        let runner = Arc::new(ScriptedRunner::new("{}"));
        let terraform = Terraform::with_runner("/tmp/stack", runner);
        let registry = RecordingRegistry::default();

        let result = run(
            &terraform,
            &registry,
            "myproject",
            "snowclone-abc123",
            "us-west-2",
        )
        .await;

        assert!(result.is_err());
        assert!(registry.entries.lock().unwrap().is_empty());
    }
}
