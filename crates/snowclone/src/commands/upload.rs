//! スキーマのアップロード
//!
//! レジストリからプロジェクトのエンドポイントを解決し、`/schema` へ
//! multipart フォームで POST する。リトライはしない。

use anyhow::Context;
use colored::Colorize;
use snowclone_cloud::EndpointRegistry;
use snowclone_cloud_aws::{DynamoRegistry, load_sdk_config};
use std::path::Path;

pub async fn handle(file: &Path, project: &str, region: &str) -> anyhow::Result<()> {
    println!("{}", "スキーマをアップロードします...".blue().bold());
    println!("プロジェクト: {}", project.cyan());

    let sdk_config = load_sdk_config(region).await;
    let registry = DynamoRegistry::new(&sdk_config);
    let endpoint = registry.resolve(project).await?;
    println!("エンドポイント: {}", endpoint.cyan());

    let url = format!("{}/schema", endpoint);
    upload_schema(file, &url).await?;

    println!();
    println!("{}", "✓ スキーマをアップロードしました".green().bold());

    Ok(())
}

/// ファイルを multipart フォーム（フィールド名 `file`）で POST する
async fn upload_schema(file: &Path, url: &str) -> anyhow::Result<()> {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema.sql".to_string());

    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("スキーマファイルを読み込めません: {}", file.display()))?;

    tracing::debug!("Uploading {} ({} bytes) to {}", file_name, bytes.len(), url);

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("アップロードに失敗しました: HTTP {}", response.status());
    }

    Ok(())
}
