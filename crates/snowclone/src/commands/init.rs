//! 管理インフラの初期化
//!
//! ステートバケットを作成し、管理スタックのリモートステートを
//! そのバケットへ向けて初期化・applyした後、バケット名をローカル
//! 状態ストアへ保存する。

use colored::Colorize;
use snowclone_cloud::{ObjectStore, generate_bucket_name};
use snowclone_cloud_aws::{S3Store, load_sdk_config};
use snowclone_config::{BucketRecord, StateStore};
use snowclone_terraform::{BackendConfig, StackLayout, Terraform};

pub async fn handle(region: &str) -> anyhow::Result<()> {
    println!("{}", "管理インフラを初期化します...".blue().bold());
    println!("リージョン: {}", region.cyan());

    // スタックディレクトリは先に解決して、ないなら何も作らずに終わる
    let layout = StackLayout::discover()?;
    let admin_dir = layout.admin_dir()?;

    // 1. ステートバケットの作成
    println!();
    println!("{}", "【Step 1/4】ステートバケットを作成中...".blue());
    let bucket_name = generate_bucket_name();
    let sdk_config = load_sdk_config(region).await;
    let store = S3Store::new(&sdk_config, region);
    store.create_bucket(&bucket_name).await?;
    println!("  ✓ {} を作成しました", bucket_name.cyan());

    // 2. リモートステートの初期化
    println!();
    println!("{}", "【Step 2/4】リモートステートを初期化中...".blue());
    let terraform = Terraform::new(&admin_dir);
    let backend = BackendConfig::for_admin(&bucket_name, region);
    terraform.init_reconfigure(&backend).await?;
    println!("  ✓ 初期化完了");

    // 3. 管理スタックのapply
    println!();
    println!("{}", "【Step 3/4】管理スタックをapply中...".blue());
    terraform.apply().await?;
    println!("  ✓ apply完了");

    // 4. バケット名の保存
    println!();
    println!("{}", "【Step 4/4】バケット名を保存中...".blue());
    let state = StateStore::from_home()?;
    state.save(&BucketRecord::new(&bucket_name))?;
    println!("  ✓ {} に保存しました", state.state_path().display());

    println!();
    println!("{}", "✓ 管理インフラの初期化が完了しました".green().bold());

    Ok(())
}
