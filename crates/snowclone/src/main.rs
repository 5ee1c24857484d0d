mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// デフォルトのAWSリージョン
const DEFAULT_REGION: &str = "us-west-2";

#[derive(Parser)]
#[command(name = "snowclone")]
#[command(about = "書いて、置いて、動く。自分のAWSにリアルタイムバックエンドを。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 管理インフラを初期化（ステートバケット作成＋管理スタックapply）
    Init {
        /// AWSリージョン
        #[arg(short, long, env = "SNOWCLONE_REGION", default_value = DEFAULT_REGION)]
        region: String,
    },
    /// プロジェクトのインフラをデプロイしてエンドポイントを登録
    Deploy {
        /// AWSリージョン
        #[arg(short, long, env = "SNOWCLONE_REGION", default_value = DEFAULT_REGION)]
        region: String,
    },
    /// スキーマファイルをデプロイ済みエンドポイントへアップロード
    Upload {
        /// スキーマファイル (SQL)
        #[arg(short, long)]
        file: PathBuf,
        /// プロジェクト名
        #[arg(short, long)]
        project: String,
        /// AWSリージョン
        #[arg(short, long, env = "SNOWCLONE_REGION", default_value = DEFAULT_REGION)]
        region: String,
    },
    /// テンプレートから新しいプロジェクトを作成
    New {
        /// プロジェクト名（省略時はカレントディレクトリに展開）
        name: Option<String>,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { region } => {
            commands::init::handle(&region).await?;
        }
        Commands::Deploy { region } => {
            commands::deploy::handle(&region).await?;
        }
        Commands::Upload {
            file,
            project,
            region,
        } => {
            commands::upload::handle(&file, &project, &region).await?;
        }
        Commands::New { name } => {
            commands::new::handle(name.as_deref())?;
        }
        Commands::Version => {
            println!("snowclone {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
