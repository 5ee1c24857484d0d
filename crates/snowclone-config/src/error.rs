use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ホームディレクトリが見つかりません")]
    HomeDirNotFound,

    #[error("管理スタックが初期化されていません。先に `snowclone init` を実行してください")]
    StateNotFound,

    #[error(
        "プロジェクト設定が見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: snowclone.json\n\
        または SNOWCLONE_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ProjectConfigNotFound,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON エラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
