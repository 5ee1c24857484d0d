//! ローカル状態ストア
//!
//! `~/snowclone/S3.json` に管理スタックのステートバケット名を保存する。
//! アプリケーションディレクトリはコンストラクタ引数で受け取るため、
//! テストでは一時ディレクトリに差し替えられる。

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 状態ファイル名
pub const STATE_FILE: &str = "S3.json";

/// アプリケーションディレクトリ名（ホームディレクトリ直下）
const APP_DIR: &str = "snowclone";

/// `snowclone init` が保存するバケット情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRecord {
    #[serde(rename = "bucketName")]
    pub bucket_name: String,
}

impl BucketRecord {
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
        }
    }
}

/// ローカル状態ストア
pub struct StateStore {
    app_dir: PathBuf,
}

impl StateStore {
    pub fn new(app_dir: impl AsRef<Path>) -> Self {
        Self {
            app_dir: app_dir.as_ref().to_path_buf(),
        }
    }

    /// ホームディレクトリ直下の `snowclone` ディレクトリを使う
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::new(home.join(APP_DIR)))
    }

    /// 状態ファイルのパス
    pub fn state_path(&self) -> PathBuf {
        self.app_dir.join(STATE_FILE)
    }

    /// バケット情報を保存する（既存ファイルは上書き）
    ///
    /// 書き込み失敗はエラーとして呼び出し側へ伝播する。
    pub fn save(&self, record: &BucketRecord) -> Result<()> {
        std::fs::create_dir_all(&self.app_dir)?;
        let content = serde_json::to_string(record)?;
        std::fs::write(self.state_path(), content)?;
        Ok(())
    }

    /// バケット情報を読み込む
    ///
    /// `snowclone init` 未実行なら StateNotFound を返す。
    /// デフォルト値にはフォールバックしない。
    pub fn load(&self) -> Result<BucketRecord> {
        let content = std::fs::read_to_string(self.state_path()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::StateNotFound
            } else {
                ConfigError::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
