//! プロジェクト設定
//!
//! デプロイ対象プロジェクトの名前をカレントディレクトリの
//! `snowclone.json` から読む。

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// プロジェクト設定ファイル名
pub const CONFIG_FILE: &str = "snowclone.json";

/// 設定ファイルパスの環境変数オーバーライド
pub const CONFIG_PATH_ENV: &str = "SNOWCLONE_CONFIG_PATH";

/// プロジェクト設定
///
/// バックエンドのステートキーとエンドポイントレジストリのキーは
/// この名前から導出される。名前がキーとして安全かどうかの検証は
/// 行わない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

impl ProjectConfig {
    /// 指定されたファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 設定ファイルを探して読み込む
    pub fn discover() -> Result<Self> {
        Self::load(&find_config_file()?)
    }
}

/// プロジェクト設定ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 SNOWCLONE_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリの snowclone.json
pub fn find_config_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    // 2. カレントディレクトリで検索
    let candidate = std::env::current_dir()?.join(CONFIG_FILE);
    if candidate.exists() {
        return Ok(candidate);
    }

    Err(ConfigError::ProjectConfigNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"name": "myproject"}"#).unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.name, "myproject");
    }

    #[test]
    #[serial]
    fn test_find_config_file_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        fs::write(temp_dir.path().join(CONFIG_FILE), r#"{"name": "x"}"#).unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();

        let result = find_config_file();
        assert!(result.is_ok());
        assert!(result.unwrap().ends_with(CONFIG_FILE));

        // 元のディレクトリに戻る
        std::env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    #[serial]
    fn test_find_config_file_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.json");
        fs::write(&config_path, r#"{"name": "custom"}"#).unwrap();

        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, config_path.to_str().unwrap());
        }

        let result = find_config_file().unwrap();
        assert_eq!(result, config_path);

        // クリーンアップ
        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_find_config_file_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();

        let result = find_config_file();
        assert!(matches!(result, Err(ConfigError::ProjectConfigNotFound)));

        std::env::set_current_dir(original_dir).unwrap();
    }
}
