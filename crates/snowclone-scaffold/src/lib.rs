//! プロジェクトスキャフォールダ
//!
//! 同梱テンプレートを新しいプロジェクトディレクトリへ再帰コピーする。
//! コピーは非破壊で、ターゲットに既に存在するファイルは決して
//! 上書きしない。

pub mod error;

pub use error::{Result, ScaffoldError};

use std::path::{Path, PathBuf};

/// テンプレートディレクトリの環境変数オーバーライド
pub const TEMPLATE_DIR_ENV: &str = "SNOWCLONE_TEMPLATE_DIR";

/// 同梱テンプレートのディレクトリ名
const TEMPLATE_NAME: &str = "relay-instance";

/// コピー結果のサマリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// コピーしたファイル数
    pub copied: usize,
    /// 既存のためスキップしたファイル数
    pub skipped: usize,
}

/// コピー先ディレクトリを決定する
///
/// 名前が指定されればカレントディレクトリ配下のサブディレクトリ、
/// 指定がなければカレントディレクトリ自身。
pub fn resolve_target(cwd: &Path, name: Option<&str>) -> PathBuf {
    match name {
        Some(name) => cwd.join(name),
        None => cwd.to_path_buf(),
    }
}

/// 同梱テンプレートディレクトリを解決する
///
/// SNOWCLONE_TEMPLATE_DIR があればそれを使い、なければ実行ファイルの
/// 隣の `templates/relay-instance` を使う。
pub fn default_template_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or(Path::new("."));
    Ok(exe_dir.join("templates").join(TEMPLATE_NAME))
}

/// テンプレートをターゲットへ再帰コピーする
///
/// ターゲットディレクトリは無ければ作成する。既に存在するファイルは
/// スキップし、スキップ数をサマリで返す。
pub fn copy_template(template: &Path, target: &Path) -> Result<CopySummary> {
    if !template.is_dir() {
        return Err(ScaffoldError::TemplateNotFound(template.to_path_buf()));
    }

    std::fs::create_dir_all(target)?;

    let mut summary = CopySummary::default();
    copy_dir(template, target, &mut summary)?;

    tracing::debug!(
        "Copied template {} -> {} ({} copied, {} skipped)",
        template.display(),
        target.display(),
        summary.copied,
        summary.skipped
    );

    Ok(summary)
}

fn copy_dir(src: &Path, dst: &Path, summary: &mut CopySummary) -> Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir(&src_path, &dst_path, summary)?;
        } else if dst_path.exists() {
            // 既存ファイルは保護する
            summary.skipped += 1;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
            summary.copied += 1;
        }
    }
    Ok(())
}
