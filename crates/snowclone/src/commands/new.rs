//! プロジェクトの新規作成
//!
//! 同梱テンプレートをコピーして新しいプロジェクトディレクトリを作る。

use colored::Colorize;

pub fn handle(name: Option<&str>) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let target = snowclone_scaffold::resolve_target(&cwd, name);
    let template = snowclone_scaffold::default_template_dir()?;

    println!("{}", "プロジェクトファイルをコピーします...".blue().bold());

    let summary = snowclone_scaffold::copy_template(&template, &target)?;

    if summary.skipped > 0 {
        println!(
            "  ✓ {} ファイルをコピー（既存 {} 件はスキップ）",
            summary.copied, summary.skipped
        );
    } else {
        println!("  ✓ {} ファイルをコピー", summary.copied);
    }

    println!();
    println!(
        "{}",
        format!("✓ プロジェクトの準備ができました: {}", target.display())
            .green()
            .bold()
    );

    Ok(())
}
