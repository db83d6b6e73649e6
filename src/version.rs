//! 版本信息
//!
//! 发布构建时通过 `GIT_COMMIT` / `BUILD_DATE` 环境变量注入提交号和日期

pub const NAME: &str = "qase-test-reporter";

/// `<version>-<commit>-<date>`，commit 截取前 8 位，date 截取前 10 位
pub fn version_string() -> String {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_COMMIT"),
        option_env!("BUILD_DATE"),
    )
}

fn format_version(version: &str, commit: Option<&str>, date: Option<&str>) -> String {
    let commit = commit
        .filter(|c| !c.is_empty())
        .map(|c| c.chars().take(8).collect::<String>())
        .unwrap_or_else(|| "none".to_string());
    let date = date
        .filter(|d| !d.is_empty())
        .map(|d| d.chars().take(10).collect::<String>())
        .unwrap_or_else(|| "unknown".to_string());

    format!("{}-{}-{}", version, commit, date)
}
