/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::models::ReportOutput;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志写到 stderr，stdout 只输出最终 JSON。
/// 设置了 `RUST_LOG` 时以其为准，否则按 `verbose` 选择 debug / info。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 上报测试结果到 Qase");
    info!("📁 项目: {}", config.project);
    info!("📝 运行标题: {}", config.run_title);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(output: &ReportOutput) {
    let failed = output
        .test_runs
        .iter()
        .filter(|r| r.status == crate::models::ResultStatus::Failed)
        .count();

    info!("\n{}", "=".repeat(60));
    info!("📊 上报完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("🆔 运行 ID: {}", output.run_id);
    info!("✅ 通过: {}", output.test_runs.len() - failed);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
