//! 命令行参数

use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// 解析 `go test -json` 输出并将结果上报到 Qase
///
/// 测试名中的 `QASE-<id>` 标记用于关联 Qase 中的用例
#[derive(Debug, Parser)]
#[command(name = "qase-test-reporter", disable_version_flag = true)]
pub struct Cli {
    /// `go test -json` 输出文件
    pub filename: Option<PathBuf>,

    /// Qase 项目代码
    #[arg(short, long)]
    pub project: Option<String>,

    /// Qase API Token
    #[arg(short = 't', long)]
    pub api_token: Option<String>,

    /// Qase 运行标题
    #[arg(short, long)]
    pub run_title: Option<String>,

    /// Qase API 地址
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出 debug 日志
    #[arg(long)]
    pub verbose: bool,

    /// 打印版本
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// 提取覆盖配置的参数
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project: self.project.clone(),
            api_token: self.api_token.clone(),
            run_title: self.run_title.clone(),
            api_base_url: self.api_base_url.clone(),
            verbose_logging: self.verbose,
        }
    }
}
