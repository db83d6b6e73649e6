use anyhow::Result;
use clap::{CommandFactory, Parser};
use qase_test_reporter::cli::Cli;
use qase_test_reporter::utils::logging;
use qase_test_reporter::{version, App, Config, QaseClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{} {}", version::NAME, version::version_string());
        return Ok(());
    }

    let Some(filename) = cli.filename.clone() else {
        eprintln!("Error: filename is required");
        Cli::command().print_help()?;
        anyhow::bail!("缺少输入文件");
    };

    // 加载配置：默认值 ← TOML 文件 ← 环境变量 ← 命令行
    let config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?.with_env(|name| std::env::var(name).ok())?,
        None => Config::from_env()?,
    }
    .with_overrides(cli.overrides());

    // 初始化日志
    logging::init(config.verbose_logging);

    config.validate()?;

    // 构造平台客户端并注入应用
    let client = QaseClient::new(&config)?;
    let app = App::new(config, client);

    let output = app.run(&filename).await?;
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}
