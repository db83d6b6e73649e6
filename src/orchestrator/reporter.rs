//! 上报流程 - 编排层
//!
//! ## 核心流程
//!
//! 1. **累加**：在阻塞线程中逐行读取输入文件，得到 [`ResultBatch`]
//! 2. **创建运行**：以累计的用例 ID 创建测试运行
//! 3. **提交结果**：一次批量提交全部结果
//! 4. **结束运行**：标记运行完成
//! 5. **输出**：构建 `{run_id, test_runs}`
//!
//! 三个远程调用严格按顺序各执行一次，任一失败即终止，已创建的运行不会回滚。

use crate::clients::{ResultSubmission, TestOpsApi};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ReportOutput, ResultBatch};
use crate::orchestrator::batch_accumulator::BatchAccumulator;
use crate::services::build_output;
use crate::utils::logging::{log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 应用主结构
pub struct App<C> {
    config: Config,
    client: C,
}

impl<C: TestOpsApi> App<C> {
    /// 以显式传入的配置和平台客户端创建应用
    pub fn new(config: Config, client: C) -> Self {
        Self { config, client }
    }

    /// 运行完整流程
    ///
    /// 输入中没有任何带用例 ID 的结果时仍会创建并结束一个空运行，输出空的 `test_runs`
    pub async fn run(&self, input: &Path) -> Result<ReportOutput> {
        log_startup(&self.config);

        let batch = load_batch(input.to_path_buf()).await?;

        if batch.is_empty() {
            warn!("⚠️ 没有找到带 QASE 用例 ID 的测试结果，将创建空的测试运行");
        }

        let output = self
            .submit(batch)
            .await
            .context("上报测试结果失败")?;

        print_final_stats(&output);

        Ok(output)
    }

    /// 创建运行、提交结果、结束运行，并构建输出
    pub async fn submit(&self, batch: ResultBatch) -> AppResult<ReportOutput> {
        let case_ids = batch.case_ids();
        info!("📤 正在创建测试运行: {}", self.config.run_title);
        let run_id = self
            .client
            .create_run(&self.config.run_title, &case_ids)
            .await?;

        let submissions: Vec<ResultSubmission> =
            batch.entries().iter().map(ResultSubmission::from).collect();
        info!("📤 正在提交 {} 条结果到运行 #{}", submissions.len(), run_id);
        self.client.submit_results_bulk(run_id, &submissions).await?;

        self.client.complete_run(run_id).await?;

        Ok(build_output(run_id, &batch.into_entries()))
    }
}

/// 在阻塞线程中读取并累加输入文件，达到上限视为错误
async fn load_batch(input: PathBuf) -> Result<ResultBatch> {
    let outcome = tokio::task::spawn_blocking(move || BatchAccumulator::new().run_file(&input))
        .await
        .context("读取任务执行失败")??;

    Ok(outcome.into_complete()?)
}
