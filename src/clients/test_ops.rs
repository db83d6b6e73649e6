//! 测试管理平台接口
//!
//! 编排层只依赖此 trait，具体实现（Qase HTTP 客户端 / 测试替身）在 main 中构造后注入

use crate::error::ApiError;
use crate::models::{CaseId, ResultEntry, ResultStatus};
use async_trait::async_trait;
use serde::Serialize;

/// 单条待提交结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSubmission {
    pub case_id: CaseId,
    pub status: ResultStatus,
    pub time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<&ResultEntry> for ResultSubmission {
    fn from(entry: &ResultEntry) -> Self {
        Self {
            case_id: entry.case_id,
            status: entry.status,
            time_ms: entry.time_ms,
            comment: (!entry.package.is_empty()).then(|| format!("Package: {}", entry.package)),
        }
    }
}

/// 测试管理平台
#[async_trait]
pub trait TestOpsApi: Send + Sync {
    /// 创建测试运行，返回运行 ID
    async fn create_run(&self, title: &str, case_ids: &[CaseId]) -> Result<u64, ApiError>;

    /// 批量提交结果
    async fn submit_results_bulk(
        &self,
        run_id: u64,
        results: &[ResultSubmission],
    ) -> Result<(), ApiError>;

    /// 结束测试运行
    async fn complete_run(&self, run_id: u64) -> Result<(), ApiError>;
}
