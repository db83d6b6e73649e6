use crate::models::result_entry::{CaseId, ResultStatus};
use serde::Serialize;

/// 程序最终输出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutput {
    pub run_id: u64,
    pub test_runs: Vec<ReportOutputTestRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutputTestRun {
    pub test_case_id: CaseId,
    pub status: ResultStatus,
}
