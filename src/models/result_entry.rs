use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Qase 用例 ID
pub type CaseId = u64;

/// 单次批量提交允许的最大结果数
pub const MAX_BATCH_SIZE: usize = 2000;

/// 用例结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Passed,
    Failed,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Passed => "passed",
            ResultStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个用例的执行结果
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub case_id: CaseId,
    pub status: ResultStatus,
    /// 所属包，没有时为空串
    pub package: String,
    pub time: Option<DateTime<Utc>>,
    pub time_ms: u64,
}

/// 一次运行累计的结果，长度不超过 [`MAX_BATCH_SIZE`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBatch {
    entries: Vec<ResultEntry>,
}

impl ResultBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条结果，返回追加后是否已满
    pub(crate) fn push(&mut self, entry: ResultEntry) -> bool {
        self.entries.push(entry);
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_BATCH_SIZE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// 按出现顺序列出用例 ID（保留重复）
    pub fn case_ids(&self) -> Vec<CaseId> {
        self.entries.iter().map(|e| e.case_id).collect()
    }

    pub fn into_entries(self) -> Vec<ResultEntry> {
        self.entries
    }
}

impl From<Vec<ResultEntry>> for ResultBatch {
    fn from(entries: Vec<ResultEntry>) -> Self {
        Self { entries }
    }
}
