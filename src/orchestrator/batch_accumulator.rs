//! 结果累加器 - 编排层
//!
//! ## 职责
//!
//! 逐行读取 `go test -json` 输出，解析、展开后累加为一个 [`ResultBatch`]。
//!
//! ## 规则
//!
//! 1. **顺序**：结果顺序与输入行顺序、ID 出现顺序一致，不去重
//! 2. **坏行**：解析或校验失败的行直接跳过（debug 日志），不影响后续行
//! 3. **上限**：累计到 [`MAX_BATCH_SIZE`] 条时立即停止，返回 [`BatchOutcome::CapReached`]
//! 4. **读取失败**：I/O 错误视为致命错误，已累计的结果丢弃

use crate::error::{LineError, PipelineError};
use crate::models::{ResultBatch, MAX_BATCH_SIZE};
use crate::services::{parse_line, project_record};
use crate::utils::logging::truncate_text;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// 累加结束时的状态
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// 输入读取完毕
    Exhausted(ResultBatch),
    /// 达到上限提前停止，携带已累计的结果
    CapReached(ResultBatch),
}

impl BatchOutcome {
    pub fn batch(&self) -> &ResultBatch {
        match self {
            BatchOutcome::Exhausted(batch) | BatchOutcome::CapReached(batch) => batch,
        }
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, BatchOutcome::CapReached(_))
    }

    /// 将达到上限视为错误
    pub fn into_complete(self) -> Result<ResultBatch, PipelineError> {
        match self {
            BatchOutcome::Exhausted(batch) => Ok(batch),
            BatchOutcome::CapReached(batch) => Err(PipelineError::CapacityExceeded {
                count: batch.len(),
                limit: MAX_BATCH_SIZE,
            }),
        }
    }
}

/// 累加统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccumulatorStats {
    /// 已读取行数
    pub lines: usize,
    /// 因解析 / 校验失败跳过的行数
    pub skipped: usize,
    /// 测试名中没有用例 ID 的记录数
    pub without_case_id: usize,
    /// 已累计结果数
    pub entries: usize,
}

/// 结果累加器
#[derive(Debug, Default)]
pub struct BatchAccumulator {
    batch: ResultBatch,
    stats: AccumulatorStats,
}

impl BatchAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> AccumulatorStats {
        self.stats
    }

    /// 打开文件并累加
    pub fn run_file(&mut self, path: &Path) -> Result<BatchOutcome, PipelineError> {
        let file = File::open(path).map_err(|source| PipelineError::OpenFailed {
            path: path.display().to_string(),
            source,
        })?;
        info!("📄 正在读取测试结果: {}", path.display());
        self.run(BufReader::new(file))
    }

    /// 逐行累加，直到输入结束或达到上限
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<BatchOutcome, PipelineError> {
        for raw in reader.split(b'\n') {
            let line_no = self.stats.lines + 1;
            let raw = raw.map_err(|source| PipelineError::ReadFailed {
                line: line_no,
                source,
            })?;
            self.stats.lines = line_no;

            let Ok(line) = std::str::from_utf8(&raw) else {
                debug!("第 {} 行不是合法的 UTF-8，跳过", line_no);
                self.stats.skipped += 1;
                continue;
            };

            if self.feed_line(line_no, line.trim_end_matches('\r')) {
                warn!(
                    "⚠️ 已达到批量提交上限 {}，停止读取 (第 {} 行)",
                    MAX_BATCH_SIZE, line_no
                );
                log_summary(&self.stats);
                return Ok(BatchOutcome::CapReached(std::mem::take(&mut self.batch)));
            }
        }

        log_summary(&self.stats);
        Ok(BatchOutcome::Exhausted(std::mem::take(&mut self.batch)))
    }

    /// 处理一行，返回批次是否已满
    fn feed_line(&mut self, line_no: usize, line: &str) -> bool {
        let entries = match parse_line(line).and_then(|record| project_record(&record)) {
            Ok(entries) => entries,
            Err(e) => {
                log_skipped(line_no, line, &e);
                self.stats.skipped += 1;
                return false;
            }
        };

        if entries.is_empty() {
            self.stats.without_case_id += 1;
            return false;
        }

        for entry in entries.into_iter().filter(|e| e.case_id != 0) {
            self.stats.entries += 1;
            if self.batch.push(entry) {
                return true;
            }
        }
        false
    }
}

// ========== 日志辅助函数 ==========

fn log_skipped(line_no: usize, line: &str, err: &LineError) {
    debug!(
        "跳过第 {} 行: {} | {}",
        line_no,
        err,
        truncate_text(line, 120)
    );
}

fn log_summary(stats: &AccumulatorStats) {
    info!(
        "✓ 读取 {} 行: 结果 {} 条, 跳过 {} 行, 无用例 ID {} 条",
        stats.lines, stats.entries, stats.skipped, stats.without_case_id
    );
}
