//! 构建最终输出

use crate::models::{ReportOutput, ReportOutputTestRun, ResultEntry};

/// 将结果整理为 `{run_id, test_runs}`，顺序与重复项保持不变
pub fn build_output(run_id: u64, entries: &[ResultEntry]) -> ReportOutput {
    ReportOutput {
        run_id,
        test_runs: entries
            .iter()
            .filter(|e| e.case_id != 0)
            .map(|e| ReportOutputTestRun {
                test_case_id: e.case_id,
                status: e.status,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultStatus;
    use serde_json::json;

    fn entry(case_id: u64, status: ResultStatus) -> ResultEntry {
        ResultEntry {
            case_id,
            status,
            package: String::new(),
            time: None,
            time_ms: 0,
        }
    }

    #[test]
    fn test_build_output_keeps_order_and_duplicates() {
        let entries = vec![
            entry(3, ResultStatus::Passed),
            entry(0, ResultStatus::Passed),
            entry(1, ResultStatus::Failed),
            entry(3, ResultStatus::Failed),
        ];

        let output = build_output(42, &entries);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "run_id": 42,
                "test_runs": [
                    {"test_case_id": 3, "status": "passed"},
                    {"test_case_id": 1, "status": "failed"},
                    {"test_case_id": 3, "status": "failed"}
                ]
            })
        );
    }

    #[test]
    fn test_empty_output() {
        let value = serde_json::to_value(build_output(7, &[])).unwrap();
        assert_eq!(value, json!({"run_id": 7, "test_runs": []}));
    }
}
