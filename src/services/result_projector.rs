//! 将一条测试记录展开为用例结果

use crate::error::LineError;
use crate::models::{ResultEntry, ResultStatus, TestAction, TestRecord};
use crate::services::case_id::extract_case_ids;

/// 为测试名中的每个用例 ID 生成一条结果
///
/// 顺序与 ID 在测试名中出现的顺序一致，重复的 ID 会生成重复的结果。
/// 测试名中没有 ID 时返回空列表。
pub fn project_record(record: &TestRecord) -> Result<Vec<ResultEntry>, LineError> {
    let case_ids = extract_case_ids(&record.test)?;
    if case_ids.is_empty() {
        return Ok(Vec::new());
    }

    let status = status_for(record.action);
    let package = record.package.clone().unwrap_or_default();
    let time_ms = elapsed_to_ms(record.elapsed);

    Ok(case_ids
        .into_iter()
        .map(|case_id| ResultEntry {
            case_id,
            status,
            package: package.clone(),
            time: record.time,
            time_ms,
        })
        .collect())
}

fn status_for(action: TestAction) -> ResultStatus {
    match action {
        TestAction::Pass => ResultStatus::Passed,
        TestAction::Fail => ResultStatus::Failed,
    }
}

/// 秒转毫秒（四舍五入）
fn elapsed_to_ms(elapsed: Option<f64>) -> u64 {
    match elapsed {
        Some(secs) if secs > 0.0 => (secs * 1000.0).round() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::line_parser::parse_line;

    fn project_line(line: &str) -> Result<Vec<ResultEntry>, LineError> {
        project_record(&parse_line(line)?)
    }

    #[test]
    fn test_pass_line_with_multiple_ids() {
        let entries = project_line(
            r#"{"Action":"pass","Package":"github.com/test","Test":"TestCase/QASE-123/QASE-456","Elapsed":10}"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].case_id, 123);
        assert_eq!(entries[1].case_id, 456);
        for entry in &entries {
            assert_eq!(entry.status, ResultStatus::Passed);
            assert_eq!(entry.package, "github.com/test");
            assert_eq!(entry.time_ms, 10000);
            assert_eq!(entry.time, None);
        }
    }

    #[test]
    fn test_fail_line_without_elapsed() {
        let entries = project_line(
            r#"{"Time":"2024-05-27T19:58:10.573629+07:00","Action":"fail","Package":"github.com/test","Test":"TestCase/QASE-123/QASE-456"}"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].case_id, 123);
        assert_eq!(entries[1].case_id, 456);
        for entry in &entries {
            assert_eq!(entry.status, ResultStatus::Failed);
            assert_eq!(entry.time_ms, 0);
            assert_eq!(entry.time.map(|t| t.timestamp()), Some(1716814690));
        }
    }

    #[test]
    fn test_no_ids_is_empty() {
        let entries = project_line(
            r#"{"Action":"pass","Package":"github.com/test","Test":"TestCase"}"#,
        )
        .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_package_is_empty_string() {
        let entries = project_line(r#"{"Action":"pass","Test":"QASE-9"}"#).unwrap();
        assert_eq!(entries[0].package, "");
    }

    #[test]
    fn test_elapsed_rounding() {
        assert_eq!(elapsed_to_ms(None), 0);
        assert_eq!(elapsed_to_ms(Some(0.0)), 0);
        assert_eq!(elapsed_to_ms(Some(0.29)), 290);
        assert_eq!(elapsed_to_ms(Some(0.0006)), 1);
        assert_eq!(elapsed_to_ms(Some(0.0004)), 0);
    }

    #[test]
    fn test_invalid_lines_are_errors() {
        assert!(project_line("invalid json").is_err());
        assert!(project_line(r#"{"Action":"invalid","Test":"TestCase/QASE-123"}"#).is_err());
    }
}
