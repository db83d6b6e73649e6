//! 单行解析与校验

use crate::error::LineError;
use crate::models::{RawTestLine, TestAction, TestRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// 解析一行 JSON 并校验必填字段
///
/// - JSON 不合法、不是对象或时间戳不是 RFC3339：解码错误
/// - 缺少测试名、action 不是 pass/fail、elapsed 为负：校验错误
pub fn parse_line(line: &str) -> Result<TestRecord, LineError> {
    let value: Value = serde_json::from_str(line)?;
    // 派生的 Deserialize 会按位置接受数组，这里只允许对象
    if !value.is_object() {
        return Err(LineError::NotAnObject);
    }
    let raw = RawTestLine::deserialize(value)?;

    let test = match raw.test {
        Some(test) if !test.is_empty() => test,
        _ => return Err(LineError::MissingTest),
    };

    let action: TestAction = raw.action.unwrap_or_default().parse()?;

    let time = match raw.time.as_deref() {
        Some(value) if !value.is_empty() => Some(parse_time(value)?),
        _ => None,
    };

    if let Some(elapsed) = raw.elapsed {
        if elapsed < 0.0 {
            return Err(LineError::NegativeElapsed(elapsed));
        }
    }

    Ok(TestRecord {
        time,
        test,
        action,
        package: raw.package.filter(|p| !p.is_empty()),
        elapsed: raw.elapsed,
    })
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, LineError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| LineError::InvalidTime {
            value: value.to_string(),
            source,
        })
}
