use crate::error::LineError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;

/// `go test -json` 输出中的一行
///
/// 同时接受首字母大写（go test 原生输出）和全小写的字段名，未知字段忽略
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTestLine {
    #[serde(default, rename = "Time", alias = "time")]
    pub time: Option<String>,
    #[serde(default, rename = "Test", alias = "test")]
    pub test: Option<String>,
    #[serde(default, rename = "Action", alias = "action")]
    pub action: Option<String>,
    #[serde(default, rename = "Package", alias = "package")]
    pub package: Option<String>,
    #[serde(default, rename = "Elapsed", alias = "elapsed")]
    pub elapsed: Option<f64>,
}

/// 测试动作，只识别 pass / fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestAction {
    Pass,
    Fail,
}

impl FromStr for TestAction {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(TestAction::Pass),
            "fail" => Ok(TestAction::Fail),
            other => Err(LineError::UnknownAction(other.to_string())),
        }
    }
}

/// 校验通过的测试记录
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    pub time: Option<DateTime<Utc>>,
    pub test: String,
    pub action: TestAction,
    pub package: Option<String>,
    /// 耗时（秒），非负
    pub elapsed: Option<f64>,
}
