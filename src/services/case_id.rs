//! Qase 用例 ID 提取
//!
//! 测试名中形如 `QASE-123` 的标记会关联到 Qase 中已有的用例

use crate::error::LineError;
use crate::models::CaseId;
use regex::Regex;
use std::sync::OnceLock;

fn case_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // 只接受 ASCII 数字，`\d` 会匹配其他文字的数字
    PATTERN.get_or_init(|| Regex::new(r"QASE-([0-9]+)").expect("常量正则表达式无效"))
}

/// 按出现顺序提取所有用例 ID（保留重复）
///
/// 没有匹配时返回空列表；数字超出 u64 范围时返回错误
pub fn extract_case_ids(text: &str) -> Result<Vec<CaseId>, LineError> {
    case_id_pattern()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|digits| {
            digits
                .as_str()
                .parse::<CaseId>()
                .map_err(|_| LineError::CaseIdOutOfRange(digits.as_str().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_case_ids() {
        let cases: &[(&str, &[CaseId])] = &[
            ("QASE-123", &[123]),
            ("QASE-abc", &[]),
            ("", &[]),
            ("QASE-", &[]),
            ("QASE-123/Halohalo_QASE-456", &[123, 456]),
            ("QASE-123/QASE-456Halohalo_QASE-789", &[123, 456, 789]),
            ("TestLogin/QASE-7/retry/QASE-7", &[7, 7]),
        ];

        for (input, expected) in cases {
            assert_eq!(
                extract_case_ids(input).unwrap(),
                expected.to_vec(),
                "输入: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        assert!(extract_case_ids("QASE-١٢٣").unwrap().is_empty());
    }

    #[test]
    fn test_lowercase_prefix_does_not_match() {
        assert!(extract_case_ids("qase-12").unwrap().is_empty());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = extract_case_ids("QASE-99999999999999999999999").unwrap_err();
        assert!(matches!(err, LineError::CaseIdOutOfRange(_)));
    }
}
