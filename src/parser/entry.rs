//! LogEntry 结构定义和相关方法
//!
//! LogEntry 表示一条原始的日志条目，可能包含多行（起始行 + 继续行）。

#[cfg(feature = "serde")]
use crate::error::ReportError;
use crate::tools::is_entry_start_line;

/// 表示一条完整的日志条目（可能包含多行）
///
/// 日志条目通常由一个起始行和零个或多个继续行组成。文件开头、
/// 第一个起始行之前的内容也会组成一个条目（前导条目），此时第一行不是起始行。
///
/// 条目组装完成后不可修改。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogEntry {
    lines: Vec<String>,
}

impl LogEntry {
    /// 由已收集的行组装条目，`lines` 不能为空
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        debug_assert!(!lines.is_empty());
        Self { lines }
    }

    /// 获取第一行
    pub fn first_line(&self) -> &str {
        &self.lines[0]
    }

    /// 获取所有行
    pub fn all_lines(&self) -> &[String] {
        &self.lines
    }

    /// 条目包含的行数
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 获取完整的条目内容
    ///
    /// # 返回
    ///
    /// 返回所有行用换行符拼接后的字符串
    pub fn full_content(&self) -> String {
        self.lines.join("\n")
    }

    /// 判断是否有继续行
    pub fn has_continuation_lines(&self) -> bool {
        self.lines.len() > 1
    }

    /// 判断第一行是否为起始行
    ///
    /// 只有前导条目会返回 `false`。
    pub fn starts_with_marker(&self) -> bool {
        is_entry_start_line(self.first_line())
    }
}

// 反序列化时拒绝空的 `lines`，保证 `first_line` 不会越界
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawLogEntry {
            lines: Vec<String>,
        }

        let raw = RawLogEntry::deserialize(deserializer)?;
        if raw.lines.is_empty() {
            return Err(serde::de::Error::custom(ReportError::EmptyInput));
        }
        Ok(Self { lines: raw.lines })
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn empty_lines_are_rejected() {
        let err = serde_json::from_str::<LogEntry>(r#"{"lines": []}"#).unwrap_err();
        assert!(err.to_string().contains("empty input"));
    }

    #[test]
    fn serialized_entry_reads_back() {
        let entry = LogEntry::from_lines(vec!["x|y|z|SELECT 1".into(), "FROM t".into()]);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"lines":["x|y|z|SELECT 1","FROM t"]}"#);

        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.first_line(), "x|y|z|SELECT 1");
    }
}
