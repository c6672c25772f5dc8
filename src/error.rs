//! 错误类型定义
//!
//! 定义了日志转换过程中可能出现的所有错误类型。

use thiserror::Error;

/// 报表转换错误类型
///
/// 条目级别的错误（如字段不足）只会导致该条目被跳过；
/// 文件读写相关的错误则会终止整个转换。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// 条目中以 `|` 分隔的字段数量不足
    #[error("insufficient pipe-delimited fields: expected 4, got {0}")]
    InsufficientFields(usize),

    /// 条目不包含任何行
    #[error("empty input: no lines provided")]
    EmptyInput,

    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {0}")]
    FileNotFound(String),

    /// 读取过程中的 I/O 错误
    #[error("I/O error: {0}")]
    IoError(String),

    /// 写入 Excel 文件失败
    #[error("failed to write spreadsheet: {0}")]
    SheetWrite(String),

    /// 记录数超过单个工作表可容纳的行数
    #[error("too many records for one worksheet: {0}")]
    TooManyRows(usize),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::SheetWrite(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ReportError::InsufficientFields(2).to_string(),
            "insufficient pipe-delimited fields: expected 4, got 2"
        );
        assert_eq!(
            ReportError::FileNotFound("log.csv".into()).to_string(),
            "file not found or inaccessible: log.csv"
        );
        assert_eq!(
            ReportError::TooManyRows(2_000_000).to_string(),
            "too many records for one worksheet: 2000000"
        );
    }
}
