//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于读取日志文件并切分条目。

use crate::error::ReportError;
use crate::parser::entry::LogEntry;
use crate::parser::segmenter::{Segmenter, segment_lines};
use crate::tools::{decode_lossy, log_lines};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// 从字符串切分所有日志条目
///
/// # 示例
///
/// ```
/// use geweb_sqllog_report::parse_entries_from_string;
///
/// let log = "preamble\na1b2c3d4-0000-0000-0000-000000000000|123456:app|10:00|SELECT 1\n";
/// let entries = parse_entries_from_string(log);
///
/// // 前导行单独组成一个条目
/// assert_eq!(entries.len(), 2);
/// assert!(!entries[0].starts_with_marker());
/// ```
pub fn parse_entries_from_string(text: &str) -> Vec<LogEntry> {
    segment_lines(log_lines(text)).collect()
}

/// 读取整个日志文件为文本
///
/// 文件全部载入内存，非法的 UTF-8 字节序列会被丢弃。
///
/// # 返回
///
/// * `Ok(String)` - 解码后的文本
/// * `Err(ReportError)` - 文件不存在、无权限或读取失败
pub fn read_log_text<P: AsRef<Path>>(path: P) -> Result<String, ReportError> {
    let path_ref = path.as_ref();
    let bytes = fs::read(path_ref).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            ReportError::FileNotFound(format!("{}: {}", path_ref.display(), e))
        }
        _ => ReportError::IoError(format!("{}: {}", path_ref.display(), e)),
    })?;

    let text = decode_lossy(&bytes).into_owned();
    if text.len() != bytes.len() {
        debug!(
            dropped = bytes.len() - text.len(),
            "dropped undecodable bytes from {}",
            path_ref.display()
        );
    }
    Ok(text)
}

/// 读取日志文件并按行切分
pub fn read_log_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ReportError> {
    let text = read_log_text(path)?;
    Ok(log_lines(&text).map(str::to_owned).collect())
}

/// 从文件读取并返回 LogEntry 迭代器
///
/// # 示例
///
/// ```no_run
/// use geweb_sqllog_report::iter_entries_from_file;
///
/// for entry in iter_entries_from_file("log_bruno.csv")? {
///     println!("{} 行: {}", entry.line_count(), entry.first_line());
/// }
/// # Ok::<(), geweb_sqllog_report::ReportError>(())
/// ```
pub fn iter_entries_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Segmenter<std::vec::IntoIter<String>>, ReportError> {
    Ok(segment_lines(read_log_lines(path)?))
}
