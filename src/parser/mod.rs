//! Parser 模块 - 切分 GEWEB 应用日志
//!
//! 此模块提供了完整的条目切分功能,包括:
//! - LogEntry 结构
//! - 惰性的行到条目切分
//! - 便捷 API 函数

mod api;
pub mod entry;
pub mod segmenter;

pub use api::{iter_entries_from_file, parse_entries_from_string, read_log_lines, read_log_text};
pub use entry::LogEntry;
pub use segmenter::{Segmenter, segment_lines};

#[cfg(test)]
mod tests;
