//! Segmenter - 将按行的输入组合成 LogEntry
//!
//! 提供了一个惰性的迭代器适配器，可以包装任何产生行的迭代器。

use crate::parser::entry::LogEntry;
use crate::tools::is_entry_start_line;
use std::iter::FusedIterator;
use std::mem;

/// 将行序列切分为 LogEntry 的迭代器
///
/// 遇到起始行且缓冲区非空时，先把缓冲区作为一个完整条目输出，
/// 再把起始行放入新的缓冲区；其余的行直接追加到缓冲区。
/// 输入结束后，剩余的缓冲区作为最后一个条目输出。
///
/// 第一个起始行之前的行不会被丢弃，而是组成一个前导条目。
///
/// # 类型参数
///
/// * `I` - 产生行的迭代器，行类型需要能转换为 `String`
#[derive(Debug, Clone)]
pub struct Segmenter<I> {
    lines: I,
    buffer: Vec<String>,
    finished: bool,
}

impl<I> Segmenter<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            buffer: Vec::new(),
            finished: false,
        }
    }
}

impl<I> Iterator for Segmenter<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    type Item = LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            let line: String = line.into();
            if is_entry_start_line(&line) && !self.buffer.is_empty() {
                // 遇到下一个起始行，结束当前条目
                let entry = LogEntry::from_lines(mem::take(&mut self.buffer));
                self.buffer.push(line);
                return Some(entry);
            }
            self.buffer.push(line);
        }

        self.finished = true;
        if self.buffer.is_empty() {
            None
        } else {
            Some(LogEntry::from_lines(mem::take(&mut self.buffer)))
        }
    }
}

impl<I> FusedIterator for Segmenter<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
}

/// 将任意行序列包装为 [`Segmenter`]
///
/// 对同一个行来源再次调用即可重新切分。
///
/// # 示例
///
/// ```
/// use geweb_sqllog_report::segment_lines;
///
/// let lines = vec![
///     "a1b2c3d4-0000-0000-0000-000000000000|123456:app|10:00|SELECT *",
///     "FROM t",
/// ];
/// let entries: Vec<_> = segment_lines(lines).collect();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].line_count(), 2);
/// ```
pub fn segment_lines<L>(lines: L) -> Segmenter<L::IntoIter>
where
    L: IntoIterator,
    L::Item: Into<String>,
{
    Segmenter::new(lines.into_iter())
}
