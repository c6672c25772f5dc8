//! 转换流程
//!
//! 读取日志 -> 切分条目 -> 分类 -> 收集 Record -> 写出 Excel。

use crate::classifier::{Classifier, ExplanationRules};
use crate::error::ReportError;
use crate::parser::{read_log_text, segment_lines};
use crate::record::Record;
use crate::report_config::ReportConfig;
use crate::sheet::write_records;
use crate::tools::log_lines;
use std::path::PathBuf;
use tracing::{debug, info};

/// 一次转换的结果摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// 输出文件路径
    pub output_path: PathBuf,
    /// 切分得到的条目数
    pub entries: usize,
    /// 写入的记录数
    pub records: usize,
    /// 因字段不足而跳过的条目数
    pub skipped: usize,
}

/// 将日志文本转换为 Record 列表（纯函数，不访问文件系统）
///
/// 字段不足的条目会被静默跳过，其余条目保持原有顺序。
///
/// # 示例
///
/// ```
/// use geweb_sqllog_report::{CommandType, ExplanationRules, convert_text};
///
/// let log = "a1b2c3d4-0000-0000-0000-000000000000|123456:app|2024-05-10 10:00:00|DELETE FROM foo\n";
/// let (records, skipped) = convert_text(log, &ExplanationRules::geweb_default());
///
/// assert_eq!(skipped, 0);
/// assert_eq!(records[0].horario, "2024-05-10 10:00:00");
/// assert_eq!(records[0].tipo_comando, CommandType::Delete);
/// ```
pub fn convert_text(text: &str, rules: &ExplanationRules) -> (Vec<Record>, usize) {
    let classifier = Classifier::new(rules.clone());
    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, entry) in segment_lines(log_lines(text)).enumerate() {
        match classifier.classify(&entry) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                debug!(entry = index, lines = entry.line_count(), "skipping entry: {}", err);
            }
        }
    }

    (records, skipped)
}

/// 执行完整的转换流程
///
/// 任何读写失败都会直接返回错误，不做重试。
pub fn run(config: &ReportConfig) -> Result<ConversionSummary, ReportError> {
    info!("reading {}", config.input_path().display());
    let text = read_log_text(config.input_path())?;

    let (records, skipped) = convert_text(&text, &config.rules);
    let entries = records.len() + skipped;
    info!(entries, records = records.len(), skipped, "classified log entries");

    write_records(config.output_path(), &records)?;
    info!("wrote {}", config.output_path().display());

    Ok(ConversionSummary {
        output_path: config.output_path().to_path_buf(),
        entries,
        records: records.len(),
        skipped,
    })
}
