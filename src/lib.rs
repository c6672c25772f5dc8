//! # GEWEB SQL Log Report
//!
//! 将 GEWEB 应用的 SQL 日志转换为可读的 Excel 报表。
//!
//! ## 功能特性
//!
//! - **条目切分**: 按起始行标记将多行日志组合成条目
//! - **命令识别**: 识别 SELECT / UPDATE / DELETE / INSERT
//! - **用户说明**: 通过有序规则表为每条记录附加说明
//! - **宽松读取**: 非法的 UTF-8 字节被直接丢弃
//!
//! ## 快速开始
//!
//! ```rust
//! use geweb_sqllog_report::{CommandType, ExplanationRules, convert_text};
//!
//! let log = r#"a1b2c3d4-0000-0000-0000-000000000000|123456:app|2024-05-10 10:00:00|SELECT *
//!   FROM sch_geweb.turma_disciplina WHERE id = 1"#;
//!
//! let (records, skipped) = convert_text(log, &ExplanationRules::geweb_default());
//! assert_eq!(skipped, 0);
//! assert_eq!(records[0].tipo_comando, CommandType::Select);
//! ```
//!
//! ### 写出报表
//!
//! ```rust,no_run
//! use geweb_sqllog_report::{ReportConfig, run};
//!
//! let summary = run(&ReportConfig::new("log_bruno.csv", "relatorio.xlsx"))?;
//! println!("{} 条记录", summary.records);
//! # Ok::<(), geweb_sqllog_report::ReportError>(())
//! ```
//!
//! ## 日志格式
//!
//! 每个条目以起始行开始，之后可以跟任意多个继续行：
//!
//! ```text
//! a1b2c3d4-0000-0000-0000-000000000000|123456:app|2024-05-10 10:00:00|SELECT *
//!   FROM sch_geweb.turma_disciplina
//! ```
//!
//! 第三个 `|` 字段为时间，第四个字段（包括继续行）为 SQL。

pub mod classifier;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod report_config;
pub mod sheet;
pub mod tools;

pub use classifier::{Classifier, ExplanationRule, ExplanationRules, detect_command_type, split_fields};
pub use error::ReportError;
pub use parser::{
    LogEntry,
    Segmenter,
    iter_entries_from_file,
    parse_entries_from_string,
    read_log_lines,
    read_log_text,
    segment_lines,
};
pub use pipeline::{ConversionSummary, convert_text, run};
pub use record::{CommandType, Record};
pub use report_config::ReportConfig;
pub use sheet::{render_records, write_records};
