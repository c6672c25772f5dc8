//! 报表配置模块
//!
//! 输入路径、输出路径和说明规则表都作为显式的配置值传入转换流程，
//! 而不是写死在流程内部。

use crate::classifier::ExplanationRules;
use std::path::{Path, PathBuf};

/// 默认的输入日志文件
pub const DEFAULT_INPUT_PATH: &str = "log_bruno.csv";

/// 默认的输出 Excel 文件
pub const DEFAULT_OUTPUT_PATH: &str = "log_visual_simples_completo.xlsx";

/// 报表配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 输入日志文件路径
    pub input_path: PathBuf,

    /// 输出 Excel 文件路径
    pub output_path: PathBuf,

    /// 有序的说明规则表
    pub rules: ExplanationRules,
}

impl ReportConfig {
    /// 使用默认规则表创建配置
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            rules: ExplanationRules::geweb_default(),
        }
    }

    /// GEWEB 日志的默认配置（固定路径 + 默认规则表）
    pub fn geweb_default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }

    /// 替换说明规则表
    pub fn with_rules(mut self, rules: ExplanationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::geweb_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::EXPLANATION_FALLBACK;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.input_path(), Path::new(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path(), Path::new(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.rules.rules().len(), 6);
        assert_eq!(config.rules.fallback(), EXPLANATION_FALLBACK);
    }

    #[test]
    fn test_default_rule_order() {
        let config = ReportConfig::default();
        let patterns: Vec<_> = config.rules.rules().iter().map(|r| r.pattern()).collect();
        assert_eq!(
            patterns,
            vec![
                "from sch_geweb.movimentacao_funcionario",
                "from sch_geweb.turma_disciplina",
                "update",
                "delete",
                "insert",
                "select",
            ]
        );
    }

    #[test]
    fn test_with_rules() {
        let config = ReportConfig::new("in.log", "out.xlsx")
            .with_rules(ExplanationRules::new("nada").with_rule("x", "y"));
        assert_eq!(config.rules.rules().len(), 1);
        assert_eq!(config.rules.fallback(), "nada");
    }
}
