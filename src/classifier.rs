//! 条目分类模块
//!
//! 将一个 LogEntry 拆分为 `|` 分隔的字段，识别 SQL 命令类型，
//! 并按有序规则表为其附加面向用户的说明。

use crate::error::ReportError;
use crate::parser::LogEntry;
use crate::record::{CommandType, Record};
use memchr::memmem::Finder;
use once_cell::sync::Lazy;
use regex::Regex;

/// 条目所需的字段数量
pub const REQUIRED_FIELDS: usize = 4;

const FIELD_SEPARATOR: char = '|';

// 命令关键字，按单词边界匹配，不区分大小写
static COMMAND_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(SELECT|UPDATE|DELETE|INSERT)\b").expect("command keyword pattern is valid")
});

pub const EXPLANATION_MOVIMENTACAO_FUNCIONARIO: &str = "Consulta dados de movimentação de funcionários, como unidade, cargo, carga horária e situação funcional, conforme os filtros aplicados.";
pub const EXPLANATION_TURMA_DISCIPLINA: &str = "Busca informações das disciplinas de uma turma, incluindo carga horária, professores, turmas e etapas de ensino.";
pub const EXPLANATION_UPDATE: &str = "Atualiza informações no sistema conforme os campos informados.";
pub const EXPLANATION_DELETE: &str = "Remove registros do sistema conforme os critérios informados.";
pub const EXPLANATION_INSERT: &str = "Adiciona novos registros ao sistema conforme os campos preenchidos.";
pub const EXPLANATION_SELECT: &str = "Consulta dados no banco de dados, retornando informações específicas de acordo com o filtro.";
pub const EXPLANATION_FALLBACK: &str = "Comando SQL identificado. Para mais detalhes, consulte o setor técnico.";

/// GEWEB 默认规则表（顺序即优先级）
pub static GEWEB_RULES: Lazy<ExplanationRules> = Lazy::new(|| {
    ExplanationRules::new(EXPLANATION_FALLBACK)
        .with_rule(
            "from sch_geweb.movimentacao_funcionario",
            EXPLANATION_MOVIMENTACAO_FUNCIONARIO,
        )
        .with_rule("from sch_geweb.turma_disciplina", EXPLANATION_TURMA_DISCIPLINA)
        .with_rule("update", EXPLANATION_UPDATE)
        .with_rule("delete", EXPLANATION_DELETE)
        .with_rule("insert", EXPLANATION_INSERT)
        .with_rule("select", EXPLANATION_SELECT)
});

/// 条目的四个组成部分（原始字符串切片）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryFields<'a> {
    /// 会话标识
    pub session: &'a str,
    /// 序号及其后的内容
    pub sequence: &'a str,
    /// 时间（未去除空白）
    pub horario: &'a str,
    /// SQL 部分，包含其后所有的 `|` 和继续行
    pub sql: &'a str,
}

/// 按 `|` 将条目文本拆分为最多 4 个字段
///
/// 字段不足 4 个时返回 [`ReportError::InsufficientFields`]。
pub fn split_fields(text: &str) -> Result<EntryFields<'_>, ReportError> {
    let parts: Vec<&str> = text.splitn(REQUIRED_FIELDS, FIELD_SEPARATOR).collect();
    match parts[..] {
        [session, sequence, horario, sql] => Ok(EntryFields {
            session,
            sequence,
            horario,
            sql,
        }),
        _ => Err(ReportError::InsufficientFields(parts.len())),
    }
}

/// 识别 SQL 文本中最先出现的命令关键字
pub fn detect_command_type(sql: &str) -> CommandType {
    COMMAND_KEYWORD
        .find(sql)
        .map(|m| CommandType::from_keyword(m.as_str()))
        .unwrap_or(CommandType::Desconhecido)
}

/// 一条说明规则：SQL 文本（小写后）包含 `pattern` 时使用 `explanation`
#[derive(Debug, Clone)]
pub struct ExplanationRule {
    pattern: String,
    explanation: String,
    finder: Finder<'static>,
}

impl ExplanationRule {
    pub fn new(pattern: impl Into<String>, explanation: impl Into<String>) -> Self {
        let pattern = pattern.into().to_lowercase();
        let finder = Finder::new(pattern.as_bytes()).into_owned();
        Self {
            pattern,
            explanation: explanation.into(),
            finder,
        }
    }

    /// 小写后的匹配子串
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[inline]
    fn matches_lowercase(&self, haystack: &str) -> bool {
        self.finder.find(haystack.as_bytes()).is_some()
    }
}

/// 有序的说明规则表
///
/// 按顺序检查每条规则，第一条命中的规则生效；全部未命中时返回兜底说明。
#[derive(Debug, Clone)]
pub struct ExplanationRules {
    rules: Vec<ExplanationRule>,
    fallback: String,
}

impl ExplanationRules {
    /// 创建只有兜底说明的空规则表
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// 在末尾追加一条规则（优先级最低）
    pub fn with_rule(mut self, pattern: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.rules.push(ExplanationRule::new(pattern, explanation));
        self
    }

    /// GEWEB 默认规则表
    pub fn geweb_default() -> Self {
        GEWEB_RULES.clone()
    }

    pub fn rules(&self) -> &[ExplanationRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// 为一段 SQL 文本选择说明（不区分大小写）
    pub fn explain(&self, sql: &str) -> &str {
        let lowered = sql.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches_lowercase(&lowered))
            .map(ExplanationRule::explanation)
            .unwrap_or(self.fallback.as_str())
    }
}

impl Default for ExplanationRules {
    fn default() -> Self {
        Self::geweb_default()
    }
}

/// 条目分类器
///
/// 纯函数式：相同的输入总是得到相同的 Record。
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: ExplanationRules,
}

impl Classifier {
    pub fn new(rules: ExplanationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ExplanationRules {
        &self.rules
    }

    /// 将 LogEntry 分类为 Record
    ///
    /// # 返回
    ///
    /// * `Ok(Record)` - 分类成功
    /// * `Err(ReportError::InsufficientFields)` - 字段不足，该条目应被跳过
    pub fn classify(&self, entry: &LogEntry) -> Result<Record, ReportError> {
        self.classify_text(&entry.full_content())
    }

    /// 将条目的原始文本分类为 Record
    pub fn classify_text(&self, text: &str) -> Result<Record, ReportError> {
        let fields = split_fields(text)?;
        Ok(Record {
            horario: fields.horario.trim().to_string(),
            tipo_comando: detect_command_type(fields.sql),
            explicacao_usuario: self.rules.explain(fields.sql).to_string(),
        })
    }
}
