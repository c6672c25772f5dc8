use std::fmt;

/// SQL 命令类型
///
/// 无法识别出 SELECT/UPDATE/DELETE/INSERT 时为 `Desconhecido`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CommandType {
    Select,
    Update,
    Delete,
    Insert,
    #[default]
    Desconhecido,
}

impl CommandType {
    /// 报表中使用的标签
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Select => "SELECT",
            CommandType::Update => "UPDATE",
            CommandType::Delete => "DELETE",
            CommandType::Insert => "INSERT",
            CommandType::Desconhecido => "DESCONHECIDO",
        }
    }

    /// 由命令关键字得到类型（不区分大小写）
    ///
    /// 使用完整的 Unicode 大写转换，`ſelect` 也会得到 `Select`。
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_uppercase().as_str() {
            "SELECT" => CommandType::Select,
            "UPDATE" => CommandType::Update,
            "DELETE" => CommandType::Delete,
            "INSERT" => CommandType::Insert,
            _ => CommandType::Desconhecido,
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 报表中的一行
///
/// 由一个 LogEntry 确定性地推导而来，创建后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// 时间（第三个 `|` 分隔字段，去除首尾空白）
    pub horario: String,

    /// SQL 命令类型
    pub tipo_comando: CommandType,

    /// 面向用户的说明
    pub explicacao_usuario: String,
}

impl Record {
    /// 按报表列顺序返回各单元格文本
    pub fn cells(&self) -> [&str; 3] {
        [
            self.horario.as_str(),
            self.tipo_comando.as_str(),
            self.explicacao_usuario.as_str(),
        ]
    }
}
