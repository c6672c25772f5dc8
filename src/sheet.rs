//! Excel 报表写入模块
//!
//! 将 Record 集合写成单个工作表：第一行为表头，之后每个 Record 一行，没有索引列。

use crate::error::ReportError;
use crate::record::Record;
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};
use std::path::Path;
use tracing::{debug, warn};

/// 表头（列顺序固定）
pub const COLUMNS: [&str; 3] = ["horario", "tipo_comando", "explicacao_usuario"];

/// 工作表名称
pub const SHEET_NAME: &str = "Sheet1";

/// 单个工作表最多可容纳的数据行数（总行数减去表头）
pub const MAX_DATA_ROWS: usize = 1_048_575;

/// 单个单元格最多可容纳的字符数
pub const MAX_CELL_CHARS: usize = 32_767;

/// 将文本截断到单元格的字符上限（按字符边界）
pub fn fit_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// 构建完整的工作簿
fn build_workbook(records: &[Record]) -> Result<Workbook, ReportError> {
    if records.len() > MAX_DATA_ROWS {
        return Err(ReportError::TooManyRows(records.len()));
    }

    let mut workbook = Workbook::new();

    // 固定创建时间，保证相同输入得到逐字节相同的文件
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    write_rows(worksheet, records)?;

    Ok(workbook)
}

fn write_rows(worksheet: &mut Worksheet, records: &[Record]) -> Result<(), ReportError> {
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, name) in (0u16..).zip(COLUMNS) {
        worksheet.write_string_with_format(0, col, name, &header_format)?;
    }

    for (row, record) in (1u32..).zip(records) {
        for (col, cell) in (0u16..).zip(record.cells()) {
            let fitted = fit_cell(cell);
            if fitted.len() != cell.len() {
                warn!(
                    row,
                    column = COLUMNS[usize::from(col)],
                    "cell truncated to {} characters",
                    MAX_CELL_CHARS
                );
            }
            worksheet.write_string(row, col, fitted)?;
        }
    }

    Ok(())
}

/// 将 Record 集合渲染为 xlsx 文件内容
pub fn render_records(records: &[Record]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = build_workbook(records)?;
    Ok(workbook.save_to_buffer()?)
}

/// 将 Record 集合写入 xlsx 文件
///
/// 已存在的文件会被覆盖。
///
/// # 返回
///
/// * `Ok(())` - 写入成功
/// * `Err(ReportError)` - 行数超限或文件无法写入
pub fn write_records<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<(), ReportError> {
    let path_ref = path.as_ref();
    let mut workbook = build_workbook(records)?;
    workbook
        .save(path_ref)
        .map_err(|e| ReportError::SheetWrite(format!("{}: {}", path_ref.display(), e)))?;

    debug!(rows = records.len(), "wrote {}", path_ref.display());
    Ok(())
}
