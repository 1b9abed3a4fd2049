//! 从 Brickset 导出的 CSV 文件加载收藏
//!
//! 任何一行解析失败都是致命错误：整个文件必须在抓取
//! 开始之前完整加载成功。

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{AppResult, MalformedInputError};
use crate::models::LegoSet;

/// 收藏文件必须包含的列（列名精确匹配）
const REQUIRED_COLUMNS: [&str; 4] = ["Number", "Set name", "Qty owned", "RRP (EUR)"];

/// CSV 的原始一行：全部按字符串读入，数值校验单独做，
/// 这样能报出行号和字段级别的错误
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Number")]
    number: String,
    #[serde(rename = "Set name")]
    name: String,
    #[serde(rename = "Qty owned")]
    qty_owned: String,
    #[serde(rename = "RRP (EUR)")]
    rrp: String,
}

/// 加载收藏文件并转换为 LegoSet 序列（保持文件顺序）
pub fn load_collection(path: &Path) -> AppResult<Vec<LegoSet>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| MalformedInputError::Unreadable {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    check_required_columns(&mut reader, path)?;

    let mut collection = Vec::new();
    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        // 数据行从表头之后开始，行号从 2 起算
        let row_number = index + 2;
        let row = result.map_err(|e| MalformedInputError::Row {
            row: row_number,
            source: Box::new(e),
        })?;
        collection.push(parse_row(row, row_number)?);
    }

    info!("✓ 已从 {} 加载 {} 个套装", path.display(), collection.len());
    Ok(collection)
}

/// 校验表头包含全部必需的列
fn check_required_columns(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
) -> Result<(), MalformedInputError> {
    let headers = reader.headers().map_err(|e| MalformedInputError::Unreadable {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(MalformedInputError::MissingColumn { column });
        }
    }
    Ok(())
}

/// 把原始行校验并转换为 LegoSet
fn parse_row(row: CsvRow, row_number: usize) -> Result<LegoSet, MalformedInputError> {
    let quantity =
        row.qty_owned
            .trim()
            .parse::<u32>()
            .map_err(|_| MalformedInputError::Field {
                row: row_number,
                field: "Qty owned",
                value: row.qty_owned.clone(),
                expected: "非负整数",
            })?;

    // 空单元格表示零售价未知，不是 0
    let rrp = match row.rrp.trim() {
        "" => None,
        raw => Some(raw.parse::<f64>().map_err(|_| MalformedInputError::Field {
            row: row_number,
            field: "RRP (EUR)",
            value: raw.to_string(),
            expected: "小数",
        })?),
    };

    Ok(LegoSet {
        number: row.number,
        name: row.name,
        quantity,
        rrp,
        price: None,
    })
}
