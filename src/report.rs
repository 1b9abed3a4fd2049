//! 收藏估价报表
//!
//! 纯函数：对（可能只有部分定价的）套装序列生成对齐的
//! 管道分隔表格，列宽固定，缺失值用 "?" 占位。

use crate::models::LegoSet;

/// 每列的固定宽度
const COLUMN_WIDTH: usize = 24;

/// 表头列名
const COLUMN_TITLES: [&str; 6] = [
    "Number",
    "Name",
    "Quantity",
    "RRP (EUR)",
    "Price per set (EUR)",
    "Profit per set (EUR)",
];

/// 生成收藏估价报表
///
/// 单套盈亏保留两位小数。总价行只在每个套装都拿到了
/// 市场价时输出：遇到第一个未定价的套装就停止求和并
/// 整行省略（既定策略：部分总价不输出）。
pub fn render_report(sets: &[LegoSet]) -> String {
    if sets.is_empty() {
        return "Empty Lego set collection".to_string();
    }

    let mut lines = Vec::with_capacity(sets.len() + 3);

    let header = format_line(&COLUMN_TITLES.map(str::to_string));
    let rule = "-".repeat(header.len());
    lines.push(header);
    lines.push(rule);

    for set in sets {
        lines.push(format_line(&[
            set.number.clone(),
            set.name.clone(),
            set.quantity.to_string(),
            optional_cell(set.rrp),
            optional_cell(set.price),
            profit_cell(set),
        ]));
    }

    if let Some(total) = total_value(sets) {
        lines.push(format!("Total price of the collection: {:.2} EUR", total));
    }

    lines.join("\n")
}

/// 把一组单元格按固定宽度左对齐并用 | 连接
fn format_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("{:<width$}", cell, width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join("|")
}

fn optional_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "?".to_string(),
    }
}

fn profit_cell(set: &LegoSet) -> String {
    match set.profit_per_set() {
        Some(profit) => format!("{:.2}", profit),
        None => "?".to_string(),
    }
}

/// 收藏总价 = Σ(市场均价 × 数量)
///
/// 遇到第一个未定价的套装立即返回 None。
fn total_value(sets: &[LegoSet]) -> Option<f64> {
    let mut total = 0.0;
    for set in sets {
        total += set.price? * f64::from(set.quantity);
    }
    Some(total)
}
