//! # 元素性质表加载器
//!
//! 解析含十二个固定列的元素性质表。列名匹配对大小写和多余空白
//! 宽容；缺少任何必需列立即报 `MissingColumn`。仅用于展示的列
//! 允许空单元格（读作 NaN），非空但无法解析的数值一律报错。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `parsers/table.rs` 读取、`models/element.rs` 构造

use crate::error::{HeascreenError, Result};
use crate::models::{ElementRecord, PropertyTable};
use crate::parsers::table;
use regex::Regex;
use std::path::Path;

/// 必需列，顺序与 `ElementRecord` 字段一致
const REQUIRED_COLUMNS: [&str; 12] = [
    "Atomic Number",
    "Element",
    "Atomic Weight",
    "Density",
    "Atomic Radius",
    "Melting Point",
    "Lattice Constant",
    "Vickers Hardness",
    "Young's Modulus",
    "Thermal Neutron Absorption Cross-section",
    "Valence Electron Concentration",
    "Pauling Electronegativity",
];

/// 从文件加载元素性质表
pub fn load(path: &Path) -> Result<PropertyTable> {
    let rows = table::read_table(path)?;
    parse_rows(&rows, &path.display().to_string())
}

/// 从行数据解析元素性质表
pub fn parse_rows(rows: &[Vec<String>], source: &str) -> Result<PropertyTable> {
    let (header_idx, header) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
        .ok_or_else(|| HeascreenError::DataLoad {
            path: source.to_string(),
            reason: "table is empty".to_string(),
        })?;

    let normalized: Vec<String> = header.iter().map(|cell| normalize(cell)).collect();

    // 解析每个必需列的位置
    let mut column_index = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
        let want = normalize(column);
        column_index[slot] = normalized
            .iter()
            .position(|cell| *cell == want)
            .ok_or_else(|| HeascreenError::MissingColumn {
                column: column.to_string(),
                path: source.to_string(),
            })?;
    }

    let mut property_table = PropertyTable::new();

    for (row_no, row) in rows.iter().enumerate().skip(header_idx + 1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let cell = |slot: usize| row.get(column_index[slot]).map_or("", |s| s.as_str());

        let key_text = cell(0);
        let key = table::parse_key(key_text).map_err(|_| HeascreenError::DataLoad {
            path: source.to_string(),
            reason: format!("row {}: invalid element key '{}'", row_no + 1, key_text.trim()),
        })?;

        property_table.insert(ElementRecord {
            atomic_number: key,
            symbol: cell(1).trim().to_string(),
            atomic_weight: numeric(cell(2), REQUIRED_COLUMNS[2], row_no, source)?,
            density: numeric(cell(3), REQUIRED_COLUMNS[3], row_no, source)?,
            atomic_radius: numeric(cell(4), REQUIRED_COLUMNS[4], row_no, source)?,
            melting_point: numeric(cell(5), REQUIRED_COLUMNS[5], row_no, source)?,
            lattice_constant: numeric(cell(6), REQUIRED_COLUMNS[6], row_no, source)?,
            vickers_hardness: numeric(cell(7), REQUIRED_COLUMNS[7], row_no, source)?,
            youngs_modulus: numeric(cell(8), REQUIRED_COLUMNS[8], row_no, source)?,
            neutron_cross_section: numeric(cell(9), REQUIRED_COLUMNS[9], row_no, source)?,
            valence_electrons: numeric(cell(10), REQUIRED_COLUMNS[10], row_no, source)?,
            electronegativity: numeric(cell(11), REQUIRED_COLUMNS[11], row_no, source)?,
        });
    }

    if property_table.is_empty() {
        return Err(HeascreenError::DataLoad {
            path: source.to_string(),
            reason: "no element rows found".to_string(),
        });
    }

    Ok(property_table)
}

/// 列名归一化：去首尾空白、压缩内部空白、小写
fn normalize(text: &str) -> String {
    let collapsed = Regex::new(r"\s+").unwrap().replace_all(text.trim(), " ");
    collapsed.to_lowercase()
}

/// 数值单元格：空白读作 NaN，非空但无法解析报错
fn numeric(cell: &str, column: &str, row_no: usize, source: &str) -> Result<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(f64::NAN);
    }
    table::parse_cell_f64(trimmed).ok_or_else(|| HeascreenError::DataLoad {
        path: source.to_string(),
        reason: format!(
            "row {}: cannot parse '{}' as a number for column '{}'",
            row_no + 1,
            trimmed,
            column
        ),
    })
}
