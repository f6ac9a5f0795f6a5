//! # Miedema 混合焓矩阵加载器
//!
//! 解析方阵形式的二元混合焓表：首行是列键，每行首格是行键，
//! 单元格是 kJ/mol 的相互作用参数。对角线忽略；空白或 NaN
//! 单元格按缺项处理（查询时贡献 0）。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `parsers/table.rs` 读取、`models/enthalpy.rs` 构造

use crate::error::{HeascreenError, Result};
use crate::models::EnthalpyMatrix;
use crate::parsers::table;
use std::path::Path;

/// 从文件加载混合焓矩阵
pub fn load(path: &Path) -> Result<EnthalpyMatrix> {
    let rows = table::read_table(path)?;
    parse_rows(&rows, &path.display().to_string())
}

/// 从行数据解析混合焓矩阵
pub fn parse_rows(rows: &[Vec<String>], source: &str) -> Result<EnthalpyMatrix> {
    let (header_idx, header) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
        .ok_or_else(|| HeascreenError::DataLoad {
            path: source.to_string(),
            reason: "matrix is empty".to_string(),
        })?;

    // 列键从第二格开始；空白标签的列跳过
    let mut column_keys: Vec<Option<u32>> = Vec::new();
    for cell in header.iter().skip(1) {
        let label = cell.trim();
        if label.is_empty() {
            column_keys.push(None);
            continue;
        }
        let key = table::parse_key(label).map_err(|_| HeascreenError::DataLoad {
            path: source.to_string(),
            reason: format!("invalid column label '{}'", label),
        })?;
        column_keys.push(Some(key));
    }

    let mut matrix = EnthalpyMatrix::new();

    for (row_no, row) in rows.iter().enumerate().skip(header_idx + 1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let label = row.first().map_or("", |s| s.as_str()).trim();
        if label.is_empty() {
            continue;
        }
        let row_key = table::parse_key(label).map_err(|_| HeascreenError::DataLoad {
            path: source.to_string(),
            reason: format!("row {}: invalid row label '{}'", row_no + 1, label),
        })?;

        for (col_no, cell) in row.iter().skip(1).enumerate() {
            let Some(col_key) = column_keys.get(col_no).copied().flatten() else {
                continue;
            };
            // 对角线无定义
            if col_key == row_key {
                continue;
            }

            let trimmed = cell.trim();
            if trimmed.is_empty() || trimmed == "-" {
                continue;
            }
            let value =
                table::parse_cell_f64(trimmed).ok_or_else(|| HeascreenError::DataLoad {
                    path: source.to_string(),
                    reason: format!(
                        "row {}: cannot parse '{}' as kJ/mol for pair {}-{}",
                        row_no + 1,
                        trimmed,
                        row_key,
                        col_key
                    ),
                })?;
            // NaN 在 insert 中丢弃
            matrix.insert(row_key, col_key, value);
        }
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        text.trim()
            .lines()
            .map(|line| line.split(',').map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_square_matrix() {
        let content = ",24,27,40\n24,,-4,-12\n27,-4,,-41\n40,-12,-41,";
        let matrix = parse_rows(&rows(content), "test").unwrap();

        assert_eq!(matrix.lookup(24, 27), Some(-4.0));
        assert_eq!(matrix.lookup(40, 27), Some(-41.0));
        // 对角线与空单元格均缺失
        assert_eq!(matrix.lookup(24, 24), None);
    }

    #[test]
    fn test_asymmetric_matrix_tolerated() {
        // 只有上三角也能双向查询
        let content = ",24,27\n24,,-4\n27,,";
        let matrix = parse_rows(&rows(content), "test").unwrap();

        assert_eq!(matrix.lookup(24, 27), Some(-4.0));
        assert_eq!(matrix.lookup(27, 24), Some(-4.0));
    }

    #[test]
    fn test_nan_cell_treated_as_absent() {
        let content = ",24,27\n24,,NaN\n27,NaN,";
        let matrix = parse_rows(&rows(content), "test").unwrap();
        assert_eq!(matrix.lookup(24, 27), None);
    }

    #[test]
    fn test_garbage_cell_rejected() {
        let content = ",24,27\n24,,abc\n27,,";
        let err = parse_rows(&rows(content), "test").unwrap_err();
        assert!(matches!(err, HeascreenError::DataLoad { .. }));
    }

    #[test]
    fn test_invalid_label_rejected() {
        let content = ",24,Cr\n24,,-4";
        let err = parse_rows(&rows(content), "test").unwrap_err();
        assert!(matches!(err, HeascreenError::DataLoad { .. }));
    }

    #[test]
    fn test_hex_labels_accepted() {
        // "1A" 按十六进制解析为 26
        let content = ",1A,27\n1A,,-7\n27,-7,";
        let matrix = parse_rows(&rows(content), "test").unwrap();
        assert_eq!(matrix.lookup(26, 27), Some(-7.0));
    }
}
