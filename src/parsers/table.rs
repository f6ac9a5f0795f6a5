//! # 通用表格读取
//!
//! 按扩展名分派：`.csv` 用 `csv` 读取，`.xlsx`/`.xlsm`/`.xls`/`.ods`
//! 用 `calamine` 读取，统一产出字符串单元格的行列表。
//! 另提供元素键解析（十进制优先，其次十六进制）。
//!
//! ## 依赖关系
//! - 被 `parsers/properties.rs`、`parsers/miedema.rs` 使用
//! - 使用 `csv`、`calamine` crate

use crate::error::{HeascreenError, Result};
use calamine::{open_workbook_auto, Reader};
use std::fs::File;
use std::path::Path;

/// 读取一个表格文件为字符串单元格的行
pub fn read_table(path: &Path) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(HeascreenError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => read_csv_table(path),
        "xlsx" | "xlsm" | "xls" | "ods" => read_workbook_table(path),
        other => Err(HeascreenError::DataLoad {
            path: path.display().to_string(),
            reason: format!("unsupported table format '.{}' (use .csv or .xlsx)", other),
        }),
    }
}

/// CSV 读取（无表头模式，列数允许不齐）
fn read_csv_table(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).map_err(|e| HeascreenError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

/// 工作簿读取（取第一个工作表）
fn read_workbook_table(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| HeascreenError::DataLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| HeascreenError::DataLoad {
            path: path.display().to_string(),
            reason: "workbook contains no worksheets".to_string(),
        })?
        .map_err(|e| HeascreenError::DataLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect())
}

/// 解析元素键：先按十进制，失败后按十六进制（可带 0x 前缀）
///
/// 两种进制都合法的键（如 "24"）按十进制解析。
pub fn parse_key(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(value);
    }

    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u32::from_str_radix(hex, 16).map_err(|_| HeascreenError::InvalidKey(trimmed.to_string()))
}

/// 单元格转 f64；空串或无法解析返回 None（"NaN" 解析为 NaN）
pub fn parse_cell_f64(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_decimal() {
        assert_eq!(parse_key("24").unwrap(), 24);
        assert_eq!(parse_key("  40 ").unwrap(), 40);
    }

    #[test]
    fn test_parse_key_hex_fallback() {
        // "1A" 十进制不合法，按十六进制为 26
        assert_eq!(parse_key("1A").unwrap(), 26);
        assert_eq!(parse_key("0x1A").unwrap(), 26);
    }

    #[test]
    fn test_parse_key_ambiguity_prefers_decimal() {
        // "24" 两种进制都合法，取十进制
        assert_eq!(parse_key("24").unwrap(), 24);
    }

    #[test]
    fn test_parse_key_invalid() {
        assert!(matches!(
            parse_key("24Cr").unwrap_err(),
            HeascreenError::InvalidKey(_)
        ));
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_parse_cell_f64() {
        assert_eq!(parse_cell_f64("2.88"), Some(2.88));
        assert_eq!(parse_cell_f64(" -4.5 "), Some(-4.5));
        assert_eq!(parse_cell_f64(""), None);
        assert_eq!(parse_cell_f64("abc"), None);
        assert!(parse_cell_f64("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_read_table_missing_file() {
        let err = read_table(Path::new("no_such_table.csv")).unwrap_err();
        assert!(matches!(err, HeascreenError::FileNotFound { .. }));
    }
}
