//! # 元素选择与组成录入
//!
//! 解析用户给出的元素键列表（选择阶段对表中不存在的键只警告
//! 不拒绝，留给首次实际使用时显式失败），并以交互方式收集
//! 百分比组成：单值错误就地重问，总和不为 100 时整批清空重来。
//!
//! ## 依赖关系
//! - 被 `commands/screen.rs`、`commands/lammps.rs` 使用
//! - 使用 `models/composition.rs`、`utils/prompt.rs`、`parsers/table.rs`

use crate::error::{HeascreenError, Result};
use crate::models::composition::{Composition, SUM_TOLERANCE};
use crate::parsers::table::parse_key;
use crate::utils::{output, prompt};
use std::io::{BufRead, Write};

/// 拆分逗号分隔的键列表（忽略空项）
pub fn split_key_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// 解析请求的元素键
///
/// 不在 `available` 中的键警告后保留，重复键警告后丢弃。
/// 无法解析的键立即失败。
pub fn select_keys(available: &[u32], requested: &[String]) -> Result<Vec<u32>> {
    let mut selected = Vec::with_capacity(requested.len());

    for text in requested {
        let key = parse_key(text)?;
        if selected.contains(&key) {
            output::print_warning(&format!("Duplicate element key {} ignored", key));
            continue;
        }
        if !available.contains(&key) {
            output::print_warning(&format!(
                "Element key {} is not in the property table!",
                key
            ));
        }
        selected.push(key);
    }

    if selected.is_empty() {
        return Err(HeascreenError::InvalidArgument(
            "no element keys selected".to_string(),
        ));
    }
    Ok(selected)
}

/// 解析逗号分隔的百分比列表（非交互路径）
pub fn parse_percent_list(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|item| {
            let trimmed = item.trim();
            trimmed.parse::<f64>().map_err(|_| {
                HeascreenError::Composition(format!("cannot parse percentage '{}'", trimmed))
            })
        })
        .collect()
}

/// 逐键收集百分比组成
///
/// 单键输入非法就地重问；一轮收齐后总和偏离 100 超过容差时
/// 整批清空重新收集。
pub fn collect_composition<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    keys: &[u32],
) -> Result<Composition> {
    loop {
        let mut entries = Vec::with_capacity(keys.len());

        for &key in keys {
            let percent = prompt::prompt_f64_in_range(
                input,
                out,
                &format!("Percentage for element {}: ", key),
                0.0,
                100.0,
            )?;
            entries.push((key, percent));
        }

        let total: f64 = entries.iter().map(|&(_, p)| p).sum();
        if (total - 100.0).abs() < SUM_TOLERANCE {
            return Composition::new(entries);
        }

        writeln!(
            out,
            "Total is {}. Please re-enter all values (must sum to 100).",
            total
        )
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_key_list() {
        assert_eq!(split_key_list("24, 27 ,40"), vec!["24", "27", "40"]);
        assert_eq!(split_key_list(" 24 ,, "), vec!["24"]);
        assert!(split_key_list("").is_empty());
    }

    #[test]
    fn test_select_keys_keeps_unknown_key() {
        // 99 不在表中：警告但保留，失败推迟到首次使用
        let selected =
            select_keys(&[24, 27], &["24".to_string(), "99".to_string()]).unwrap();
        assert_eq!(selected, vec![24, 99]);
    }

    #[test]
    fn test_select_keys_drops_duplicates() {
        let selected =
            select_keys(&[24, 27], &["24".to_string(), "24".to_string(), "27".to_string()])
                .unwrap();
        assert_eq!(selected, vec![24, 27]);
    }

    #[test]
    fn test_select_keys_unparseable_fails() {
        let err = select_keys(&[24], &["24Cr".to_string()]).unwrap_err();
        assert!(matches!(err, HeascreenError::InvalidKey(_)));
    }

    #[test]
    fn test_parse_percent_list() {
        let percents = parse_percent_list("30, 30, 40").unwrap();
        assert_eq!(percents, vec![30.0, 30.0, 40.0]);
        assert!(parse_percent_list("30, x").is_err());
    }

    #[test]
    fn test_collect_composition_happy_path() {
        let mut input = Cursor::new("50\n50\n");
        let mut out = Vec::new();

        let composition =
            collect_composition(&mut input, &mut out, &[24, 27]).unwrap();
        assert_eq!(composition.percent(24), Some(50.0));
        assert_eq!(composition.percent(27), Some(50.0));
    }

    #[test]
    fn test_collect_composition_sum_within_tolerance() {
        let mut input = Cursor::new("49.9999999\n50\n");
        let mut out = Vec::new();

        let composition =
            collect_composition(&mut input, &mut out, &[24, 27]).unwrap();
        assert_eq!(composition.len(), 2);
    }

    #[test]
    fn test_collect_composition_restarts_on_bad_sum() {
        // 第一轮 45 + 50 = 95，整批重来
        let mut input = Cursor::new("45\n50\n60\n40\n");
        let mut out = Vec::new();

        let composition =
            collect_composition(&mut input, &mut out, &[24, 27]).unwrap();
        assert_eq!(composition.percent(24), Some(60.0));
        assert_eq!(composition.percent(27), Some(40.0));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Total is 95"));
    }

    #[test]
    fn test_collect_composition_reprompts_on_garbage() {
        let mut input = Cursor::new("abc\n150\n50\n50\n");
        let mut out = Vec::new();

        let composition =
            collect_composition(&mut input, &mut out, &[24, 27]).unwrap();
        assert_eq!(composition.percent(24), Some(50.0));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Please enter a valid number."));
        assert!(transcript.contains("between 0 and 100"));
    }

    #[test]
    fn test_collect_composition_input_closed() {
        let mut input = Cursor::new("50\n");
        let mut out = Vec::new();

        let err = collect_composition(&mut input, &mut out, &[24, 27]).unwrap_err();
        assert!(matches!(err, HeascreenError::InputClosed));
    }
}
