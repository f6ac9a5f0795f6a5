//! # 交互式提示工具
//!
//! 阻塞式读取用户输入。对读写端做泛型化（`BufRead` / `Write`），
//! 使提示循环可以在测试中用内存缓冲驱动。
//!
//! ## 依赖关系
//! - 被 `alloy/selection.rs`、`commands/screen.rs` 使用
//! - 无外部模块依赖

use crate::error::{HeascreenError, Result};
use std::io::{BufRead, Write};

/// 输出提示并读取一行（去掉首尾空白）
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<String> {
    write!(out, "{}", message).ok();
    out.flush().ok();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err(HeascreenError::InputClosed),
        Ok(_) => Ok(line.trim().to_string()),
        Err(_) => Err(HeascreenError::InputClosed),
    }
}

/// 反复提示直到读到一个数
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<f64> {
    loop {
        let text = prompt_line(input, out, message)?;
        match text.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(out, "Please enter a valid number.").ok();
            }
        }
    }
}

/// 反复提示直到读到 [min, max] 内的数
pub fn prompt_f64_in_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    min: f64,
    max: f64,
) -> Result<f64> {
    loop {
        let value = prompt_f64(input, out, message)?;
        if value >= min && value <= max {
            return Ok(value);
        }
        writeln!(out, "Value must be between {} and {}.", min, max).ok();
    }
}

/// 读取 y/n 回答；y 或 yes（不区分大小写）为真，其余为假
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<bool> {
    let answer = prompt_line(input, out, message)?.to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_trims() {
        let mut input = Cursor::new("  hello  \n");
        let mut out = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut out, "> ").unwrap(), "hello");
    }

    #[test]
    fn test_prompt_line_eof() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = prompt_line(&mut input, &mut out, "> ").unwrap_err();
        assert!(matches!(err, HeascreenError::InputClosed));
    }

    #[test]
    fn test_prompt_f64_reprompts() {
        let mut input = Cursor::new("abc\n3.5\n");
        let mut out = Vec::new();

        let value = prompt_f64(&mut input, &mut out, "n: ").unwrap();
        assert!((value - 3.5).abs() < 1e-12);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Please enter a valid number."));
    }

    #[test]
    fn test_prompt_f64_in_range_rejects_out_of_range() {
        let mut input = Cursor::new("150\n-3\n42\n");
        let mut out = Vec::new();

        let value =
            prompt_f64_in_range(&mut input, &mut out, "p: ", 0.0, 100.0).unwrap();
        assert!((value - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_prompt_f64_in_range_rejects_nan() {
        // NaN 不满足范围比较，会被重问
        let mut input = Cursor::new("NaN\n10\n");
        let mut out = Vec::new();

        let value =
            prompt_f64_in_range(&mut input, &mut out, "p: ", 0.0, 100.0).unwrap();
        assert!((value - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut input = Cursor::new("Y\nyes\nno\n\n");
        let mut out = Vec::new();

        assert!(prompt_yes_no(&mut input, &mut out, "? ").unwrap());
        assert!(prompt_yes_no(&mut input, &mut out, "? ").unwrap());
        assert!(!prompt_yes_no(&mut input, &mut out, "? ").unwrap());
        assert!(!prompt_yes_no(&mut input, &mut out, "? ").unwrap());
    }
}
