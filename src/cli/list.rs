//! # list 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the element-property table (.csv or .xlsx)
    #[arg(long, default_value = "element_properties.xlsx")]
    pub properties: PathBuf,

    /// Show only these comma-separated element keys
    #[arg(short, long)]
    pub elements: Option<String>,

    /// Also save the listed records as CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
