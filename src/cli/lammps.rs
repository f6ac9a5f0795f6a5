//! # lammps 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lammps.rs`

use clap::Args;
use std::path::PathBuf;

/// lammps 子命令参数
#[derive(Args, Debug)]
pub struct LammpsArgs {
    /// Path to the element-property table (.csv or .xlsx)
    #[arg(long, default_value = "element_properties.xlsx")]
    pub properties: PathBuf,

    /// Comma-separated element keys (atomic numbers), e.g. "24,27,40"
    #[arg(short, long)]
    pub elements: String,

    /// Comma-separated percentages matching --elements, e.g. "30,30,40"
    #[arg(short, long)]
    pub composition: String,

    /// Directory for the generated deck
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}
