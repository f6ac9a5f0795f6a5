//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `screen`: 完整筛选流程
//! - `list`:   列出元素性质表
//! - `lammps`: 仅生成 LAMMPS 输入脚本
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: screen, list, lammps

pub mod lammps;
pub mod list;
pub mod screen;

use clap::{Parser, Subcommand};

/// heascreen - 高熵合金固溶体筛选工具箱
#[derive(Parser)]
#[command(name = "heascreen")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A high-entropy alloy solid-solution screening toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Screen a candidate alloy: descriptors, criteria, summary export
    Screen(screen::ScreenArgs),

    /// List the elements available in the property table
    List(list::ListArgs),

    /// Generate a LAMMPS input deck without running a full screen
    Lammps(lammps::LammpsArgs),
}
