//! # heascreen - 高熵合金固溶体筛选工具箱
//!
//! 从元素性质表和 Miedema 二元混合焓矩阵出发，计算高熵合金 (HEA)
//! 的热力学与结构描述符，按经验判据分类，导出摘要，并可选生成
//! LAMMPS 输入脚本。
//!
//! ## 子命令
//! - `screen` - 完整筛选流程（加载 → 选择 → 组成 → 计算 → 判据 → 导出）
//! - `list`   - 列出元素性质表中可用的元素
//! - `lammps` - 仅生成 LAMMPS 输入脚本
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (性质表与焓矩阵加载)
//!   │     ├── alloy/     (描述符计算、判据、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (终端输出与交互提示)
//!   └── error.rs    (错误处理)
//! ```

mod alloy;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
