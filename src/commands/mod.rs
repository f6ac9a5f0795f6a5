//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `alloy/`, `models/`, `utils/`
//! - 子模块: screen, list, lammps

pub mod lammps;
pub mod list;
pub mod screen;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Screen(args) => screen::execute(args),
        Commands::List(args) => list::execute(args),
        Commands::Lammps(args) => lammps::execute(args),
    }
}
