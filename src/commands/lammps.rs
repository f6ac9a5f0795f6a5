//! # lammps 子命令实现
//!
//! 从命令行参数直接生成 LAMMPS 输入脚本，不运行筛选流程。
//!
//! ## 依赖关系
//! - 使用 `cli/lammps.rs` 定义的参数
//! - 使用 `parsers/properties.rs`, `alloy/selection.rs`, `alloy/lammps.rs`

use crate::alloy::{lammps, selection};
use crate::cli::lammps::LammpsArgs;
use crate::error::Result;
use crate::models::Composition;
use crate::parsers::properties;
use crate::utils::output;

/// 执行 lammps
pub fn execute(args: LammpsArgs) -> Result<()> {
    output::print_header("LAMMPS Input Generation");

    let table = properties::load(&args.properties)?;
    let selected = selection::select_keys(
        &table.available_keys(),
        &selection::split_key_list(&args.elements),
    )?;
    let percents = selection::parse_percent_list(&args.composition)?;
    let composition = Composition::from_parts(&selected, &percents)?;

    let path = lammps::generate(&composition, &table, &args.output_dir)?;
    output::print_success(&format!("LAMMPS input written to '{}'", path.display()));

    Ok(())
}
