//! # list 子命令实现
//!
//! 渲染元素性质表为终端表格，可选导出 CSV。
//! 表格渲染函数同时供 `commands/screen.rs` 展示所选元素使用。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `parsers/properties.rs`, `alloy/selection.rs`, `utils/output.rs`

use crate::alloy::selection;
use crate::cli::list::ListArgs;
use crate::error::{HeascreenError, Result};
use crate::models::{ElementRecord, PropertyTable};
use crate::parsers::properties;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 元素性质表格行
#[derive(Debug, Clone, Tabled)]
struct ElementRow {
    #[tabled(rename = "Key")]
    key: u32,
    #[tabled(rename = "Element")]
    symbol: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Density")]
    density: String,
    #[tabled(rename = "Radius (Å)")]
    radius: String,
    #[tabled(rename = "Tm (K)")]
    melting: String,
    #[tabled(rename = "a (Å)")]
    lattice: String,
    #[tabled(rename = "HV")]
    hardness: String,
    #[tabled(rename = "E (GPa)")]
    modulus: String,
    #[tabled(rename = "σ_a (barn)")]
    cross_section: String,
    #[tabled(rename = "VEC")]
    vec: String,
    #[tabled(rename = "χ")]
    chi: String,
}

impl ElementRow {
    fn from_record(record: &ElementRecord) -> Self {
        ElementRow {
            key: record.atomic_number,
            symbol: record.symbol.clone(),
            weight: fmt_cell(record.atomic_weight),
            density: fmt_cell(record.density),
            radius: fmt_cell(record.atomic_radius),
            melting: fmt_cell(record.melting_point),
            lattice: fmt_cell(record.lattice_constant),
            hardness: fmt_cell(record.vickers_hardness),
            modulus: fmt_cell(record.youngs_modulus),
            cross_section: fmt_cell(record.neutron_cross_section),
            vec: fmt_cell(record.valence_electrons),
            chi: fmt_cell(record.electronegativity),
        }
    }
}

/// 缺失数据显示为 "-"
fn fmt_cell(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{}", value)
    }
}

/// 执行 list
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Element Property Table");

    let table = properties::load(&args.properties)?;
    let keys = match &args.elements {
        Some(list) => {
            selection::select_keys(&table.available_keys(), &selection::split_key_list(list))?
        }
        None => table.available_keys(),
    };

    print_element_table(&table, &keys);

    if let Some(path) = &args.output {
        write_records_csv(&table, &keys, path)?;
        output::print_success(&format!("Element table saved to '{}'", path.display()));
    }

    Ok(())
}

/// 渲染给定键的元素性质表格（表中不存在的键跳过）
pub fn print_element_table(table: &PropertyTable, keys: &[u32]) {
    let rows: Vec<ElementRow> = keys
        .iter()
        .filter_map(|&key| table.get(key))
        .map(ElementRow::from_record)
        .collect();

    if rows.is_empty() {
        output::print_warning("No matching elements to display.");
        return;
    }

    println!("{}", Table::new(&rows));
}

/// 导出所列记录为 CSV
fn write_records_csv(table: &PropertyTable, keys: &[u32], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for &key in keys {
        if let Some(record) = table.get(key) {
            wtr.serialize(record)?;
        }
    }
    wtr.flush().map_err(|e| HeascreenError::Export {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
