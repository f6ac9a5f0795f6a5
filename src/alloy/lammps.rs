//! # LAMMPS 输入脚本生成
//!
//! 按固定模板生成外部分子动力学工具的静态结构输入：bcc 晶格取
//! 所选元素晶格常数的算术平均，每个物种写入质量与
//! `type/fraction` 行。纯文本模板填充，不含任何物理计算。
//!
//! ## 依赖关系
//! - 被 `commands/screen.rs`、`commands/lammps.rs` 调用
//! - 使用 `models/` 的 Composition, PropertyTable

use crate::error::{HeascreenError, Result};
use crate::models::{Composition, PropertyTable};
use std::fs;
use std::path::{Path, PathBuf};

/// type/fraction 使用的固定随机种子
const FRACTION_SEED: u32 = 1_234_567;

/// 生成 LAMMPS 输入脚本，返回写出的文件路径
///
/// 文件名由元素符号拼接：`in_Cr_Co_Zr.lmp`。
pub fn generate(
    composition: &Composition,
    table: &PropertyTable,
    output_dir: &Path,
) -> Result<PathBuf> {
    let keys = composition.keys();

    let mut symbols = Vec::with_capacity(keys.len());
    let mut masses = Vec::with_capacity(keys.len());
    let mut lattice_sum = 0.0;
    for &key in &keys {
        symbols.push(table.symbol(key)?.to_string());
        masses.push(table.atomic_weight(key)?);
        lattice_sum += table.lattice_constant(key)?;
    }
    let mean_lattice = lattice_sum / keys.len() as f64;

    let fractions: Vec<f64> = composition
        .entries()
        .iter()
        .map(|&(_, percent)| percent / 100.0)
        .collect();

    let script = render_script(&symbols, mean_lattice, &masses, &fractions);
    let path = output_dir.join(deck_file_name(&symbols));

    fs::write(&path, script).map_err(|e| HeascreenError::Export {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}

/// 由元素符号拼出脚本文件名
pub fn deck_file_name(symbols: &[String]) -> String {
    format!("in_{}.lmp", symbols.join("_"))
}

/// 填充固定模板
pub fn render_script(symbols: &[String], mean_lattice: f64, masses: &[f64], fractions: &[f64]) -> String {
    let mut set_lines = String::new();
    for (i, (fraction, symbol)) in fractions.iter().zip(symbols).enumerate() {
        set_lines.push_str(&format!(
            "set type {type_id} type/fraction {type_id} {fraction:.2} {seed} # {symbol}\n",
            type_id = i + 1,
            fraction = fraction,
            seed = FRACTION_SEED,
            symbol = symbol,
        ));
    }

    let mut mass_lines = String::new();
    for (i, (mass, symbol)) in masses.iter().zip(symbols).enumerate() {
        mass_lines.push_str(&format!("mass {} {} # {}\n", i + 1, mass, symbol));
    }

    format!(
        r#"clear
#------------------INITIALIZATION--------------------------
units metal
dimension 3
boundary p p p
atom_style atomic

#------------------ALLOYING-------------------------------
#Alloy: {alloy} HEA

#------------------SIMULATION CELL------------------------
region whole block -50 50 -150 150 -50 50 units box
create_box {n_types} whole

#------------------ATOM DEFINITION------------------------
region nw cylinder y 0 0 50 INF units box
lattice bcc {a0:.2} orient x 1 0 0 orient y 0 1 0 orient z 0 0 1
create_atoms 1 region nw
{set_lines}
#------------------PAIR COEFF-----------------------------
pair_style lj/cut 10
pair_coeff * * 0 0

#------------------MASSES---------------------------------
{mass_lines}
delete_atoms overlap 0.3 all all

#------------------EXPORT DATA FILE-----------------------
write_data structure.lmpdat nocoeff
"#,
        alloy = symbols.join("-"),
        n_types = symbols.len(),
        a0 = mean_lattice,
        set_lines = set_lines,
        mass_lines = mass_lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> Vec<String> {
        vec!["Cr".to_string(), "Co".to_string(), "Zr".to_string()]
    }

    #[test]
    fn test_deck_file_name() {
        assert_eq!(deck_file_name(&symbols()), "in_Cr_Co_Zr.lmp");
    }

    #[test]
    fn test_render_script_contents() {
        let script = render_script(
            &symbols(),
            3.0933333,
            &[51.9961, 58.9332, 91.224],
            &[0.3, 0.3, 0.4],
        );

        assert!(script.contains("#Alloy: Cr-Co-Zr HEA"));
        assert!(script.contains("create_box 3 whole"));
        // 平均晶格常数保留两位小数
        assert!(script.contains("lattice bcc 3.09 orient x 1 0 0"));
        assert!(script.contains("set type 1 type/fraction 1 0.30 1234567 # Cr"));
        assert!(script.contains("set type 3 type/fraction 3 0.40 1234567 # Zr"));
        assert!(script.contains("mass 2 58.9332 # Co"));
        assert!(script.contains("write_data structure.lmpdat nocoeff"));
    }

    #[test]
    fn test_render_script_binary() {
        let script = render_script(
            &vec!["Fe".to_string(), "Ni".to_string()],
            2.92,
            &[55.845, 58.6934],
            &[0.5, 0.5],
        );

        assert!(script.contains("create_box 2 whole"));
        assert!(script.contains("set type 2 type/fraction 2 0.50 1234567 # Ni"));
        assert!(!script.contains("type 3"));
    }
}
