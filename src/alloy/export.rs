//! # 摘要导出
//!
//! 把描述符和判据结论整理成两列 (Parameter, Value) 摘要：
//! 终端用 `tabled` 渲染（表头加粗居中，标签左对齐、数值右对齐），
//! 文件用 `csv` 写出。导出后尽力在系统查看器中打开，失败只警告。
//!
//! ## 依赖关系
//! - 被 `commands/screen.rs` 调用
//! - 使用 `alloy/calculator.rs` 的 DescriptorSet
//! - 使用 `alloy/criteria.rs` 的 CriteriaReport
//! - 使用 `csv`、`tabled` crate

use crate::alloy::calculator::DescriptorSet;
use crate::alloy::criteria::CriteriaReport;
use crate::error::{HeascreenError, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::Command;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Format, Modify};
use tabled::{Table, Tabled};

/// 摘要表的一行
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Parameter")]
    #[serde(rename = "Parameter")]
    pub parameter: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    pub value: String,
}

fn row(parameter: &str, value: String) -> SummaryRow {
    SummaryRow {
        parameter: parameter.to_string(),
        value,
    }
}

/// 按固定精度把描述符和结论整理成摘要行
pub fn summary_rows(descriptors: &DescriptorSet, report: &CriteriaReport) -> Vec<SummaryRow> {
    let gibbs_comment = if report.gibbs_favorable {
        "ΔG_mix < 0: single-phase solid solution is likely."
    } else {
        "ΔG_mix >= 0: phase separation or intermediate phases may form."
    };

    vec![
        row(
            "Valence Electron Concentration (VEC)",
            format!("{:.2}", descriptors.vec),
        ),
        row("Predicted Phase", report.phase.to_string()),
        row(
            "Mixing Enthalpy (ΔH_mix) [kJ/mol]",
            format!("{:.4}", descriptors.mixing_enthalpy),
        ),
        row(
            "Mixing Entropy (ΔS_mix) [J/mol·K]",
            format!("{:.4}", descriptors.mixing_entropy),
        ),
        row(
            "Gibbs Free Energy (ΔG_mix) [J/mol]",
            format!("{:.4}", descriptors.gibbs_energy),
        ),
        row(
            "Average Melting Point (Tm) [K]",
            format!("{:.2}", descriptors.melting_point),
        ),
        row(
            "Entropy/Enthalpy Ratio (Ω)",
            format!("{:.2}", descriptors.omega),
        ),
        row("Ω Criterion", report.omega.to_string()),
        row(
            "Average Atomic Radius (r̄) [Å]",
            format!("{:.4}", descriptors.mean_radius),
        ),
        row(
            "Atomic Size Difference (δ) [%]",
            format!("{:.2}", descriptors.delta),
        ),
        row("δ Criterion", report.delta.to_string()),
        row(
            "Average Pauling Electronegativity (χ̄)",
            format!("{:.3}", descriptors.chi_mean),
        ),
        row(
            "Electronegativity Difference (Δχ)",
            format!("{:.3}", descriptors.chi_delta),
        ),
        row(
            "Electronegativity Difference (Δχ%)",
            format!("{:.2} %", descriptors.chi_delta_percent),
        ),
        row("Δχ% Assessment", report.chi_band.comment().to_string()),
        row("ΔH_mix Criterion", report.enthalpy.to_string()),
        row("ΔS_mix Criterion", report.entropy.to_string()),
        row("Single-Phase Verdict", report.single_phase.to_string()),
        row("ΔG_mix Assessment", gibbs_comment.to_string()),
    ]
}

/// 把摘要写成两列 CSV
pub fn write_csv(rows: &[SummaryRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for summary_row in rows {
        wtr.serialize(summary_row)?;
    }
    wtr.flush().map_err(|e| HeascreenError::Export {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 终端渲染摘要表：表头加粗居中，标签左对齐，数值右对齐
pub fn print_summary(rows: &[SummaryRow]) {
    let mut table = Table::new(rows);
    table
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Format::content(|cell| cell.bold().to_string())),
        );
    println!("{}", table);
}

#[cfg(target_os = "windows")]
const VIEWER: &str = "cmd";
#[cfg(target_os = "macos")]
const VIEWER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const VIEWER: &str = "xdg-open";

#[cfg(target_os = "windows")]
fn spawn_viewer(path: &Path) -> std::io::Result<std::process::Child> {
    Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()
}

#[cfg(target_os = "macos")]
fn spawn_viewer(path: &Path) -> std::io::Result<std::process::Child> {
    Command::new("open").arg(path).spawn()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn spawn_viewer(path: &Path) -> std::io::Result<std::process::Child> {
    Command::new("xdg-open").arg(path).spawn()
}

/// 在系统查看器中打开导出文件（尽力而为，调用方决定是否仅警告）
pub fn open_artifact(path: &Path) -> Result<()> {
    spawn_viewer(path)
        .map(|_| ())
        .map_err(|_| HeascreenError::CommandNotFound {
            command: VIEWER.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloy::criteria::classify;

    fn descriptors() -> DescriptorSet {
        DescriptorSet {
            mole_fractions: vec![(24, 0.5), (27, 0.5)],
            pair_contributions: Vec::new(),
            mixing_entropy: 5.7628,
            mixing_enthalpy: -2.0,
            temperature: 298.0,
            gibbs_energy: -3717.3,
            melting_point: 1974.0,
            omega: 5.69,
            mean_radius: 1.265,
            delta: 1.19,
            vec: 7.5,
            chi_mean: 1.77,
            chi_delta: 0.11,
            chi_delta_percent: 6.21,
        }
    }

    #[test]
    fn test_summary_row_precisions() {
        let d = descriptors();
        let report = classify(&d);
        let rows = summary_rows(&d, &report);

        let value = |name: &str| {
            rows.iter()
                .find(|r| r.parameter == name)
                .map(|r| r.value.clone())
                .unwrap()
        };

        assert_eq!(value("Valence Electron Concentration (VEC)"), "7.50");
        assert_eq!(value("Mixing Enthalpy (ΔH_mix) [kJ/mol]"), "-2.0000");
        assert_eq!(value("Mixing Entropy (ΔS_mix) [J/mol·K]"), "5.7628");
        assert_eq!(value("Average Melting Point (Tm) [K]"), "1974.00");
        assert_eq!(value("Average Atomic Radius (r̄) [Å]"), "1.2650");
        assert_eq!(value("Average Pauling Electronegativity (χ̄)"), "1.770");
        assert_eq!(value("Electronegativity Difference (Δχ%)"), "6.21 %");
    }

    #[test]
    fn test_summary_includes_all_verdicts() {
        let d = descriptors();
        let report = classify(&d);
        let rows = summary_rows(&d, &report);

        for name in [
            "Predicted Phase",
            "Ω Criterion",
            "δ Criterion",
            "ΔH_mix Criterion",
            "ΔS_mix Criterion",
            "Single-Phase Verdict",
            "Δχ% Assessment",
            "ΔG_mix Assessment",
        ] {
            assert!(
                rows.iter().any(|r| r.parameter == name),
                "missing row '{}'",
                name
            );
        }
    }

    #[test]
    fn test_infinite_omega_renders() {
        let mut d = descriptors();
        d.mixing_enthalpy = 0.0;
        d.omega = f64::INFINITY;
        let report = classify(&d);
        let rows = summary_rows(&d, &report);

        let omega = rows
            .iter()
            .find(|r| r.parameter == "Entropy/Enthalpy Ratio (Ω)")
            .unwrap();
        assert_eq!(omega.value, "inf");
    }
}
