//! # screen 子命令 CLI 定义
//!
//! 完整筛选流程的参数。未给出的输入（元素、组成、温度）在运行
//! 时交互式询问；`--batch` 禁止任何交互。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/screen.rs`

use clap::Args;
use std::path::PathBuf;

/// screen 子命令参数
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Path to the element-property table (.csv or .xlsx)
    #[arg(long, default_value = "element_properties.xlsx")]
    pub properties: PathBuf,

    /// Path to the Miedema mixing-enthalpy matrix (.csv or .xlsx)
    #[arg(long, default_value = "miedema_matrix.xlsx")]
    pub miedema: PathBuf,

    /// Comma-separated element keys (atomic numbers), e.g. "24,27,40"
    #[arg(short, long)]
    pub elements: Option<String>,

    /// Comma-separated percentages matching --elements, e.g. "30,30,40"
    #[arg(short, long)]
    pub composition: Option<String>,

    /// Temperature in K for the Gibbs free energy
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Output path for the summary artifact (CSV)
    #[arg(short, long, default_value = "alloy_summary.csv")]
    pub output: PathBuf,

    /// Generate the LAMMPS input deck without asking
    #[arg(long, default_value_t = false)]
    pub lammps: bool,

    /// Directory for the generated LAMMPS deck
    #[arg(long, default_value = ".")]
    pub lammps_dir: PathBuf,

    /// Never prompt; requires --elements, --composition and --temperature
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Do not open the exported summary in the system viewer
    #[arg(long, default_value_t = false)]
    pub no_open: bool,
}
