//! # screen 子命令实现
//!
//! 完整筛选流程：加载两张数据表 → 选择元素 → 录入组成 →
//! 计算描述符 → 应用判据 → 导出摘要 → 可选生成 LAMMPS 脚本。
//! 命令行未提供的输入交互式询问；`--batch` 模式下缺参直接报错。
//!
//! ## 依赖关系
//! - 使用 `cli/screen.rs` 定义的参数
//! - 使用 `parsers/`, `alloy/`, `models/`, `utils/`

use crate::alloy::calculator::{self, DescriptorSet};
use crate::alloy::criteria::{self, CriteriaReport};
use crate::alloy::{export, lammps, selection};
use crate::cli::screen::ScreenArgs;
use crate::commands::list::print_element_table;
use crate::error::{HeascreenError, Result};
use crate::models::{Composition, PropertyTable};
use crate::parsers::{miedema, properties};
use crate::utils::{output, prompt};

use std::io::{self, BufRead, Write};

/// 执行 screen
pub fn execute(args: ScreenArgs) -> Result<()> {
    output::print_header("High-Entropy Alloy Screening");

    if args.batch
        && (args.elements.is_none() || args.composition.is_none() || args.temperature.is_none())
    {
        return Err(HeascreenError::InvalidArgument(
            "--batch requires --elements, --composition and --temperature".to_string(),
        ));
    }

    // ─────────────────────────────────────────────────────────────
    // 加载数据表
    // ─────────────────────────────────────────────────────────────
    let table = properties::load(&args.properties)?;
    output::print_info(&format!(
        "Loaded {} element records from '{}'",
        table.len(),
        args.properties.display()
    ));

    let matrix = miedema::load(&args.miedema)?;
    output::print_info(&format!(
        "Loaded {} pairwise mixing enthalpies from '{}'",
        matrix.len(),
        args.miedema.display()
    ));

    let violations = matrix.symmetry_violations(1e-9);
    if !violations.is_empty() {
        output::print_warning(&format!(
            "Mixing-enthalpy matrix has {} asymmetric pair(s); the (row, column) value is used",
            violations.len()
        ));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    // ─────────────────────────────────────────────────────────────
    // 元素选择与组成
    // ─────────────────────────────────────────────────────────────
    let requested = match &args.elements {
        Some(list) => selection::split_key_list(list),
        None => {
            print_available_keys(&table);
            let line = prompt::prompt_line(
                &mut input,
                &mut out,
                "Element keys (comma-separated, e.g. 24,27,40): ",
            )?;
            selection::split_key_list(&line)
        }
    };
    let selected = selection::select_keys(&table.available_keys(), &requested)?;

    let composition = match &args.composition {
        Some(list) => Composition::from_parts(&selected, &selection::parse_percent_list(list)?)?,
        None => {
            println!("\nEnter the percentage composition for the selected elements (must total 100).");
            selection::collect_composition(&mut input, &mut out, &selected)?
        }
    };
    print_composition(&composition);

    // 所选元素的性质一览（表中不存在的键此处跳过，计算时显式失败）
    print_element_table(&table, &selected);

    let temperature = resolve_temperature(&args, &mut input, &mut out)?;

    // ─────────────────────────────────────────────────────────────
    // 计算与判据
    // ─────────────────────────────────────────────────────────────
    let descriptors = calculator::compute(&composition, &table, &matrix, temperature)?;
    print_descriptors(&descriptors);

    let report = criteria::classify(&descriptors);
    print_criteria(&descriptors, &report);

    // ─────────────────────────────────────────────────────────────
    // 导出摘要
    // ─────────────────────────────────────────────────────────────
    let rows = export::summary_rows(&descriptors, &report);
    export::write_csv(&rows, &args.output)?;
    export::print_summary(&rows);
    output::print_success(&format!("Summary saved to '{}'", args.output.display()));

    if !args.no_open {
        if let Err(e) = export::open_artifact(&args.output) {
            output::print_warning(&format!("Could not open the summary automatically: {}", e));
        }
    }

    // ─────────────────────────────────────────────────────────────
    // 可选 LAMMPS 脚本
    // ─────────────────────────────────────────────────────────────
    let generate_deck = if args.lammps {
        true
    } else if args.batch {
        false
    } else {
        prompt::prompt_yes_no(
            &mut input,
            &mut out,
            "\nGenerate a LAMMPS input deck for this alloy? (y/n): ",
        )?
    };

    if generate_deck {
        let path = lammps::generate(&composition, &table, &args.lammps_dir)?;
        output::print_success(&format!("LAMMPS input written to '{}'", path.display()));
    }

    Ok(())
}

/// 交互模式下在询问前列出可用键
fn print_available_keys(table: &PropertyTable) {
    println!("Available element keys:");
    for record in table.records() {
        println!("  {:>3}  {}", record.atomic_number, record.symbol);
    }
    println!();
}

/// 温度来自参数或交互提示；必须是非负有限值
fn resolve_temperature<R: BufRead, W: Write>(
    args: &ScreenArgs,
    input: &mut R,
    out: &mut W,
) -> Result<f64> {
    match args.temperature {
        Some(t) if t.is_finite() && t >= 0.0 => Ok(t),
        Some(t) => Err(HeascreenError::InvalidArgument(format!(
            "temperature must be a non-negative number of Kelvin, got {}",
            t
        ))),
        None => loop {
            let t = prompt::prompt_f64(input, out, "\nTemperature for the Gibbs free energy (K): ")?;
            if t.is_finite() && t >= 0.0 {
                return Ok(t);
            }
            writeln!(out, "Temperature must be a non-negative number of Kelvin.").ok();
        },
    }
}

fn print_composition(composition: &Composition) {
    println!("\nComposition:");
    for &(key, percent) in composition.entries() {
        println!("  {}: {} %", key, percent);
    }
}

fn print_descriptors(descriptors: &DescriptorSet) {
    output::print_header("Descriptors");

    println!("Mole fractions:");
    for &(key, c) in &descriptors.mole_fractions {
        println!("  {}: {:.4}", key, c);
    }

    if !descriptors.pair_contributions.is_empty() {
        let fraction = |key: u32| {
            descriptors
                .mole_fractions
                .iter()
                .find(|&&(k, _)| k == key)
                .map_or(0.0, |&(_, c)| c)
        };
        println!("\nPair contributions (kJ/mol):");
        for pair in &descriptors.pair_contributions {
            println!(
                "  {}-{}: 2 * {:.4} * {:.4} * ({:.4}) = {:.4} kJ/mol",
                pair.key_a,
                pair.key_b,
                fraction(pair.key_a),
                fraction(pair.key_b),
                pair.enthalpy,
                pair.contribution
            );
        }
    }

    println!();
    println!(
        "Mixing entropy (ΔS_mix): {:.4} J/mol·K",
        descriptors.mixing_entropy
    );
    println!(
        "Mixing enthalpy (ΔH_mix): {:.4} kJ/mol",
        descriptors.mixing_enthalpy
    );
    println!(
        "Gibbs free energy (ΔG_mix) at {:.2} K: {:.4} J/mol",
        descriptors.temperature, descriptors.gibbs_energy
    );
    println!(
        "Average melting point (Tm): {:.2} K",
        descriptors.melting_point
    );
    println!("Entropy/enthalpy ratio (Ω): {:.2}", descriptors.omega);
    println!(
        "Average atomic radius (r̄): {:.4} Å",
        descriptors.mean_radius
    );
    println!("Atomic size difference (δ): {:.2} %", descriptors.delta);
    println!(
        "Valence electron concentration (VEC): {:.2}",
        descriptors.vec
    );
    println!(
        "Average electronegativity (χ̄): {:.3}",
        descriptors.chi_mean
    );
    println!(
        "Electronegativity difference (Δχ): {:.3} ({:.2} %)",
        descriptors.chi_delta, descriptors.chi_delta_percent
    );
}

fn print_criteria(descriptors: &DescriptorSet, report: &CriteriaReport) {
    output::print_header("Solid-Solution Criteria");

    if report.gibbs_favorable {
        output::print_info("ΔG_mix < 0: a single-phase solid solution is likely.");
    } else {
        output::print_info("ΔG_mix >= 0: phase separation or intermediate phases may form.");
    }

    println!("Criteria: -10 <= ΔH_mix <= +5 kJ/mol and ΔS_mix >= 1.5 R.");
    output::print_criterion(
        &format!("ΔH_mix = {:.2} kJ/mol", descriptors.mixing_enthalpy),
        report.enthalpy.is_suitable(),
    );
    output::print_criterion(
        &format!("ΔS_mix = {:.2} J/mol·K", descriptors.mixing_entropy),
        report.entropy.is_suitable(),
    );
    output::print_criterion(
        &format!("Ω = {:.2} (>= 1.1)", descriptors.omega),
        report.omega.is_suitable(),
    );
    output::print_criterion(
        &format!("δ = {:.2} % (<= 6.6 %)", descriptors.delta),
        report.delta.is_suitable(),
    );

    println!("Expected phase: {}", report.phase);
    println!("Δχ% assessment: {}", report.chi_band.comment());
    output::print_separator();

    // 综合结论只由焓、熵两项判据决定
    if report.single_phase.is_suitable() {
        output::print_success(
            "Thermodynamically suitable for a single-phase solid solution (ΔH_mix and ΔS_mix criteria).",
        );
    } else {
        output::print_warning(
            "Not thermodynamically suitable for a single-phase solid solution (ΔH_mix and ΔS_mix criteria).",
        );
    }
}
