//! # 合金描述符计算器
//!
//! 从 (组成, 性质表, 混合焓矩阵, 温度) 计算一组标量描述符。
//! 全部为纯函数，与元素排列顺序无关。
//!
//! ## 公式
//! - S_mix = -R Σ cᵢ ln cᵢ
//! - H_mix = Σ_{i<j} 2 cᵢ cⱼ H_ij  (kJ/mol，缺项贡献 0)
//! - G_mix = H_mix·1000 − T·S_mix  (J/mol，千焦换算刻意保留)
//! - T_m = Σ cᵢ Tm_i
//! - Ω = |T_m·S_mix / (H_mix·1000)|，H_mix = 0 时为 +∞
//! - δ = 100·√(Σ cᵢ (1 − rᵢ/r̄)²)，r̄ = Σ cᵢ rᵢ
//! - VEC = Σ cᵢ vecᵢ
//! - χ̄ = Σ cᵢ χᵢ，Δχ = √(Σ cᵢ (χᵢ − χ̄)²)，Δχ% = 100·Δχ/χ̄
//!
//! ## 参考
//! - Yang & Zhang, Mater. Chem. Phys. 132 (2012) 233-238
//! - Guo et al., J. Appl. Phys. 109 (2011) 103505
//!
//! ## 依赖关系
//! - 被 `commands/screen.rs` 调用
//! - 使用 `models/` 的 Composition, PropertyTable, EnthalpyMatrix

use crate::error::{HeascreenError, Result};
use crate::models::{Composition, EnthalpyMatrix, PropertyTable};

/// 气体常数 R，J/(mol·K)
pub const GAS_CONSTANT: f64 = 8.314;

/// 一个无序对的混合焓贡献
#[derive(Debug, Clone)]
pub struct PairContribution {
    /// 元素键（按选择顺序在前）
    pub key_a: u32,
    pub key_b: u32,
    /// 二元混合焓 H_ij (kJ/mol)
    pub enthalpy: f64,
    /// 2·cᵢ·cⱼ·H_ij (kJ/mol)
    pub contribution: f64,
}

/// 一次组成对应的全部描述符（计算后不可变）
#[derive(Debug, Clone)]
pub struct DescriptorSet {
    /// 摩尔分数（按选择顺序）
    pub mole_fractions: Vec<(u32, f64)>,
    /// 参与 H_mix 的无序对贡献（缺项的对不出现）
    pub pair_contributions: Vec<PairContribution>,
    /// 混合熵 ΔS_mix，J/(mol·K)
    pub mixing_entropy: f64,
    /// 混合焓 ΔH_mix，kJ/mol
    pub mixing_enthalpy: f64,
    /// 计算温度，K
    pub temperature: f64,
    /// Gibbs 自由能 ΔG_mix，J/mol
    pub gibbs_energy: f64,
    /// 平均熔点 T_m，K
    pub melting_point: f64,
    /// 熵焓比 Ω
    pub omega: f64,
    /// 摩尔分数加权平均原子半径 r̄，Å
    pub mean_radius: f64,
    /// 原子尺寸差 δ，%
    pub delta: f64,
    /// 价电子浓度 VEC
    pub vec: f64,
    /// 平均 Pauling 电负性 χ̄
    pub chi_mean: f64,
    /// 电负性差 Δχ
    pub chi_delta: f64,
    /// 百分比电负性差 Δχ%
    pub chi_delta_percent: f64,
}

/// 计算一次组成的全部描述符
pub fn compute(
    composition: &Composition,
    table: &PropertyTable,
    matrix: &EnthalpyMatrix,
    temperature: f64,
) -> Result<DescriptorSet> {
    let fractions = composition.mole_fractions();

    let s_mix = mixing_entropy(&fractions)?;
    let (h_mix, pair_contributions) = mixing_enthalpy(&fractions, matrix);
    let g_mix = gibbs_energy(h_mix, s_mix, temperature);
    let t_m = melting_temperature(&fractions, table)?;
    let omega = entropy_enthalpy_ratio(t_m, s_mix, h_mix);
    let (delta, r_bar) = atomic_size_mismatch(&fractions, table)?;
    let vec = valence_electron_concentration(&fractions, table)?;
    let (chi_mean, chi_delta, chi_delta_percent) =
        electronegativity_mismatch(&fractions, table)?;

    Ok(DescriptorSet {
        mole_fractions: fractions,
        pair_contributions,
        mixing_entropy: s_mix,
        mixing_enthalpy: h_mix,
        temperature,
        gibbs_energy: g_mix,
        melting_point: t_m,
        omega,
        mean_radius: r_bar,
        delta,
        vec,
        chi_mean,
        chi_delta,
        chi_delta_percent,
    })
}

/// 理想混合的构型熵 S_mix = -R Σ cᵢ ln cᵢ
///
/// 任一摩尔分数不为正时对数无定义，报 `Domain` 错误。
pub fn mixing_entropy(fractions: &[(u32, f64)]) -> Result<f64> {
    let mut sum = 0.0;
    for &(key, c) in fractions {
        if c <= 0.0 {
            return Err(HeascreenError::Domain(format!(
                "mixing entropy undefined: mole fraction for key {} is not positive ({})",
                key, c
            )));
        }
        sum += c * c.ln();
    }
    Ok(-GAS_CONSTANT * sum)
}

/// 二元焓加权和 H_mix = Σ_{i<j} 2 cᵢ cⱼ H_ij (kJ/mol)
///
/// 矩阵中缺失或 NaN 的对贡献 0 并跳过，不是错误。
pub fn mixing_enthalpy(
    fractions: &[(u32, f64)],
    matrix: &EnthalpyMatrix,
) -> (f64, Vec<PairContribution>) {
    let mut total = 0.0;
    let mut contributions = Vec::new();

    for i in 0..fractions.len() {
        for j in (i + 1)..fractions.len() {
            let (key_a, c_a) = fractions[i];
            let (key_b, c_b) = fractions[j];

            let Some(h_ij) = matrix.lookup(key_a, key_b) else {
                continue;
            };
            if h_ij.is_nan() {
                continue;
            }

            let contribution = 2.0 * c_a * c_b * h_ij;
            total += contribution;
            contributions.push(PairContribution {
                key_a,
                key_b,
                enthalpy: h_ij,
                contribution,
            });
        }
    }

    (total, contributions)
}

/// G_mix = H_mix·1000 − T·S_mix (J/mol)
///
/// H_mix 以 kJ/mol 传入，先换算成 J/mol 再合并。
pub fn gibbs_energy(h_mix_kjmol: f64, s_mix: f64, temperature: f64) -> f64 {
    h_mix_kjmol * 1000.0 - temperature * s_mix
}

/// 线性混合规则平均熔点 T_m = Σ cᵢ Tm_i (K)
pub fn melting_temperature(fractions: &[(u32, f64)], table: &PropertyTable) -> Result<f64> {
    let mut t_m = 0.0;
    for &(key, c) in fractions {
        t_m += c * table.melting_point(key)?;
    }
    Ok(t_m)
}

/// 熵焓比 Ω = |T_m·S_mix / (H_mix·1000)|；H_mix = 0 时为 +∞
pub fn entropy_enthalpy_ratio(t_m: f64, s_mix: f64, h_mix_kjmol: f64) -> f64 {
    let h_jmol = h_mix_kjmol * 1000.0;
    if h_jmol == 0.0 {
        f64::INFINITY
    } else {
        (t_m * s_mix / h_jmol).abs()
    }
}

/// 原子尺寸差 δ (%) 与加权平均半径 r̄ (Å)
pub fn atomic_size_mismatch(
    fractions: &[(u32, f64)],
    table: &PropertyTable,
) -> Result<(f64, f64)> {
    let mut r_bar = 0.0;
    for &(key, c) in fractions {
        r_bar += c * table.atomic_radius(key)?;
    }

    let mut sum = 0.0;
    for &(key, c) in fractions {
        let r_i = table.atomic_radius(key)?;
        let deviation = 1.0 - r_i / r_bar;
        sum += c * deviation * deviation;
    }

    Ok((sum.sqrt() * 100.0, r_bar))
}

/// 价电子浓度 VEC = Σ cᵢ vecᵢ
pub fn valence_electron_concentration(
    fractions: &[(u32, f64)],
    table: &PropertyTable,
) -> Result<f64> {
    let mut vec = 0.0;
    for &(key, c) in fractions {
        vec += c * table.valence_electrons(key)?;
    }
    Ok(vec)
}

/// 电负性统计：(χ̄, Δχ, Δχ%)
///
/// χ̄ = 0 时 Δχ% 取 0，避免除零。
pub fn electronegativity_mismatch(
    fractions: &[(u32, f64)],
    table: &PropertyTable,
) -> Result<(f64, f64, f64)> {
    let mut chi_mean = 0.0;
    for &(key, c) in fractions {
        chi_mean += c * table.electronegativity(key)?;
    }

    let mut variance = 0.0;
    for &(key, c) in fractions {
        let chi_i = table.electronegativity(key)?;
        variance += c * (chi_i - chi_mean) * (chi_i - chi_mean);
    }
    let chi_delta = variance.sqrt();

    let chi_delta_percent = if chi_mean == 0.0 {
        0.0
    } else {
        chi_delta / chi_mean * 100.0
    };

    Ok((chi_mean, chi_delta, chi_delta_percent))
}
