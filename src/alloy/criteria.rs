//! # 固溶体形成判据
//!
//! 对描述符应用文献中的固定阈值，给出相预测与适宜性结论。
//! 各规则相互独立、与求值顺序无关；边界取值严格按文献写法，
//! 不加浮点容差。
//!
//! ## 判据
//! - VEC < 6.87 → BCC；6.87 ≤ VEC < 8.00 → BCC+FCC；VEC ≥ 8.00 → FCC
//! - −10.0001 ≤ ΔH_mix ≤ 5.0001 kJ/mol（不对称的边界余量按原文保留）
//! - ΔS_mix ≥ 1.5 R
//! - Ω ≥ 1.1
//! - δ ≤ 6.6
//! - Δχ% ≤ 8 低/适中；8 < Δχ% < 10 中间；Δχ% ≥ 10 高
//!
//! 综合单相结论只取焓判据与熵判据的合取；VEC/Ω/δ/Δχ% 单独
//! 报告但不并入综合结论（沿用原判据选择，见 DESIGN.md）。
//!
//! ## 依赖关系
//! - 被 `commands/screen.rs`、`alloy/export.rs` 使用
//! - 使用 `alloy/calculator.rs` 的 DescriptorSet

use crate::alloy::calculator::{DescriptorSet, GAS_CONSTANT};

/// VEC 相边界：低于此值为 BCC
pub const VEC_BCC_UPPER: f64 = 6.87;
/// VEC 相边界：不低于此值为 FCC
pub const VEC_FCC_LOWER: f64 = 8.00;
/// ΔH_mix 适宜窗口 (kJ/mol)
pub const ENTHALPY_WINDOW: (f64, f64) = (-10.0001, 5.0001);
/// ΔS_mix 阈值系数（乘以 R）
pub const ENTROPY_FACTOR: f64 = 1.5;
/// Ω 阈值
pub const OMEGA_THRESHOLD: f64 = 1.1;
/// δ 阈值 (%)
pub const DELTA_THRESHOLD: f64 = 6.6;
/// Δχ% 低/适中区间上界
pub const CHI_LOW_UPPER: f64 = 8.0;
/// Δχ% 高区间下界
pub const CHI_HIGH_LOWER: f64 = 10.0;

/// VEC 相预测
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Bcc,
    BccFcc,
    Fcc,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Bcc => write!(f, "BCC (VEC < 6.87)"),
            Phase::BccFcc => write!(f, "BCC + FCC (6.87 <= VEC < 8.00)"),
            Phase::Fcc => write!(f, "FCC (VEC >= 8.00)"),
        }
    }
}

/// 单项判据结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Suitable,
    Unsuitable,
}

impl Verdict {
    fn from_bool(ok: bool) -> Self {
        if ok {
            Verdict::Suitable
        } else {
            Verdict::Unsuitable
        }
    }

    pub fn is_suitable(self) -> bool {
        matches!(self, Verdict::Suitable)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Suitable => write!(f, "Suitable"),
            Verdict::Unsuitable => write!(f, "Not suitable"),
        }
    }
}

/// Δχ% 分档
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChiBand {
    LowModerate,
    Intermediate,
    High,
}

impl ChiBand {
    /// 分档说明（写入摘要）
    pub fn comment(self) -> &'static str {
        match self {
            ChiBand::LowModerate => {
                "Low/moderate (<= 8%): favors a single-phase solid solution, though not a guarantee."
            }
            ChiBand::Intermediate => {
                "Intermediate (8-10%): weigh together with the other criteria."
            }
            ChiBand::High => {
                "High (>= 10%): raises the risk of intermetallics or segregation; refractory BCC systems are known exceptions."
            }
        }
    }
}

impl std::fmt::Display for ChiBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChiBand::LowModerate => write!(f, "low/moderate"),
            ChiBand::Intermediate => write!(f, "intermediate"),
            ChiBand::High => write!(f, "high"),
        }
    }
}

/// 全部判据结论
#[derive(Debug, Clone)]
pub struct CriteriaReport {
    pub phase: Phase,
    pub enthalpy: Verdict,
    pub entropy: Verdict,
    pub omega: Verdict,
    pub delta: Verdict,
    pub chi_band: ChiBand,
    /// ΔG_mix < 0（仅供参考，不并入其它判据）
    pub gibbs_favorable: bool,
    /// 综合单相结论：焓判据 ∧ 熵判据
    pub single_phase: Verdict,
}

/// 按 VEC 预测相
pub fn predict_phase(vec: f64) -> Phase {
    if vec < VEC_BCC_UPPER {
        Phase::Bcc
    } else if vec < VEC_FCC_LOWER {
        Phase::BccFcc
    } else {
        Phase::Fcc
    }
}

/// 对一组描述符应用全部判据
pub fn classify(descriptors: &DescriptorSet) -> CriteriaReport {
    let enthalpy_ok = descriptors.mixing_enthalpy >= ENTHALPY_WINDOW.0
        && descriptors.mixing_enthalpy <= ENTHALPY_WINDOW.1;
    let entropy_ok = descriptors.mixing_entropy >= ENTROPY_FACTOR * GAS_CONSTANT;
    let omega_ok = descriptors.omega >= OMEGA_THRESHOLD;
    let delta_ok = descriptors.delta <= DELTA_THRESHOLD;

    let chi_band = if descriptors.chi_delta_percent <= CHI_LOW_UPPER {
        ChiBand::LowModerate
    } else if descriptors.chi_delta_percent >= CHI_HIGH_LOWER {
        ChiBand::High
    } else {
        ChiBand::Intermediate
    };

    CriteriaReport {
        phase: predict_phase(descriptors.vec),
        enthalpy: Verdict::from_bool(enthalpy_ok),
        entropy: Verdict::from_bool(entropy_ok),
        omega: Verdict::from_bool(omega_ok),
        delta: Verdict::from_bool(delta_ok),
        chi_band,
        gibbs_favorable: descriptors.gibbs_energy < 0.0,
        single_phase: Verdict::from_bool(enthalpy_ok && entropy_ok),
    }
}
