//! # 合金组成数据模型
//!
//! 按选择顺序保存 (元素键, 百分比)。构造时校验每个百分比在
//! [0, 100] 内且总和为 100（容差 1e-6），此后不可变。
//!
//! ## 依赖关系
//! - 被 `alloy/selection.rs` 构造
//! - 被 `alloy/calculator.rs`、`alloy/lammps.rs` 读取
//! - 无外部模块依赖

use crate::error::{HeascreenError, Result};

/// 百分比总和的允许偏差
pub const SUM_TOLERANCE: f64 = 1e-6;

/// 冻结后的合金组成（百分比总和 = 100 ± 1e-6）
#[derive(Debug, Clone)]
pub struct Composition {
    entries: Vec<(u32, f64)>,
}

impl Composition {
    /// 校验并冻结一组 (键, 百分比)
    pub fn new(entries: Vec<(u32, f64)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(HeascreenError::Composition(
                "no elements in composition".to_string(),
            ));
        }

        for &(key, percent) in &entries {
            if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
                return Err(HeascreenError::Composition(format!(
                    "percentage for key {} must be between 0 and 100, got {}",
                    key, percent
                )));
            }
        }

        let total: f64 = entries.iter().map(|&(_, p)| p).sum();
        if (total - 100.0).abs() >= SUM_TOLERANCE {
            return Err(HeascreenError::Composition(format!(
                "percentages must sum to 100 (within {}), got {}",
                SUM_TOLERANCE, total
            )));
        }

        Ok(Composition { entries })
    }

    /// 从平行的键表和百分比表构造（非交互路径）
    pub fn from_parts(keys: &[u32], percents: &[f64]) -> Result<Self> {
        if keys.len() != percents.len() {
            return Err(HeascreenError::Composition(format!(
                "{} element keys but {} percentages",
                keys.len(),
                percents.len()
            )));
        }
        Composition::new(keys.iter().copied().zip(percents.iter().copied()).collect())
    }

    /// 选择顺序下的 (键, 百分比)
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// 选择顺序下的元素键
    pub fn keys(&self) -> Vec<u32> {
        self.entries.iter().map(|&(k, _)| k).collect()
    }

    pub fn percent(&self, key: u32) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 摩尔分数 c_i = p_i / Σp（保持选择顺序，总和为 1）
    pub fn mole_fractions(&self) -> Vec<(u32, f64)> {
        let total: f64 = self.entries.iter().map(|&(_, p)| p).sum();
        self.entries
            .iter()
            .map(|&(key, percent)| (key, percent / total))
            .collect()
    }
}
