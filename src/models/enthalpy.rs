//! # 二元混合焓矩阵数据模型
//!
//! 存储 Miedema 模型给出的元素对混合焓 (kJ/mol)。源数据允许
//! 不对称或缺项：查询时先探测 (i, j) 再探测 (j, i)，缺失或 NaN
//! 视为无相互作用（贡献 0），不是错误。
//!
//! ## 依赖关系
//! - 被 `parsers/miedema.rs` 构造
//! - 被 `alloy/calculator.rs` 查询
//! - 无外部模块依赖

use std::collections::HashMap;

/// 元素对 → 混合焓 (kJ/mol) 的映射
#[derive(Debug, Clone, Default)]
pub struct EnthalpyMatrix {
    map: HashMap<(u32, u32), f64>,
}

impl EnthalpyMatrix {
    pub fn new() -> Self {
        EnthalpyMatrix {
            map: HashMap::new(),
        }
    }

    /// 插入一个有序对的值；NaN 直接丢弃
    pub fn insert(&mut self, i: u32, j: u32, value: f64) {
        if !value.is_nan() {
            self.map.insert((i, j), value);
        }
    }

    /// 先按 (i, j) 查询，再按 (j, i) 查询；都缺失返回 None
    pub fn lookup(&self, i: u32, j: u32) -> Option<f64> {
        self.map
            .get(&(i, j))
            .or_else(|| self.map.get(&(j, i)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 找出两个方向都存在但数值不一致的元素对
    ///
    /// 返回 (i, j, H_ij, H_ji)，i < j。源数据应当对称，不一致
    /// 说明矩阵有录入错误，调用方负责警告。
    pub fn symmetry_violations(&self, tolerance: f64) -> Vec<(u32, u32, f64, f64)> {
        let mut violations = Vec::new();
        for (&(i, j), &forward) in &self.map {
            if i < j {
                if let Some(&backward) = self.map.get(&(j, i)) {
                    if (forward - backward).abs() > tolerance {
                        violations.push((i, j, forward, backward));
                    }
                }
            }
        }
        violations.sort_by_key(|&(i, j, _, _)| (i, j));
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_probes_both_orderings() {
        let mut matrix = EnthalpyMatrix::new();
        matrix.insert(27, 24, -4.0);

        // 仅存 (27, 24)，但两个方向都能查到
        assert_eq!(matrix.lookup(24, 27), Some(-4.0));
        assert_eq!(matrix.lookup(27, 24), Some(-4.0));
    }

    #[test]
    fn test_missing_pair_is_none() {
        let matrix = EnthalpyMatrix::new();
        assert_eq!(matrix.lookup(24, 27), None);
    }

    #[test]
    fn test_nan_is_dropped() {
        let mut matrix = EnthalpyMatrix::new();
        matrix.insert(24, 27, f64::NAN);

        assert!(matrix.is_empty());
        assert_eq!(matrix.lookup(24, 27), None);
    }

    #[test]
    fn test_symmetry_violations_flagged() {
        let mut matrix = EnthalpyMatrix::new();
        matrix.insert(24, 27, -4.0);
        matrix.insert(27, 24, -4.5);
        matrix.insert(24, 40, -12.0);
        matrix.insert(40, 24, -12.0);

        let violations = matrix.symmetry_violations(1e-9);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, 24);
        assert_eq!(violations[0].1, 27);
    }
}
