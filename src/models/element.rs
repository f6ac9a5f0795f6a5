//! # 元素性质数据模型
//!
//! 定义单个元素的物理性质记录和按原子序数索引的性质表。
//! 所有按元素查询性质的路径都经过显式存在性检查，键不存在时
//! 返回 `MissingProperty` 错误而不是 panic。
//!
//! ## 依赖关系
//! - 被 `parsers/properties.rs` 构造
//! - 被 `alloy/` 和 `commands/` 查询
//! - 无外部模块依赖

use crate::error::{HeascreenError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// 单个元素的物理性质记录
///
/// 仅用于展示的列（密度、硬度、模量、中子吸收截面）在源表
/// 缺失时为 NaN；参与计算的列通过 `PropertyTable` 的检查访问器读取。
#[derive(Debug, Clone, Serialize)]
pub struct ElementRecord {
    /// 原子序数（唯一键）
    #[serde(rename = "Atomic Number")]
    pub atomic_number: u32,

    /// 元素符号
    #[serde(rename = "Element")]
    pub symbol: String,

    /// 原子量 (g/mol)
    #[serde(rename = "Atomic Weight")]
    pub atomic_weight: f64,

    /// 密度 (g/cm³)
    #[serde(rename = "Density")]
    pub density: f64,

    /// 原子半径 (Å)
    #[serde(rename = "Atomic Radius")]
    pub atomic_radius: f64,

    /// 熔点 (K)
    #[serde(rename = "Melting Point")]
    pub melting_point: f64,

    /// 晶格常数 (Å)
    #[serde(rename = "Lattice Constant")]
    pub lattice_constant: f64,

    /// 维氏硬度 (HV)
    #[serde(rename = "Vickers Hardness")]
    pub vickers_hardness: f64,

    /// 杨氏模量 (GPa)
    #[serde(rename = "Young's Modulus")]
    pub youngs_modulus: f64,

    /// 热中子吸收截面 (barn)
    #[serde(rename = "Thermal Neutron Absorption Cross-section")]
    pub neutron_cross_section: f64,

    /// 价电子浓度
    #[serde(rename = "Valence Electron Concentration")]
    pub valence_electrons: f64,

    /// Pauling 电负性
    #[serde(rename = "Pauling Electronegativity")]
    pub electronegativity: f64,
}

/// 按原子序数索引的元素性质表
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    records: BTreeMap<u32, ElementRecord>,
}

impl PropertyTable {
    pub fn new() -> Self {
        PropertyTable {
            records: BTreeMap::new(),
        }
    }

    /// 插入一条记录（同键覆盖）
    pub fn insert(&mut self, record: ElementRecord) {
        self.records.insert(record.atomic_number, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 表中可用的元素键（升序）
    pub fn available_keys(&self) -> Vec<u32> {
        self.records.keys().copied().collect()
    }

    pub fn get(&self, key: u32) -> Option<&ElementRecord> {
        self.records.get(&key)
    }

    /// 按键升序遍历记录
    pub fn records(&self) -> impl Iterator<Item = &ElementRecord> {
        self.records.values()
    }

    /// 键不存在时报告正在查询的性质名
    fn record(&self, key: u32, property: &str) -> Result<&ElementRecord> {
        self.records
            .get(&key)
            .ok_or_else(|| HeascreenError::MissingProperty {
                key,
                property: property.to_string(),
            })
    }

    // ─────────────────────────────────────────────────────────────
    // 检查访问器（参与计算的列）
    // ─────────────────────────────────────────────────────────────

    pub fn symbol(&self, key: u32) -> Result<&str> {
        Ok(&self.record(key, "Element")?.symbol)
    }

    pub fn atomic_weight(&self, key: u32) -> Result<f64> {
        Ok(self.record(key, "Atomic Weight")?.atomic_weight)
    }

    pub fn atomic_radius(&self, key: u32) -> Result<f64> {
        Ok(self.record(key, "Atomic Radius")?.atomic_radius)
    }

    pub fn melting_point(&self, key: u32) -> Result<f64> {
        Ok(self.record(key, "Melting Point")?.melting_point)
    }

    pub fn lattice_constant(&self, key: u32) -> Result<f64> {
        Ok(self.record(key, "Lattice Constant")?.lattice_constant)
    }

    pub fn valence_electrons(&self, key: u32) -> Result<f64> {
        Ok(self.record(key, "Valence Electron Concentration")?.valence_electrons)
    }

    pub fn electronegativity(&self, key: u32) -> Result<f64> {
        Ok(self.record(key, "Pauling Electronegativity")?.electronegativity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromium() -> ElementRecord {
        ElementRecord {
            atomic_number: 24,
            symbol: "Cr".to_string(),
            atomic_weight: 51.9961,
            density: 7.19,
            atomic_radius: 1.28,
            melting_point: 2180.0,
            lattice_constant: 2.88,
            vickers_hardness: 1060.0,
            youngs_modulus: 279.0,
            neutron_cross_section: 3.1,
            valence_electrons: 6.0,
            electronegativity: 1.66,
        }
    }

    #[test]
    fn test_accessors_return_stored_values() {
        let mut table = PropertyTable::new();
        table.insert(chromium());

        assert_eq!(table.symbol(24).unwrap(), "Cr");
        assert!((table.melting_point(24).unwrap() - 2180.0).abs() < 1e-12);
        assert!((table.valence_electrons(24).unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_key_names_key_and_property() {
        let table = PropertyTable::new();

        let err = table.melting_point(99).unwrap_err();
        match err {
            HeascreenError::MissingProperty { key, property } => {
                assert_eq!(key, 99);
                assert_eq!(property, "Melting Point");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_available_keys_sorted() {
        let mut table = PropertyTable::new();
        let mut zr = chromium();
        zr.atomic_number = 40;
        zr.symbol = "Zr".to_string();
        table.insert(zr);
        table.insert(chromium());

        assert_eq!(table.available_keys(), vec![24, 40]);
    }

    #[test]
    fn test_insert_overwrites_same_key() {
        let mut table = PropertyTable::new();
        table.insert(chromium());
        let mut updated = chromium();
        updated.melting_point = 2200.0;
        table.insert(updated);

        assert_eq!(table.len(), 1);
        assert!((table.melting_point(24).unwrap() - 2200.0).abs() < 1e-12);
    }
}
