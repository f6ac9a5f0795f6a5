//! # 合金筛选模块
//!
//! 高熵合金描述符计算、经验判据分类、摘要导出与 LAMMPS 脚本生成。
//!
//! ## 子模块
//! - `selection`: 元素选择与交互式组成录入
//! - `calculator`: 热力学与结构描述符计算
//! - `criteria`: 固溶体形成判据
//! - `export`: 摘要表导出
//! - `lammps`: LAMMPS 输入脚本生成
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型

pub mod calculator;
pub mod criteria;
pub mod export;
pub mod lammps;
pub mod selection;

pub use calculator::{DescriptorSet, PairContribution, GAS_CONSTANT};
pub use criteria::{classify, ChiBand, CriteriaReport, Phase, Verdict};
