//! # 数据模型模块
//!
//! 定义元素性质表、二元混合焓矩阵和合金组成的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`alloy/`、`commands/` 使用
//! - 子模块: element, enthalpy, composition

pub mod composition;
pub mod element;
pub mod enthalpy;

pub use composition::Composition;
pub use element::{ElementRecord, PropertyTable};
pub use enthalpy::EnthalpyMatrix;
