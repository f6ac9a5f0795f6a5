//! # 解析器模块
//!
//! 加载元素性质表与 Miedema 二元混合焓矩阵（CSV / XLSX）。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: table, properties, miedema

pub mod miedema;
pub mod properties;
pub mod table;

pub use table::parse_key;
