//! # 统一错误处理模块
//!
//! 定义 heascreen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// heascreen 统一错误类型
#[derive(Error, Debug)]
pub enum HeascreenError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Input stream closed unexpectedly")]
    InputClosed,

    // ─────────────────────────────────────────────────────────────
    // 数据加载错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to load data table: {path}\nReason: {reason}")]
    DataLoad { path: String, reason: String },

    #[error("Required column '{column}' not found in: {path}")]
    MissingColumn { column: String, path: String },

    #[error("Invalid element key '{0}' (expected a decimal or hexadecimal atomic number)")]
    InvalidKey(String),

    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Property '{property}' is not available for element key {key}")]
    MissingProperty { key: u32, property: String },

    #[error("Invalid composition: {0}")]
    Composition(String),

    #[error("Descriptor domain error: {0}")]
    Domain(String),

    // ─────────────────────────────────────────────────────────────
    // 导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write output: {path}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HeascreenError>;
