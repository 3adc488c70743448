//! # 统一错误处理模块
//!
//! 定义 fluidboard 的所有错误类型，使用 `thiserror` 派生。
//!
//! 计算单元内部的物理无效输入（面积 ≤ 0、直径 ≤ 0 等）不属于错误，
//! 由各单元降级为零值结果并附带说明文字；此处只收录真正需要向上传播的错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fluidboard 统一错误类型
#[derive(Error, Debug)]
pub enum FluidError {
    // ─────────────────────────────────────────────────────────────
    // 绑定图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Calculation unit '{id}' is already registered")]
    DuplicateUnit { id: String },

    #[error("Unknown calculation unit: {id}")]
    UnknownUnit { id: String },

    #[error("Unknown input parameter: {id}")]
    UnknownParameter { id: String },

    #[error("Rejected non-finite value {value} for parameter '{id}'")]
    NonFiniteInput { id: String, value: f64 },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 导出与绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Chart rendering failed: {0}")]
    RenderError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FluidError>;
