//! # 统一错误处理模块
//!
//! 定义 cbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use crate::format::FormatFailure;
use thiserror::Error;

/// cbatch 统一错误类型
#[derive(Error, Debug)]
pub enum BatcherError {
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

    #[error("Failed to read standard input")]
    StdinError(#[source] std::io::Error),

    #[error("Failed to write standard output")]
    StdoutError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid batch separation value: {0}")]
    InvalidBatchSeparation(String),

    #[error("Invalid string comparison: {0}")]
    InvalidComparison(String),

    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("No path specified for redirect command '{command}' and no output file configured")]
    NoOutputPath { command: String },

    #[error("Argument {0} did not follow the format \"{{command}}[|{{arguments}}]\"")]
    InvalidCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 格式化错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input string was not in a correct format: {template}\nReason: {reason}")]
    Format { template: String, reason: String },

    #[error("{0}")]
    FormatFailed(FormatFailure),

    // ─────────────────────────────────────────────────────────────
    // 模式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern: {pattern}\nReason: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid regular expression")]
    InvalidRegex(#[from] regex::Error),

    // ─────────────────────────────────────────────────────────────
    // 外部进程错误
    // ─────────────────────────────────────────────────────────────
    #[error("Could not find the executable: {executable}")]
    ExecutableNotFound {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start process: {executable}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read output of process: {executable}")]
    ProcessIo {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatcherError>;
