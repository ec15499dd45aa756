//! # 执行选项
//!
//! 批次拆分方式、执行顺序、并行轴以及日志详细程度。
//! 全部实现 `FromStr`，由 `clap` 直接用于参数解析。
//!
//! ## 依赖关系
//! - 被 `batch/`, `cli/`, `utils/` 使用

use crate::error::BatcherError;
use crate::format::value::{NEW_LINE, UNIX_NEW_LINE, WINDOWS_NEW_LINE};
use std::fmt;
use std::str::FromStr;

/// 文件/标准输入内容拆分为批次的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchSeparation {
    /// 按命令行参数规则拆分（支持引号）
    #[default]
    CommandLine,
    NewLine,
    WindowsNewLine,
    UnixNewLine,
    Pipe,
    SemiColon,
    Comma,
}

impl BatchSeparation {
    /// 字面量分隔符；`CommandLine` 没有固定分隔符
    pub fn separator(self) -> Option<&'static str> {
        match self {
            BatchSeparation::CommandLine => None,
            BatchSeparation::NewLine => Some(NEW_LINE),
            BatchSeparation::WindowsNewLine => Some(WINDOWS_NEW_LINE),
            BatchSeparation::UnixNewLine => Some(UNIX_NEW_LINE),
            BatchSeparation::Pipe => Some("|"),
            BatchSeparation::SemiColon => Some(";"),
            BatchSeparation::Comma => Some(","),
        }
    }
}

impl FromStr for BatchSeparation {
    type Err = BatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "commandline" | "cl" => Ok(BatchSeparation::CommandLine),
            "newline" | "nl" => Ok(BatchSeparation::NewLine),
            "windowsnewline" | "wnl" => Ok(BatchSeparation::WindowsNewLine),
            "unixnewline" | "unl" => Ok(BatchSeparation::UnixNewLine),
            "pipe" => Ok(BatchSeparation::Pipe),
            "semicolon" => Ok(BatchSeparation::SemiColon),
            "comma" => Ok(BatchSeparation::Comma),
            _ => Err(BatcherError::InvalidBatchSeparation(s.to_string())),
        }
    }
}

/// 外层循环是批次还是命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionOrder {
    /// 先对一个批次执行所有命令
    #[default]
    Batch,
    /// 先对所有批次执行一个命令
    Command,
}

impl FromStr for ExecutionOrder {
    type Err = BatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batch" | "b" => Ok(ExecutionOrder::Batch),
            "command" | "c" => Ok(ExecutionOrder::Command),
            _ => Err(BatcherError::InvalidArgument(format!(
                "execution order '{}' (expected batch or command)",
                s
            ))),
        }
    }
}

/// 并行度作用的轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelize {
    #[default]
    Commands,
    Batches,
}

impl FromStr for Parallelize {
    type Err = BatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "commands" | "command" | "c" => Ok(Parallelize::Commands),
            "batches" | "batch" | "b" => Ok(Parallelize::Batches),
            _ => Err(BatcherError::InvalidArgument(format!(
                "parallelize '{}' (expected commands or batches)",
                s
            ))),
        }
    }
}

/// 报告详细程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Detailed,
}

impl FromStr for Verbosity {
    type Err = BatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "q" => Ok(Verbosity::Quiet),
            "normal" | "n" => Ok(Verbosity::Normal),
            "detailed" | "d" => Ok(Verbosity::Detailed),
            _ => Err(BatcherError::InvalidArgument(format!(
                "verbosity '{}' (expected quiet, normal or detailed)",
                s
            ))),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Quiet => write!(f, "quiet"),
            Verbosity::Normal => write!(f, "normal"),
            Verbosity::Detailed => write!(f, "detailed"),
        }
    }
}
