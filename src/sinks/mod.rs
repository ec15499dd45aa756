//! # 输入源与输出目标
//!
//! 匹配路径的输入（固定列表或标准输入）和输出（控制台、文件、聚合）。
//! 批量执行路径复用控制台输出和标准输入。
//!
//! ## 依赖关系
//! - 被 `matching/`, `batch/`, `commands/` 使用
//! - 子模块: console, file, aggregate, input

pub mod aggregate;
pub mod console;
pub mod file;
pub mod input;

pub use aggregate::AggregateOutputter;
pub use console::ConsoleOutputter;
pub use file::FileOutputter;
pub use input::{FixedInputter, StdinInputter};

use crate::error::Result;

/// 输出一条记录
pub trait Outputter: Send + Sync {
    fn output(&self, contents: &str) -> Result<()>;
}

/// 提供待处理的输入
pub trait Inputter: Send + Sync {
    fn inputs(&self) -> Result<Vec<String>>;
}
