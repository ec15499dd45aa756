//! # 数据模型模块
//!
//! 定义命令模板、批次值、执行选项与运行配置。
//!
//! ## 依赖关系
//! - 被 `batch/`, `matching/`, `commands/` 使用
//! - 子模块: command, values, options, encoding, config

pub mod command;
pub mod config;
pub mod encoding;
pub mod options;
pub mod values;

pub use command::{Command, CommandTarget};
pub use config::{BatchConfig, MatchConfig};
pub use encoding::FileEncoding;
pub use options::{BatchSeparation, ExecutionOrder, Parallelize, Verbosity};
pub use values::Values;
