//! # 批量执行模块
//!
//! 对每个 (命令, 批次) 组合执行一次命令。
//!
//! ## 功能
//! - 从命令行、文件和标准输入解析批次
//! - 按条件过滤批次
//! - 控制台输出、文件重定向或启动外部进程
//! - 双轴有界并行调度
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 子模块: resolver, condition, dispatcher, scheduler, runner, reporter

pub mod condition;
pub mod dispatcher;
pub mod reporter;
pub mod resolver;
pub mod runner;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod fakes;

pub use dispatcher::{ProcessInfo, ProcessOutcome};
pub use reporter::{BatchRunnerReporter, ConditionReporter};
pub use runner::{BatchResult, BatchRunner};
