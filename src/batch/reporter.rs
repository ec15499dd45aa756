//! # 批量执行报告接口
//!
//! 由多个工作线程并发调用，实现必须线程安全。
//!
//! ## 依赖关系
//! - 被 `batch/` 各子模块调用
//! - 由 `utils/reporter.rs` 实现

use super::dispatcher::{ProcessInfo, ProcessOutcome};
use std::path::Path;

/// 批量执行过程中的事件
pub trait BatchRunnerReporter: Send + Sync {
    fn started(&self, process: &ProcessInfo);

    /// 进程输出的一行
    fn message(&self, process: &ProcessInfo, line: &str);

    fn exited(&self, outcome: &ProcessOutcome);

    fn file_not_found(&self, path: &Path);

    /// 以非零退出码结束的进程
    fn error(&self, outcome: &ProcessOutcome);

    /// 即将执行的 (命令, 批次) 总数
    fn scheduled(&self, _total: usize) {}

    /// 一个 (命令, 批次) 单元执行完成
    fn unit_completed(&self) {}
}

/// 条件求值事件
pub trait ConditionReporter: Send + Sync {
    fn evaluated(&self, lhs: &str, operator: &str, rhs: &str, result: bool);
}
