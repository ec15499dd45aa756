//! # 控制台报告器
//!
//! 按日志级别将批量执行、条件求值和模式匹配事件输出到终端。
//!
//! | 事件 | Quiet | Normal | Detailed |
//! |------|-------|--------|----------|
//! | 进程启动 | - | ✓ | ✓ |
//! | 进程输出 | 原样 | 原样 | 带进程前缀 |
//! | 进程退出 | - | - | ✓ |
//! | 进程失败 | - | ✓ | ✓ |
//! | 条件求值 | - | ✓ | ✓ |
//! | 匹配结果 | - | - | ✓ |
//!
//! Detailed 级别下显示已完成单元的进度条，其余输出经 `ProgressBar::suspend` 打印。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块创建并注入
//! - 实现 `batch::reporter` 与 `matching::reporter` 中的接口
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::{output, progress};
use crate::batch::{BatchRunnerReporter, ConditionReporter, ProcessInfo, ProcessOutcome};
use crate::error::BatcherError;
use crate::matching::MatchReporter;
use crate::models::Verbosity;

use indicatif::ProgressBar;
use std::path::Path;
use std::sync::Mutex;

/// 终端报告器
pub struct ConsoleReporter {
    verbosity: Verbosity,
    progress: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            progress: Mutex::new(None),
        }
    }

    fn is_detailed(&self) -> bool {
        self.verbosity == Verbosity::Detailed
    }

    fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        self.progress.lock().ok().and_then(|pb| pb.clone())
    }

    /// 输出时暂停进度条，避免与进度条交错
    fn emit(&self, print: impl FnOnce()) {
        match self.progress_bar() {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }

    /// 结束并清除进度条
    pub fn finish(&self) {
        if let Some(pb) = self.progress.lock().ok().and_then(|mut pb| pb.take()) {
            pb.finish_and_clear();
        }
    }
}

impl BatchRunnerReporter for ConsoleReporter {
    fn started(&self, process: &ProcessInfo) {
        if !self.is_quiet() {
            self.emit(|| println!("{}", output::started_line(process)));
        }
    }

    fn message(&self, process: &ProcessInfo, line: &str) {
        let line = output::message_line(process, line, self.is_detailed());
        self.emit(|| println!("{}", line));
    }

    fn exited(&self, outcome: &ProcessOutcome) {
        if self.is_detailed() {
            self.emit(|| println!("{}", output::exited_line(outcome)));
        }
    }

    fn file_not_found(&self, path: &Path) {
        self.emit(|| output::print_warning(&format!("File not found: {}", path.display())));
    }

    fn error(&self, outcome: &ProcessOutcome) {
        if !self.is_quiet() {
            self.emit(|| output::print_error(&output::failed_line(outcome)));
        }
    }

    fn scheduled(&self, total: usize) {
        if self.is_detailed() && total > 1 {
            if let Ok(mut pb) = self.progress.lock() {
                *pb = Some(progress::create_progress_bar(total as u64, "Dispatching"));
            }
        }
    }

    fn unit_completed(&self) {
        if let Some(pb) = self.progress_bar() {
            pb.inc(1);
        }
    }
}

impl ConditionReporter for ConsoleReporter {
    fn evaluated(&self, lhs: &str, operator: &str, rhs: &str, result: bool) {
        if !self.is_quiet() {
            self.emit(|| println!("{}", output::evaluation_line(lhs, operator, rhs, result)));
        }
    }
}

impl MatchReporter for ConsoleReporter {
    fn exception(&self, error: &BatcherError) {
        output::print_error(&error.to_string());
    }

    fn report(&self, message: &str) {
        if self.is_detailed() {
            output::print_info(message);
        }
    }
}
