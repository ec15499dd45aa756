//! # 美化输出工具
//!
//! 状态标签输出与进程、条件事件的文本行。
//!
//! 事件行只负责生成文本，由 `utils/reporter.rs` 在暂停进度条后打印。
//!
//! ## 依赖关系
//! - 被 `commands/`, `utils/reporter.rs` 使用
//! - 使用 `batch/dispatcher.rs` 的进程信息
//! - 使用 `colored` crate

use crate::batch::{ProcessInfo, ProcessOutcome};
use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

// ─────────────────────────────────────────────────────────────
// 进程事件
// ─────────────────────────────────────────────────────────────

pub fn started_line(process: &ProcessInfo) -> String {
    format!(
        "Started: {} {} ({})",
        process.executable, process.arguments, process.id
    )
}

/// 进程输出行，详细模式下带进程前缀
pub fn message_line(process: &ProcessInfo, line: &str, detailed: bool) -> String {
    if detailed {
        format!("{} ({}) reported:\n{}", process.executable, process.id, line)
    } else {
        line.to_string()
    }
}

pub fn exited_line(outcome: &ProcessOutcome) -> String {
    let code = if outcome.succeeded() {
        outcome.exit_code.to_string().green()
    } else {
        outcome.exit_code.to_string().red()
    };
    format!(
        "{} ({}) exited with exit code: {}",
        outcome.process.executable, outcome.process.id, code
    )
}

pub fn failed_line(outcome: &ProcessOutcome) -> String {
    let process = &outcome.process;
    format!(
        "{} {} ({}) failed with {}",
        process.executable, process.arguments, process.id, outcome.exit_code
    )
}

// ─────────────────────────────────────────────────────────────
// 条件求值
// ─────────────────────────────────────────────────────────────

pub fn evaluation_line(lhs: &str, operator: &str, rhs: &str, result: bool) -> String {
    let result = if result {
        "true".green()
    } else {
        "false".yellow()
    };
    format!("Evaluated '{}' {} '{}' to {}", lhs, operator, rhs, result)
}
