//! # cbatch - 命令行批量执行工具
//!
//! 对一组批次值逐一执行命令模板，或将输入映射为批次。
//!
//! ## 子命令
//! - `run`   - 对每个 (命令, 批次) 组合执行命令、写文件或输出到控制台
//! - `match` - 将输入与正则模式匹配并输出格式化后的批次
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (批次解析、条件、分发、调度)
//!   │     ├── matching/  (模式解析与匹配)
//!   │     ├── format/    (模板格式化)
//!   │     ├── sinks/     (输入源与输出目标)
//!   │     ├── system/    (进程与文件系统)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、报告器)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod format;
mod matching;
mod models;
mod sinks;
mod system;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli.command) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
