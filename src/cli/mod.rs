//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 对每个 (命令, 批次) 组合执行命令
//! - `match`: 将输入与模式匹配并映射为批次
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, matching

pub mod matching;
pub mod run;

use clap::{Parser, Subcommand};

/// cbatch - 命令行批量执行工具
#[derive(Parser)]
#[command(name = "cbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Runs commands over batches of values and maps inputs to batches", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run every command once for every batch of values
    Run(run::RunArgs),

    /// Match the input against patterns and map it to batches
    Match(matching::MatchArgs),
}
