//! # run 子命令 CLI 定义
//!
//! 对每个 (命令, 批次) 组合执行一次命令
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use crate::models::{BatchSeparation, Command, ExecutionOrder, FileEncoding, Parallelize, Verbosity};

use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Commands to execute, as 'executable|arguments'.
    /// Arguments may contain {0}, {1}, ... for batch values.
    /// Executable '>> path' appends to and '> path' overwrites a file;
    /// an empty executable writes to the console
    #[arg(short = 'c', long = "commands", num_args = 1.., required = true)]
    pub commands: Vec<Command>,

    // ─────────────────────────────────────────────────────────────
    // Batch sources
    // ─────────────────────────────────────────────────────────────
    /// Batches of values, each split by the batch value separator
    #[arg(short = 'b', long = "batches", num_args = 1..)]
    pub batches: Vec<String>,

    /// Files containing batches
    #[arg(long = "batches-files", visible_alias = "bf", num_args = 1..)]
    pub batches_files: Vec<PathBuf>,

    /// Read batches from standard input
    #[arg(long = "batches-stdin", visible_alias = "bsi", default_value_t = false)]
    pub batches_stdin: bool,

    /// How batches are separated in files and standard input:
    /// command-line, new-line, windows-new-line, unix-new-line, pipe, semicolon, comma
    #[arg(long = "batch-separation", visible_alias = "bs", default_value = "command-line")]
    pub batch_separation: BatchSeparation,

    /// Separator between the values of a batch
    #[arg(long = "batch-value-separator", visible_alias = "bvs", default_value = ",")]
    pub batch_value_separator: String,

    /// Only run batches satisfying the condition, e.g. 'CI:{0}|<release/'
    #[arg(long = "if")]
    pub condition: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Working directory for processes and relative redirect paths
    #[arg(short = 'd', long = "root-directory")]
    pub root_directory: Option<PathBuf>,

    /// Outer loop of execution: batch or command
    #[arg(short = 'e', long = "execution-order", default_value = "batch")]
    pub execution_order: ExecutionOrder,

    /// Maximum degree of parallelism: a number or 'all'
    #[arg(long = "max-parallelism", visible_alias = "mp", default_value = "1")]
    pub max_parallelism: String,

    /// Axis to run in parallel: commands or batches
    #[arg(short = 'p', long = "parallelize", default_value = "commands")]
    pub parallelize: Parallelize,

    // ─────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────
    /// Logging verbosity: quiet, normal or detailed
    #[arg(long = "logging-verbosity", visible_alias = "lv", default_value_t = Verbosity::Normal)]
    pub verbosity: Verbosity,

    /// Encoding of redirected files: utf-8, utf-8-bom, utf-16le, utf-16be
    #[arg(long = "file-encoding", visible_alias = "fe", default_value = "utf-8")]
    pub file_encoding: FileEncoding,

    /// File used by redirect commands that specify no path
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,
}
