//! # match 子命令 CLI 定义
//!
//! 将输入与 `regex => batch[|batch]*` 模式匹配
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/matching.rs`

use crate::models::{FileEncoding, Verbosity};

use clap::Args;
use std::path::PathBuf;

/// match 子命令参数
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Patterns matched in the order specified, as '{regex} => {batch}[|batch]*'.
    /// Quote the regex with ' when it contains the batch separator.
    /// Batches may contain regex group names as {group-name}
    #[arg(short = 'p', long = "patterns", num_args = 1.., required = true)]
    pub patterns: Vec<String>,

    /// Inputs to be matched
    #[arg(short = 'i', long = "input", num_args = 1.., required_unless_present = "input_stdin")]
    pub inputs: Vec<String>,

    /// Read the input from standard input
    #[arg(long = "input-stdin", default_value_t = false, conflicts_with = "inputs")]
    pub input_stdin: bool,

    /// Format applied to each batch, e.g. '::set-output name={0}::{1}'
    #[arg(short = 'f', long = "format")]
    pub format: Option<String>,

    /// Character separating batches in a pattern
    #[arg(long = "batch-separator", visible_alias = "bs", default_value = "|")]
    pub batch_separator: char,

    /// Character separating the values of a batch
    #[arg(long = "batch-value-separator", visible_alias = "bvs", default_value = ",")]
    pub batch_value_separator: char,

    // ─────────────────────────────────────────────────────────────
    // Merging
    // ─────────────────────────────────────────────────────────────
    /// Delimiter placed between the batches of different matches; also enables merging
    #[arg(long = "merge-delimiter", visible_alias = "md")]
    pub merge_delimiter: Option<String>,

    /// Merge all batches into one output using this format (default "{0}")
    #[arg(short = 'm', long = "merge-format")]
    pub merge_format: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────
    /// Directory substituted for {CurrentDirectory}
    #[arg(short = 'd', long = "working-directory")]
    pub working_directory: Option<PathBuf>,

    /// Encoding of the output file: utf-8, utf-8-bom, utf-16le, utf-16be
    #[arg(long = "file-encoding", visible_alias = "fe", default_value = "utf-8")]
    pub file_encoding: FileEncoding,

    /// Also write the output to this file
    #[arg(long = "output-path")]
    pub output_path: Option<PathBuf>,

    /// Append to the output file instead of overwriting it
    #[arg(long = "append", default_value_t = false)]
    pub append: bool,

    /// Do not write the output to the console
    #[arg(long = "skip-console-output", default_value_t = false)]
    pub skip_console_output: bool,

    /// Logging verbosity: quiet, normal or detailed
    #[arg(long = "logging-verbosity", visible_alias = "lv", default_value_t = Verbosity::Normal)]
    pub verbosity: Verbosity,
}
