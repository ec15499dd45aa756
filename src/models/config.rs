//! # 运行配置
//!
//! 批量执行与模式匹配两条路径的强类型配置。
//! 由 `commands/` 根据命令行参数填充，核心逻辑不依赖参数解析方式。
//!
//! ## 依赖关系
//! - 被 `batch/`, `matching/`, `commands/` 使用

use super::{BatchSeparation, Command, ExecutionOrder, FileEncoding, Parallelize, Values};
use std::path::PathBuf;

/// 批量执行配置
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub commands: Vec<Command>,
    pub batches: Vec<Values>,
    pub batch_files: Vec<PathBuf>,
    pub batches_from_stdin: bool,
    pub batch_separation: BatchSeparation,
    pub batch_value_separator: String,
    /// 批次过滤条件
    pub condition: Option<String>,
    pub root_directory: PathBuf,
    pub execution_order: ExecutionOrder,
    pub parallelize: Parallelize,
    pub max_degree_of_parallelism: usize,
    pub file_encoding: FileEncoding,
    /// 未指定路径的重定向命令写入的文件
    pub output_file_path: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            batches: Vec::new(),
            batch_files: Vec::new(),
            batches_from_stdin: false,
            batch_separation: BatchSeparation::CommandLine,
            batch_value_separator: ",".to_string(),
            condition: None,
            root_directory: PathBuf::from("."),
            execution_order: ExecutionOrder::Batch,
            parallelize: Parallelize::Commands,
            max_degree_of_parallelism: 1,
            file_encoding: FileEncoding::Utf8,
            output_file_path: None,
        }
    }
}

/// 模式匹配配置
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// `regex => value[|value]*` 形式的模式行
    pub patterns: Vec<String>,
    pub inputs: Vec<String>,
    pub use_stdin: bool,
    /// 应用到每个值的格式模板
    pub format: Option<String>,
    pub batch_separator: char,
    pub batch_value_separator: char,
    pub merge_delimiter: Option<String>,
    pub merge_format: Option<String>,
    pub working_directory: PathBuf,
    pub file_encoding: FileEncoding,
    pub output_path: Option<PathBuf>,
    /// 追加到输出文件而非覆盖
    pub append: bool,
    pub skip_console_output: bool,
}

impl MatchConfig {
    /// 是否合并所有输出为一条记录，合并格式或合并分隔符任一指定即开启
    pub fn is_merging(&self) -> bool {
        self.merge_format.is_some() || self.merge_delimiter.is_some()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            inputs: Vec::new(),
            use_stdin: false,
            format: None,
            batch_separator: '|',
            batch_value_separator: ',',
            merge_delimiter: None,
            merge_format: None,
            working_directory: PathBuf::from("."),
            file_encoding: FileEncoding::Utf8,
            output_path: None,
            append: false,
            skip_console_output: false,
        }
    }
}
