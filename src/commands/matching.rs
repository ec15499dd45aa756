//! # match 命令实现
//!
//! 组装输入源、输出目标与报告器后运行模式匹配引擎。
//!
//! ## 依赖关系
//! - 使用 `cli/matching.rs` 定义的参数
//! - 使用 `matching/engine.rs`, `sinks/`, `utils/reporter.rs`

use crate::cli::matching::MatchArgs;
use crate::error::Result;
use crate::matching::MatchEngine;
use crate::models::MatchConfig;
use crate::sinks::{
    AggregateOutputter, ConsoleOutputter, FileOutputter, FixedInputter, Inputter, Outputter,
    StdinInputter,
};
use crate::system::{DiskFileSystem, FileSystem};
use crate::utils::reporter::ConsoleReporter;

use std::sync::Arc;

/// 执行 match 命令
pub fn execute(args: MatchArgs) -> Result<i32> {
    let file_system = Arc::new(DiskFileSystem::new());
    let working_directory = match args.working_directory {
        Some(dir) => dir,
        None => file_system.current_directory()?,
    };

    let config = MatchConfig {
        patterns: args.patterns,
        inputs: args.inputs,
        use_stdin: args.input_stdin,
        format: args.format,
        batch_separator: args.batch_separator,
        batch_value_separator: args.batch_value_separator,
        merge_delimiter: args.merge_delimiter,
        merge_format: args.merge_format,
        working_directory,
        file_encoding: args.file_encoding,
        output_path: args.output_path,
        append: args.append,
        skip_console_output: args.skip_console_output,
    };

    let mut outputters: Vec<Box<dyn Outputter>> = Vec::new();
    if !config.skip_console_output {
        outputters.push(Box::new(ConsoleOutputter));
    }
    if let Some(path) = &config.output_path {
        outputters.push(Box::new(FileOutputter::new(
            path.clone(),
            config.append,
            config.file_encoding,
            file_system,
        )));
    }

    let inputter: Arc<dyn Inputter> = if config.use_stdin {
        Arc::new(StdinInputter)
    } else {
        Arc::new(FixedInputter::new(config.inputs.clone()))
    };

    let engine = MatchEngine::new(
        inputter,
        Arc::new(AggregateOutputter::new(outputters)),
        Arc::new(ConsoleReporter::new(args.verbosity)),
    );

    Ok(engine.run(&config))
}
