//! # run 命令实现
//!
//! 对每个 (命令, 批次) 组合执行命令，所有进程以 0 退出时返回 0。
//!
//! ## 功能
//! - 按批次值分隔符解析 `--batches`
//! - 解析最大并行度 (`all` 或数字)
//! - 组装进程启动器、文件系统与报告器
//! - Detailed 级别下输出失败进程汇总表
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `batch/runner.rs`, `utils/reporter.rs`, `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner};
use crate::cli::run::RunArgs;
use crate::error::{BatcherError, Result};
use crate::models::{BatchConfig, Values, Verbosity};
use crate::sinks::{ConsoleOutputter, StdinInputter};
use crate::system::{DiskFileSystem, FileSystem, SystemProcessRunner};
use crate::utils::output;
use crate::utils::reporter::ConsoleReporter;

use std::sync::Arc;
use tabled::{Table, Tabled};

const ALL_PROCESSORS: &str = "all";

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<i32> {
    let file_system = Arc::new(DiskFileSystem::new());
    let root_directory = match args.root_directory {
        Some(dir) => dir,
        None => file_system.current_directory()?,
    };

    let batches = args
        .batches
        .iter()
        .map(|b| Values::parse(b, &args.batch_value_separator))
        .collect();

    let config = BatchConfig {
        commands: args.commands,
        batches,
        batch_files: args.batches_files,
        batches_from_stdin: args.batches_stdin,
        batch_separation: args.batch_separation,
        batch_value_separator: args.batch_value_separator,
        condition: args.condition,
        root_directory,
        execution_order: args.execution_order,
        parallelize: args.parallelize,
        max_degree_of_parallelism: parse_max_parallelism(&args.max_parallelism, num_cpus::get())?,
        file_encoding: args.file_encoding,
        output_file_path: args.output_file,
    };

    if args.verbosity == Verbosity::Detailed {
        output::print_header("Batch Run");
        output::print_info(&format!(
            "{} command(s), parallelism {} over {:?}, {:?}-first",
            config.commands.len(),
            config.max_degree_of_parallelism,
            config.parallelize,
            config.execution_order,
        ));
    }

    let reporter = Arc::new(ConsoleReporter::new(args.verbosity));
    let runner = BatchRunner::new(
        Arc::new(SystemProcessRunner),
        file_system,
        Arc::new(StdinInputter),
        Arc::new(ConsoleOutputter),
        reporter.clone(),
        reporter.clone(),
    );

    let result = runner.run(&config);
    reporter.finish();
    let result = result?;

    if args.verbosity == Verbosity::Detailed {
        print_summary(&result);
    }

    Ok(if result.succeeded() { 0 } else { -1 })
}

/// 解析最大并行度，限制在 `1..=processors`
fn parse_max_parallelism(value: &str, processors: usize) -> Result<usize> {
    let processors = processors.max(1);
    if value.eq_ignore_ascii_case(ALL_PROCESSORS) {
        return Ok(processors);
    }

    let degree: usize = value.trim().parse().map_err(|_| {
        BatcherError::InvalidArgument(format!(
            "max parallelism '{}' (expected a number or '{}')",
            value, ALL_PROCESSORS
        ))
    })?;
    Ok(degree.clamp(1, processors))
}

fn print_summary(result: &BatchResult) {
    #[derive(Tabled)]
    struct FailureRow {
        #[tabled(rename = "Executable")]
        executable: String,
        #[tabled(rename = "Arguments")]
        arguments: String,
        #[tabled(rename = "PID")]
        id: u32,
        #[tabled(rename = "Exit code")]
        exit_code: i32,
    }

    let rows: Vec<FailureRow> = result
        .failures()
        .map(|f| FailureRow {
            executable: f.process.executable.clone(),
            arguments: f.process.arguments.clone(),
            id: f.process.id,
            exit_code: f.exit_code,
        })
        .collect();

    if rows.is_empty() {
        output::print_success(&format!("All {} process(es) exited with 0", result.total()));
        return;
    }

    output::print_header(&format!("{} of {} Processes Failed", rows.len(), result.total()));
    let table = Table::new(&rows);
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_parallelism() {
        assert_eq!(parse_max_parallelism("all", 8).unwrap(), 8);
        assert_eq!(parse_max_parallelism("ALL", 8).unwrap(), 8);
        assert_eq!(parse_max_parallelism("4", 8).unwrap(), 4);
        assert_eq!(parse_max_parallelism("32", 8).unwrap(), 8);
        assert_eq!(parse_max_parallelism("0", 8).unwrap(), 1);
        assert!(parse_max_parallelism("many", 8).is_err());
    }
}
