//! # 批量执行器
//!
//! 解析批次、按条件过滤，再对每个 (命令, 批次) 单元调度执行。
//!
//! ## 功能
//! - 合并命令行、批次文件与标准输入中的批次
//! - 条件过滤
//! - 双轴有界并行调度
//! - 收集已退出进程并汇总失败
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `batch/` 的解析、条件、分发与调度子模块

use super::condition::ConditionEvaluator;
use super::dispatcher::{CommandDispatcher, DispatchSettings, ProcessOutcome};
use super::reporter::{BatchRunnerReporter, ConditionReporter};
use super::resolver::BatchSourceResolver;
use super::scheduler;
use crate::error::Result;
use crate::models::BatchConfig;
use crate::sinks::{Inputter, Outputter};
use crate::system::{FileSystem, ProcessRunner};

use std::sync::{Arc, Mutex};

/// 批量执行结果
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 所有已退出的进程，顺序与完成顺序一致
    pub processes: Vec<ProcessOutcome>,
}

impl BatchResult {
    /// 以非零退出码结束的进程
    pub fn failures(&self) -> impl Iterator<Item = &ProcessOutcome> {
        self.processes.iter().filter(|p| !p.succeeded())
    }

    pub fn total(&self) -> usize {
        self.processes.len()
    }

    /// 所有进程均以 0 退出
    pub fn succeeded(&self) -> bool {
        self.processes.iter().all(ProcessOutcome::succeeded)
    }
}

/// 批量执行器
pub struct BatchRunner {
    process_runner: Arc<dyn ProcessRunner>,
    file_system: Arc<dyn FileSystem>,
    stdin: Arc<dyn Inputter>,
    console: Arc<dyn Outputter>,
    reporter: Arc<dyn BatchRunnerReporter>,
    condition_reporter: Arc<dyn ConditionReporter>,
}

impl BatchRunner {
    pub fn new(
        process_runner: Arc<dyn ProcessRunner>,
        file_system: Arc<dyn FileSystem>,
        stdin: Arc<dyn Inputter>,
        console: Arc<dyn Outputter>,
        reporter: Arc<dyn BatchRunnerReporter>,
        condition_reporter: Arc<dyn ConditionReporter>,
    ) -> Self {
        Self {
            process_runner,
            file_system,
            stdin,
            console,
            reporter,
            condition_reporter,
        }
    }

    /// 执行一次批量运行
    pub fn run(&self, config: &BatchConfig) -> Result<BatchResult> {
        let resolver = BatchSourceResolver::new(
            self.file_system.clone(),
            self.stdin.clone(),
            self.reporter.clone(),
        );
        let batches = resolver.resolve(
            &config.batches,
            &config.batch_files,
            config.batches_from_stdin,
            config.batch_separation,
            &config.batch_value_separator,
        )?;

        let evaluator = ConditionEvaluator::new(self.condition_reporter.clone())?;
        let mut selected = Vec::with_capacity(batches.len());
        for values in batches {
            if evaluator.evaluate(config.condition.as_deref(), &values)? {
                selected.push(values);
            }
        }

        let dispatcher = CommandDispatcher::new(
            self.process_runner.clone(),
            self.file_system.clone(),
            self.console.clone(),
            self.reporter.clone(),
            DispatchSettings {
                root_directory: config.root_directory.clone(),
                file_encoding: config.file_encoding,
                output_file_path: config.output_file_path.clone(),
            },
        );

        self.reporter
            .scheduled(config.commands.len() * selected.len());

        let processes = Mutex::new(Vec::new());
        scheduler::schedule(
            &config.commands,
            &selected,
            config.execution_order,
            config.parallelize,
            config.max_degree_of_parallelism,
            |command, values| {
                let outcome = dispatcher.dispatch(command, values);
                self.reporter.unit_completed();
                if let Some(outcome) = outcome? {
                    if let Ok(mut processes) = processes.lock() {
                        processes.push(outcome);
                    }
                }
                Ok(())
            },
        )?;

        let result = BatchResult {
            processes: processes.into_inner().unwrap_or_else(|e| e.into_inner()),
        };
        for failure in result.failures() {
            self.reporter.error(failure);
        }

        Ok(result)
    }
}
