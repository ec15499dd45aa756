//! # 命令分发
//!
//! 将一个 (命令, 批次) 单元路由到控制台、文件重定向或外部进程。
//!
//! ## 路由规则
//! - 可执行文件为空: 格式化参数并写到控制台
//! - `>> path`: 校验格式化后追加到文件
//! - `> path`: 校验格式化后覆盖文件
//! - 其他: 启动进程，逐行转发标准输出，阻塞直到退出
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `system/` 的进程与文件系统抽象
//! - 使用 `format/` 进行参数代入

use super::reporter::BatchRunnerReporter;
use crate::error::{BatcherError, Result};
use crate::format::{composite, format_named, named, value};
use crate::models::{Command, CommandTarget, FileEncoding, Values};
use crate::sinks::Outputter;
use crate::system::{FileSystem, ProcessRunner};

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// 已启动进程的描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub executable: String,
    pub arguments: String,
    pub id: u32,
}

/// 已退出进程的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub process: ProcessInfo,
    pub exit_code: i32,
}

impl ProcessOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// 分发所需的运行参数
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub root_directory: PathBuf,
    pub file_encoding: FileEncoding,
    pub output_file_path: Option<PathBuf>,
}

/// 命令分发器
pub struct CommandDispatcher {
    process_runner: Arc<dyn ProcessRunner>,
    file_system: Arc<dyn FileSystem>,
    console: Arc<dyn Outputter>,
    reporter: Arc<dyn BatchRunnerReporter>,
    settings: DispatchSettings,
}

impl CommandDispatcher {
    pub fn new(
        process_runner: Arc<dyn ProcessRunner>,
        file_system: Arc<dyn FileSystem>,
        console: Arc<dyn Outputter>,
        reporter: Arc<dyn BatchRunnerReporter>,
        settings: DispatchSettings,
    ) -> Self {
        Self {
            process_runner,
            file_system,
            console,
            reporter,
            settings,
        }
    }

    /// 执行单个单元；仅在启动了进程时返回结果
    pub fn dispatch(&self, command: &Command, values: &Values) -> Result<Option<ProcessOutcome>> {
        match command.target() {
            CommandTarget::Console => {
                let text = composite::format(command.arguments(), values.arguments())?;
                self.console.output(&text)?;
                Ok(None)
            }
            CommandTarget::Append(path) => {
                let path = self.resolve_output_path(command, path)?;
                let text = self.format_redirect(command, values)?;
                self.file_system
                    .append_all_text(&path, &text, self.settings.file_encoding)?;
                Ok(None)
            }
            CommandTarget::Overwrite(path) => {
                let path = self.resolve_output_path(command, path)?;
                let text = self.format_redirect(command, values)?;
                self.file_system
                    .write_all_text(&path, &text, self.settings.file_encoding)?;
                Ok(None)
            }
            CommandTarget::Process(executable) => self.run_process(executable, command, values).map(Some),
        }
    }

    /// 重定向路径：命令中指定的路径，否则使用配置的输出文件
    fn resolve_output_path(&self, command: &Command, path: &str) -> Result<PathBuf> {
        let path = if path.is_empty() {
            self.settings
                .output_file_path
                .clone()
                .ok_or_else(|| BatcherError::NoOutputPath {
                    command: command.to_string(),
                })?
        } else {
            PathBuf::from(path)
        };

        Ok(if path.is_relative() {
            self.settings.root_directory.join(path)
        } else {
            path
        })
    }

    fn format_redirect(&self, command: &Command, values: &Values) -> Result<String> {
        let working_directory = self.settings.root_directory.display().to_string();
        let template = value::replace_reserved(command.arguments(), &working_directory);

        let names = named::positional_names(values.len());
        let arguments: Vec<(&str, Option<&str>)> = names
            .iter()
            .zip(values.arguments())
            .map(|(name, value)| (name.as_str(), Some(value.as_str())))
            .collect();

        format_named(&template, &arguments).map_err(BatcherError::FormatFailed)
    }

    fn run_process(
        &self,
        executable: &str,
        command: &Command,
        values: &Values,
    ) -> Result<ProcessOutcome> {
        let arguments = composite::format(command.arguments(), values.arguments())?;
        let mut process = self
            .process_runner
            .spawn(executable, &arguments, &self.settings.root_directory)
            .map_err(|e| spawn_error(executable, e))?;

        let info = ProcessInfo {
            executable: executable.to_string(),
            arguments,
            id: process.id(),
        };
        self.reporter.started(&info);

        let io_error = |source| BatcherError::ProcessIo {
            executable: executable.to_string(),
            source,
        };
        while let Some(line) = process.read_line().map_err(io_error)? {
            self.reporter.message(&info, &line);
        }

        let exit_code = process.wait().map_err(io_error)?;
        let outcome = ProcessOutcome {
            process: info,
            exit_code,
        };
        self.reporter.exited(&outcome);

        Ok(outcome)
    }
}

fn spawn_error(executable: &str, source: io::Error) -> BatcherError {
    if source.kind() == io::ErrorKind::NotFound {
        BatcherError::ExecutableNotFound {
            executable: executable.to_string(),
            source,
        }
    } else {
        BatcherError::Spawn {
            executable: executable.to_string(),
            source,
        }
    }
}
