//! # 外部进程
//!
//! 启动子进程、逐行读取标准输出并等待退出。
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 使用
//! - 使用 `system/args.rs` 将参数字符串拆分为参数列表

use super::args::split_command_line;

use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

/// 运行中的进程
pub trait RunningProcess: Send {
    fn id(&self) -> u32;

    /// 读取下一行标准输出，流结束时返回 `None`
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// 等待进程退出并返回退出码
    fn wait(&mut self) -> io::Result<i32>;
}

/// 进程启动器
pub trait ProcessRunner: Send + Sync {
    fn spawn(
        &self,
        executable: &str,
        arguments: &str,
        working_directory: &Path,
    ) -> io::Result<Box<dyn RunningProcess>>;
}

/// 基于 `std::process` 的进程启动器
#[derive(Debug, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn spawn(
        &self,
        executable: &str,
        arguments: &str,
        working_directory: &Path,
    ) -> io::Result<Box<dyn RunningProcess>> {
        let args = split_command_line(arguments);

        let mut child = Command::new(executable)
            .args(&args)
            .current_dir(working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().map(BufReader::new);
        Ok(Box::new(SystemProcess { child, stdout }))
    }
}

struct SystemProcess {
    child: Child,
    stdout: Option<BufReader<ChildStdout>>,
}

impl RunningProcess for SystemProcess {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        if stdout.read_line(&mut line)? == 0 {
            self.stdout = None;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn wait(&mut self) -> io::Result<i32> {
        let status = self.child.wait()?;
        // 被信号终止时没有退出码
        Ok(status.code().unwrap_or(-1))
    }
}
