//! # 测试用协作者
//!
//! 进程启动器、文件系统、控制台与报告器的内存实现。

use super::dispatcher::{ProcessInfo, ProcessOutcome};
use super::reporter::{BatchRunnerReporter, ConditionReporter};
use crate::error::{BatcherError, Result};
use crate::models::FileEncoding;
use crate::sinks::Outputter;
use crate::system::process::RunningProcess;
use crate::system::{FileSystem, ProcessRunner};

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 记录所有启动请求的假进程启动器
#[derive(Default)]
pub(crate) struct FakeProcessRunner {
    pub spawned: Mutex<Vec<(String, String)>>,
    pub output: Vec<String>,
    pub exit_code: i32,
    pub missing: Vec<String>,
}

struct FakeProcess {
    id: u32,
    lines: VecDeque<String>,
    exit_code: i32,
}

impl RunningProcess for FakeProcess {
    fn id(&self) -> u32 {
        self.id
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn wait(&mut self) -> io::Result<i32> {
        Ok(self.exit_code)
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn spawn(
        &self,
        executable: &str,
        arguments: &str,
        _: &Path,
    ) -> io::Result<Box<dyn RunningProcess>> {
        if self.missing.iter().any(|m| m == executable) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not found"));
        }

        let mut spawned = self.spawned.lock().unwrap();
        spawned.push((executable.to_string(), arguments.to_string()));
        Ok(Box::new(FakeProcess {
            id: spawned.len() as u32,
            lines: self.output.iter().cloned().collect(),
            exit_code: self.exit_code,
        }))
    }
}

/// 内存文件系统，记录写入
#[derive(Default)]
pub(crate) struct MemoryFileSystem {
    pub files: Mutex<HashMap<PathBuf, String>>,
}

impl FileSystem for MemoryFileSystem {
    fn read_all_text(&self, path: &Path) -> Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| BatcherError::FileReadError {
                path: path.display().to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn append_all_text(&self, path: &Path, contents: &str, _: FileEncoding) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(contents);
        Ok(())
    }

    fn write_all_text(&self, path: &Path, contents: &str, _: FileEncoding) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn current_directory(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/work"))
    }
}

/// 记录控制台输出
#[derive(Default)]
pub(crate) struct RecordingConsole(pub Mutex<Vec<String>>);

impl Outputter for RecordingConsole {
    fn output(&self, contents: &str) -> Result<()> {
        self.0.lock().unwrap().push(contents.to_string());
        Ok(())
    }
}

/// 记录进程事件
#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub events: Mutex<Vec<String>>,
}

impl BatchRunnerReporter for RecordingReporter {
    fn started(&self, process: &ProcessInfo) {
        self.events
            .lock()
            .unwrap()
            .push(format!("started {} {}", process.executable, process.arguments));
    }

    fn message(&self, _: &ProcessInfo, line: &str) {
        self.events.lock().unwrap().push(format!("message {}", line));
    }

    fn exited(&self, outcome: &ProcessOutcome) {
        self.events
            .lock()
            .unwrap()
            .push(format!("exited {}", outcome.exit_code));
    }

    fn file_not_found(&self, path: &Path) {
        self.events
            .lock()
            .unwrap()
            .push(format!("missing {}", path.display()));
    }

    fn error(&self, outcome: &ProcessOutcome) {
        self.events
            .lock()
            .unwrap()
            .push(format!("failed {}", outcome.exit_code));
    }
}

/// 忽略条件求值事件
pub(crate) struct SilentConditionReporter;

impl ConditionReporter for SilentConditionReporter {
    fn evaluated(&self, _: &str, _: &str, _: &str, _: bool) {}
}
