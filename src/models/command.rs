//! # 命令模板数据模型
//!
//! 一个命令由可执行文件和参数模板组成，文本形式为 `executable|arguments`。
//!
//! ## 可执行文件的特殊形式
//! ```text
//! ""            将格式化后的参数写到控制台
//! ">> path"     追加到文件
//! "> path"      覆盖写入文件
//! 其他          作为外部进程启动
//! ```
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `cli/` 使用
//! - 无外部模块依赖

use crate::error::BatcherError;
use std::fmt;
use std::str::FromStr;

const APPEND_MARKER: &str = ">>";
const OVERWRITE_MARKER: &str = ">";

/// 命令的执行目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget<'a> {
    /// 写到控制台
    Console,
    /// 追加到文件，路径可能为空
    Append(&'a str),
    /// 覆盖写入文件，路径可能为空
    Overwrite(&'a str),
    /// 启动外部进程
    Process(&'a str),
}

/// 命令模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    executable: String,
    arguments: String,
}

impl Command {
    pub fn new(executable: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            arguments: arguments.into(),
        }
    }

    #[cfg(test)]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    /// 根据可执行文件前缀判断执行目标
    pub fn target(&self) -> CommandTarget<'_> {
        if self.executable.is_empty() {
            CommandTarget::Console
        } else if let Some(path) = self.executable.strip_prefix(APPEND_MARKER) {
            CommandTarget::Append(path.trim())
        } else if let Some(path) = self.executable.strip_prefix(OVERWRITE_MARKER) {
            CommandTarget::Overwrite(path.trim())
        } else {
            CommandTarget::Process(&self.executable)
        }
    }
}

impl FromStr for Command {
    type Err = BatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('|').collect();
        match parts.as_slice() {
            [executable] => Ok(Command::new(*executable, "")),
            [executable, arguments] => Ok(Command::new(*executable, *arguments)),
            _ => Err(BatcherError::InvalidCommand(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.executable, self.arguments)
    }
}
