//! # 系统协作者
//!
//! 外部进程与文件系统的抽象及其默认实现。
//!
//! ## 依赖关系
//! - 被 `batch/`, `sinks/`, `commands/` 使用
//! - 子模块: args, process, fs

pub mod args;
pub mod fs;
pub mod process;

pub use fs::{DiskFileSystem, FileSystem};
pub use process::{ProcessRunner, SystemProcessRunner};
