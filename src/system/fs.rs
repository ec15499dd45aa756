//! # 文件系统
//!
//! 读取批次文件、写入/追加重定向输出。
//!
//! ## 依赖关系
//! - 被 `batch/resolver.rs`, `batch/dispatcher.rs`, `sinks/file.rs` 使用
//! - 使用 `models/encoding.rs`

use crate::error::{BatcherError, Result};
use crate::models::encoding::{decode_text, FileEncoding};

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 文件系统操作
pub trait FileSystem: Send + Sync {
    fn read_all_text(&self, path: &Path) -> Result<String>;

    fn file_exists(&self, path: &Path) -> bool;

    /// 追加文本；文件为空或不存在时先写入字节序标记
    fn append_all_text(&self, path: &Path, contents: &str, encoding: FileEncoding) -> Result<()>;

    /// 覆盖写入文本
    fn write_all_text(&self, path: &Path, contents: &str, encoding: FileEncoding) -> Result<()>;

    fn current_directory(&self) -> Result<PathBuf>;
}

/// 磁盘文件系统
///
/// 写操作串行化，多个并行任务写同一文件时内容不会交错。
#[derive(Debug, Default)]
pub struct DiskFileSystem {
    write_lock: Mutex<()>,
}

impl DiskFileSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

fn write_error(path: &Path, source: io::Error) -> BatcherError {
    BatcherError::FileWriteError {
        path: path.display().to_string(),
        source,
    }
}

impl FileSystem for DiskFileSystem {
    fn read_all_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| BatcherError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        decode_text(&bytes).ok_or_else(|| BatcherError::FileReadError {
            path: path.display().to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, "file is not valid UTF-8/UTF-16 text"),
        })
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn append_all_text(&self, path: &Path, contents: &str, encoding: FileEncoding) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| write_error(path, e))?;

        let is_empty = file.metadata().map(|m| m.len() == 0).unwrap_or(false);
        let mut bytes = Vec::new();
        if is_empty {
            bytes.extend_from_slice(encoding.preamble());
        }
        bytes.extend(encoding.encode(contents));

        file.write_all(&bytes).map_err(|e| write_error(path, e))
    }

    fn write_all_text(&self, path: &Path, contents: &str, encoding: FileEncoding) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut bytes = encoding.preamble().to_vec();
        bytes.extend(encoding.encode(contents));
        fs::write(path, bytes).map_err(|e| write_error(path, e))
    }

    fn current_directory(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(|e| BatcherError::FileReadError {
            path: ".".to_string(),
            source: e,
        })
    }
}
