//! # 文件输出
//!
//! 追加模式：每条记录追加到文件末尾。
//! 覆盖模式：本次运行的第一条记录截断文件，其后的记录追加。
//!
//! ## 依赖关系
//! - 实现 `sinks::Outputter`
//! - 使用 `system/fs.rs`

use super::Outputter;
use crate::error::Result;
use crate::format::value::NEW_LINE;
use crate::models::FileEncoding;
use crate::system::FileSystem;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub struct FileOutputter {
    path: PathBuf,
    append: bool,
    encoding: FileEncoding,
    file_system: Arc<dyn FileSystem>,
    /// 覆盖模式下是否已写过
    written: Mutex<bool>,
}

impl FileOutputter {
    pub fn new(
        path: PathBuf,
        append: bool,
        encoding: FileEncoding,
        file_system: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            path,
            append,
            encoding,
            file_system,
            written: Mutex::new(false),
        }
    }
}

impl Outputter for FileOutputter {
    fn output(&self, contents: &str) -> Result<()> {
        let line = format!("{}{}", contents, NEW_LINE);
        let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());

        if self.append || *written {
            self.file_system
                .append_all_text(&self.path, &line, self.encoding)?;
        } else {
            self.file_system
                .write_all_text(&self.path, &line, self.encoding)?;
        }

        *written = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::DiskFileSystem;

    #[test]
    fn test_overwrite_truncates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale\n").unwrap();

        let outputter = FileOutputter::new(
            path.clone(),
            false,
            FileEncoding::Utf8,
            Arc::new(DiskFileSystem::new()),
        );
        outputter.output("a").unwrap();
        outputter.output("b").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("a{0}b{0}", NEW_LINE));
    }

    #[test]
    fn test_append_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "existing\n").unwrap();

        let outputter = FileOutputter::new(
            path.clone(),
            true,
            FileEncoding::Utf8,
            Arc::new(DiskFileSystem::new()),
        );
        outputter.output("a").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("existing\na{}", NEW_LINE));
    }
}
