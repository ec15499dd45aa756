//! # 批次来源解析
//!
//! 合并命令行批次、批次文件和标准输入，得到扁平的批次列表。
//!
//! ## 两级拆分
//! 1. 按 `BatchSeparation` 将文本拆成原始批次字符串
//! 2. 按批次值分隔符将每个原始批次拆成 `Values`
//!
//! 结果为空时补一个 `["-"]` 批次，保证每个命令至少执行一次。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `system/fs.rs`, `sinks/input.rs`
//! - 使用 `system/args.rs` 进行命令行式拆分

use super::reporter::BatchRunnerReporter;
use crate::error::Result;
use crate::models::{BatchSeparation, Values};
use crate::sinks::Inputter;
use crate::system::args::split_command_line;
use crate::system::FileSystem;

use std::path::PathBuf;
use std::sync::Arc;

/// 无批次时的占位值
pub const EMPTY_BATCH_SENTINEL: &str = "-";

/// 批次来源解析器
pub struct BatchSourceResolver {
    file_system: Arc<dyn FileSystem>,
    stdin: Arc<dyn Inputter>,
    reporter: Arc<dyn BatchRunnerReporter>,
}

impl BatchSourceResolver {
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        stdin: Arc<dyn Inputter>,
        reporter: Arc<dyn BatchRunnerReporter>,
    ) -> Self {
        Self {
            file_system,
            stdin,
            reporter,
        }
    }

    /// 解析所有批次来源
    pub fn resolve(
        &self,
        literal: &[Values],
        files: &[PathBuf],
        use_stdin: bool,
        separation: BatchSeparation,
        value_separator: &str,
    ) -> Result<Vec<Values>> {
        let mut batches = literal.to_vec();

        for path in files {
            if !self.file_system.file_exists(path) {
                self.reporter.file_not_found(path);
                continue;
            }

            let text = self.file_system.read_all_text(path)?;
            for batch in split_batches(&text, separation) {
                batches.push(Values::parse(&batch, value_separator));
            }
        }

        if use_stdin {
            for text in self.stdin.inputs()? {
                for batch in split_batches(&text, separation) {
                    batches.push(Values::parse(&batch, value_separator));
                }
            }
        }

        if batches.is_empty() {
            batches.push(Values::new([EMPTY_BATCH_SENTINEL]));
        }

        Ok(batches)
    }
}

/// 按拆分方式将文本拆为原始批次字符串，丢弃空项
pub fn split_batches(text: &str, separation: BatchSeparation) -> Vec<String> {
    match separation.separator() {
        None => split_command_line(text),
        Some(separator) => text
            .split(separator)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::fakes::{MemoryFileSystem, RecordingReporter};
    use crate::sinks::FixedInputter;

    fn resolver(
        files: &[(&str, &str)],
        stdin: &str,
        reporter: Arc<RecordingReporter>,
    ) -> BatchSourceResolver {
        let fs = MemoryFileSystem::default();
        for (path, text) in files {
            fs.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), text.to_string());
        }
        BatchSourceResolver::new(
            Arc::new(fs),
            Arc::new(FixedInputter::new(vec![stdin.to_string()])),
            reporter,
        )
    }

    #[test]
    fn test_resolve_batch_file_by_unix_new_line() {
        let resolver = resolver(
            &[("batches.txt", "1.0.1|Sundew.CommandLine\n2.0.1|Sundew.Base\n")],
            "",
            Arc::default(),
        );

        let batches = resolver
            .resolve(
                &[],
                &[PathBuf::from("batches.txt")],
                false,
                BatchSeparation::UnixNewLine,
                "|",
            )
            .unwrap();

        assert_eq!(
            batches,
            vec![
                Values::new(["1.0.1", "Sundew.CommandLine"]),
                Values::new(["2.0.1", "Sundew.Base"]),
            ]
        );
    }

    #[test]
    fn test_resolve_missing_file_is_reported_and_skipped() {
        let reporter = Arc::new(RecordingReporter::default());
        let resolver = resolver(&[], "", reporter.clone());

        let batches = resolver
            .resolve(
                &[Values::new(["a"])],
                &[PathBuf::from("missing.txt")],
                false,
                BatchSeparation::CommandLine,
                ",",
            )
            .unwrap();

        assert_eq!(batches, vec![Values::new(["a"])]);
        assert_eq!(*reporter.events.lock().unwrap(), vec!["missing missing.txt"]);
    }

    #[test]
    fn test_resolve_stdin_command_line_honors_quotes() {
        let resolver = resolver(&[], "  \"1.0,with space\" 2.0,b  \n", Arc::default());

        let batches = resolver
            .resolve(&[], &[], true, BatchSeparation::CommandLine, ",")
            .unwrap();

        assert_eq!(
            batches,
            vec![Values::new(["1.0", "with space"]), Values::new(["2.0", "b"])]
        );
    }

    #[test]
    fn test_resolve_combines_sources_in_order() {
        let resolver = resolver(&[("b.txt", "b1;b2")], "s1", Arc::default());

        let batches = resolver
            .resolve(
                &[Values::new(["literal"])],
                &[PathBuf::from("b.txt")],
                true,
                BatchSeparation::SemiColon,
                ",",
            )
            .unwrap();

        let flat: Vec<String> = batches.iter().map(|v| v.join(",")).collect();
        assert_eq!(flat, vec!["literal", "b1", "b2", "s1"]);
    }

    #[test]
    fn test_resolve_empty_yields_sentinel() {
        let resolver = resolver(&[("empty.txt", ";;")], "", Arc::default());

        let batches = resolver
            .resolve(
                &[],
                &[PathBuf::from("empty.txt")],
                false,
                BatchSeparation::SemiColon,
                ",",
            )
            .unwrap();

        assert_eq!(batches, vec![Values::new([EMPTY_BATCH_SENTINEL])]);
    }

    #[test]
    fn test_split_batches_modes() {
        assert_eq!(split_batches("a|b||c", BatchSeparation::Pipe), ["a", "b", "c"]);
        assert_eq!(split_batches("a,b", BatchSeparation::Comma), ["a", "b"]);
        assert_eq!(
            split_batches("a\r\nb\r\n", BatchSeparation::WindowsNewLine),
            ["a", "b"]
        );
        assert_eq!(
            split_batches("\"unterminated", BatchSeparation::CommandLine),
            ["unterminated"]
        );
    }

    #[test]
    fn test_resolve_command_line_keeps_windows_paths() {
        let resolver = resolver(&[], r"C:\src\app.csproj,Release D:\out", Arc::default());

        let batches = resolver
            .resolve(&[], &[], true, BatchSeparation::CommandLine, ",")
            .unwrap();

        assert_eq!(
            batches,
            vec![
                Values::new([r"C:\src\app.csproj", "Release"]),
                Values::new([r"D:\out"]),
            ]
        );
    }
}
