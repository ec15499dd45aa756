//! # 模式匹配引擎
//!
//! 将每个输入与全部模式逐一匹配，对匹配到的模式的值模板格式化后输出。
//!
//! ## 输出规则
//! - 非合并模式: 每个值模板输出一条记录
//! - 合并模式 (指定了合并格式或合并分隔符): 同一模式的值模板结果直接拼接，
//!   不同匹配之间插入分隔符，结束时按合并格式 (默认 `{0}`) 输出一条记录
//!
//! 任何错误都会被报告，返回状态码 -1。
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 调用
//! - 使用 `matching/pattern.rs` 解析模式
//! - 使用 `format/value.rs` 格式化值
//! - 使用 `sinks/` 的输入源与输出目标

use super::pattern::Pattern;
use super::reporter::MatchReporter;
use crate::error::Result;
use crate::format::{composite, value};
use crate::models::MatchConfig;
use crate::sinks::{Inputter, Outputter};

use std::sync::Arc;

const DEFAULT_MERGE_FORMAT: &str = "{0}";

/// 模式匹配引擎
pub struct MatchEngine {
    inputter: Arc<dyn Inputter>,
    outputter: Arc<dyn Outputter>,
    reporter: Arc<dyn MatchReporter>,
}

impl MatchEngine {
    pub fn new(
        inputter: Arc<dyn Inputter>,
        outputter: Arc<dyn Outputter>,
        reporter: Arc<dyn MatchReporter>,
    ) -> Self {
        Self {
            inputter,
            outputter,
            reporter,
        }
    }

    /// 执行匹配，返回进程状态码
    pub fn run(&self, config: &MatchConfig) -> i32 {
        match self.try_run(config) {
            Ok(()) => 0,
            Err(e) => {
                self.reporter.exception(&e);
                -1
            }
        }
    }

    fn try_run(&self, config: &MatchConfig) -> Result<()> {
        let patterns = config
            .patterns
            .iter()
            .map(|line| Pattern::parse(line, config.batch_separator))
            .collect::<Result<Vec<_>>>()?;

        let working_directory = config.working_directory.display().to_string();
        let merging = config.is_merging();
        let delimiter = config
            .merge_delimiter
            .as_deref()
            .map(|d| value::replace_reserved(d, &working_directory))
            .unwrap_or_default();

        let mut buffer = String::new();
        let mut buffered = false;

        for input in self.inputter.inputs()? {
            let mut matched = false;
            for pattern in &patterns {
                let Some(captures) = pattern.regex().captures(&input) else {
                    continue;
                };

                matched = true;
                self.reporter
                    .report(&format!("{} matched: {}", input, pattern.source()));

                for (index, template) in pattern.values().iter().enumerate() {
                    let text = value::format_value(
                        config.format.as_deref(),
                        template,
                        pattern.regex(),
                        &captures,
                        config.batch_value_separator,
                        &working_directory,
                    )?;

                    if merging {
                        // 分隔符只出现在不同模式的结果之间
                        if index == 0 && !buffer.is_empty() {
                            buffer.push_str(&delimiter);
                        }
                        buffer.push_str(&text);
                        buffered = true;
                    } else {
                        self.outputter.output(&text)?;
                    }
                }
            }

            if !matched {
                self.reporter.report(&format!("No pattern matched: {}", input));
            }
        }

        if merging && buffered {
            let merge_format = config.merge_format.as_deref().unwrap_or(DEFAULT_MERGE_FORMAT);
            let merge_format = value::replace_reserved(merge_format, &working_directory);
            self.outputter
                .output(&composite::format(&merge_format, &[buffer])?)?;
        }

        Ok(())
    }
}
