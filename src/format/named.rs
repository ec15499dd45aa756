//! # 带校验的命名格式化
//!
//! 与 `composite::format` 使用相同的模板语法，但占位符按名称查找，
//! 且失败以结构化结果返回而非错误：
//! - `UnknownNames`: 模板引用了未提供的名称
//! - `NullArguments`: 被引用的参数没有值
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs` 的文件重定向使用
//! - 使用 `format/composite.rs` 的模板解析

use super::composite::{self, Segment};
use std::fmt;

/// 命名格式化失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatFailure {
    /// 模板本身语法错误
    Malformed(String),
    /// 模板中出现的未知名称
    UnknownNames(Vec<String>),
    /// 值为空的参数 (名称, 参数下标)
    NullArguments(Vec<(String, usize)>),
}

impl fmt::Display for FormatFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatFailure::Malformed(reason) => write!(f, "The format was malformed: {}", reason),
            FormatFailure::UnknownNames(names) => {
                write!(f, "The format contained unknown names: {}", names.join(", "))
            }
            FormatFailure::NullArguments(arguments) => {
                let listed: Vec<String> = arguments
                    .iter()
                    .map(|(name, index)| format!("{} ({})", name, index))
                    .collect();
                write!(f, "The arguments contained null values: {}", listed.join(", "))
            }
        }
    }
}

/// 按名称应用参数
///
/// 未知名称优先于空值报告；两类列表均按首次出现顺序去重。
pub fn format_named(
    template: &str,
    arguments: &[(&str, Option<&str>)],
) -> Result<String, FormatFailure> {
    let segments = composite::parse(template).map_err(FormatFailure::Malformed)?;

    let mut unknown: Vec<String> = Vec::new();
    let mut nulls: Vec<(String, usize)> = Vec::new();
    for segment in &segments {
        if let Segment::Hole(hole) = segment {
            match arguments.iter().position(|(name, _)| *name == hole.key) {
                None => {
                    if !unknown.contains(&hole.key) {
                        unknown.push(hole.key.clone());
                    }
                }
                Some(index) if arguments[index].1.is_none() => {
                    if !nulls.iter().any(|(name, _)| *name == hole.key) {
                        nulls.push((hole.key.clone(), index));
                    }
                }
                Some(_) => {}
            }
        }
    }

    if !unknown.is_empty() {
        return Err(FormatFailure::UnknownNames(unknown));
    }
    if !nulls.is_empty() {
        return Err(FormatFailure::NullArguments(nulls));
    }

    let mut out = String::with_capacity(template.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Hole(hole) => {
                let value = arguments
                    .iter()
                    .find(|(name, _)| *name == hole.key)
                    .and_then(|(_, value)| *value)
                    .unwrap_or_default();
                composite::push_aligned(&mut out, value, hole.alignment);
            }
        }
    }

    Ok(out)
}

/// 将位置值转换为 "0", "1", ... 命名参数
pub fn positional_names(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}
