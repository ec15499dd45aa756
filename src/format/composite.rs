//! # 复合格式字符串
//!
//! 解析并应用 `{0}`、`{1,-8}`、`{2:x}` 形式的位置占位符模板。
//!
//! ## 语法
//! ```text
//! {{        字面量 '{'
//! }}        字面量 '}'
//! {key}     占位符
//! {key,n}   右对齐到宽度 n（n 为负数时左对齐）
//! {key:fmt} 格式说明符（字符串参数忽略）
//! ```
//!
//! ## 依赖关系
//! - 被 `format/named.rs`, `format/value.rs` 使用
//! - 被 `batch/` 模块使用

use crate::error::{BatcherError, Result};

/// 模板片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Hole(Hole),
}

/// 占位符
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hole {
    pub key: String,
    pub alignment: Option<isize>,
}

/// 将模板拆分为字面量与占位符
pub(crate) fn parse(template: &str) -> std::result::Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                let mut body = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    if inner == '{' {
                        return Err(format!("unexpected '{{' inside format item at {}", pos));
                    }
                    body.push(inner);
                }
                if !closed {
                    return Err(format!("unterminated format item at {}", pos));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Hole(parse_hole(&body, pos)?));
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(format!("unescaped '}}' at {}", pos));
                }
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_hole(body: &str, pos: usize) -> std::result::Result<Hole, String> {
    // 格式说明符对字符串参数无意义，直接丢弃
    let body = body.split(':').next().unwrap_or_default();
    let (key, alignment) = match body.split_once(',') {
        Some((key, alignment)) => {
            let alignment = alignment
                .trim()
                .parse::<isize>()
                .map_err(|_| format!("invalid alignment '{}' at {}", alignment, pos))?;
            (key, Some(alignment))
        }
        None => (body, None),
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty format item at {}", pos));
    }

    Ok(Hole {
        key: key.to_string(),
        alignment,
    })
}

/// 按对齐宽度写入值
pub(crate) fn push_aligned(out: &mut String, value: &str, alignment: Option<isize>) {
    let Some(alignment) = alignment else {
        out.push_str(value);
        return;
    };

    let width = alignment.unsigned_abs();
    let len = value.chars().count();
    if len >= width {
        out.push_str(value);
        return;
    }

    let padding = " ".repeat(width - len);
    if alignment < 0 {
        out.push_str(value);
        out.push_str(&padding);
    } else {
        out.push_str(&padding);
        out.push_str(value);
    }
}

/// 将位置参数应用到复合格式模板
pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String> {
    let error = |reason: String| BatcherError::Format {
        template: template.to_string(),
        reason,
    };

    let segments = parse(template).map_err(error)?;
    let mut out = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Hole(hole) => {
                let index: usize = hole
                    .key
                    .parse()
                    .map_err(|_| error(format!("'{}' is not a positional index", hole.key)))?;
                let value = args.get(index).ok_or_else(|| {
                    error(format!(
                        "index {} is outside the {} supplied argument(s)",
                        index,
                        args.len()
                    ))
                })?;
                push_aligned(&mut out, value.as_ref(), hole.alignment);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_positional() {
        let out = format("tag {0}-{1} -a -m \"Released {1} {0}\"", &["1.0.1", "Sundew.Base"]).unwrap();
        assert_eq!(out, "tag 1.0.1-Sundew.Base -a -m \"Released Sundew.Base 1.0.1\"");
    }

    #[test]
    fn test_format_escaped_braces() {
        let out = format("{{{0}}}", &["x"]).unwrap();
        assert_eq!(out, "{x}");
    }

    #[test]
    fn test_format_alignment_and_specifier() {
        assert_eq!(format("[{0,5}]", &["ab"]).unwrap(), "[   ab]");
        assert_eq!(format("[{0,-5}]", &["ab"]).unwrap(), "[ab   ]");
        assert_eq!(format("[{0:X}]", &["ab"]).unwrap(), "[ab]");
    }

    #[test]
    fn test_format_index_out_of_range() {
        let err = format("{0} {1}", &["only"]).unwrap_err();
        assert!(matches!(err, BatcherError::Format { .. }));
    }

    #[test]
    fn test_format_malformed() {
        assert!(format("{0", &["a"]).is_err());
        assert!(format("a } b", &["a"]).is_err());
        assert!(format("{name}", &["a"]).is_err());
    }

    #[test]
    fn test_format_without_holes() {
        let args: [&str; 0] = [];
        assert_eq!(format("plain text", &args).unwrap(), "plain text");
    }
}
