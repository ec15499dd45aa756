//! # 模式行解析
//!
//! 模式行语法:
//!
//! ```text
//! regex => value[|value]*
//! 'regex' => value[|value]*
//! ```
//!
//! 正则包含批次分隔符或 `=>` 时可用单引号括起；未加引号时以第一个
//! 未被 `\` 转义的 `=>` 为界。值模板按批次分隔符拆分，连续两个分隔符
//! 表示一个字面量分隔符，空模板被丢弃。
//!
//! ## 依赖关系
//! - 被 `matching/engine.rs` 调用
//! - 使用 `format/value.rs` 的转义拆分

use crate::error::{BatcherError, Result};
use crate::format::value;

use regex::Regex;

const ARROW: &str = "=>";
const ESCAPED_ARROW: &str = "\\=>";

/// 已解析的模式
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    values: Vec<String>,
}

impl Pattern {
    /// 解析一行模式
    pub fn parse(line: &str, batch_separator: char) -> Result<Self> {
        let line = line.trim();
        let (expression, rest) = split_expression(line)?;

        let values = value::split_escaped(rest.trim_start(), batch_separator)
            .into_iter()
            .filter(|v| !v.is_empty())
            .collect();

        let regex = Regex::new(&expression).map_err(|e| BatcherError::InvalidPattern {
            pattern: line.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: line.to_string(),
            regex,
            values,
        })
    }

    /// 原始模式行
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// 值模板
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// 拆出正则文本与 `=>` 之后的部分
fn split_expression(line: &str) -> Result<(String, &str)> {
    let invalid = |reason: &str| BatcherError::InvalidPattern {
        pattern: line.to_string(),
        reason: reason.to_string(),
    };

    if let Some(quoted) = line.strip_prefix('\'') {
        // 闭合引号之后只允许空白再接 `=>`
        let mut search = 0;
        while let Some(offset) = quoted[search..].find('\'') {
            let end = search + offset;
            if let Some(rest) = quoted[end + 1..].trim_start().strip_prefix(ARROW) {
                return Ok((quoted[..end].to_string(), rest));
            }
            search = end + 1;
        }
        return Err(invalid("missing closing quote before '=>'"));
    }

    let mut search = 0;
    while let Some(offset) = line[search..].find(ARROW) {
        let start = search + offset;
        if !line[..start].ends_with('\\') {
            let expression = line[..start].trim_end().replace(ESCAPED_ARROW, ARROW);
            return Ok((expression, &line[start + ARROW.len()..]));
        }
        search = start + ARROW.len();
    }

    Err(invalid("missing '=>'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_pattern() {
        let pattern = Pattern::parse("release/.+ => stage=ci|buildConfiguration=Debug", '|').unwrap();
        assert_eq!(pattern.regex().as_str(), "release/.+");
        assert_eq!(pattern.values(), ["stage=ci", "buildConfiguration=Debug"]);
    }

    #[test]
    fn test_parse_quoted_pattern_with_separator() {
        let pattern = Pattern::parse("'(?:master|main).*' => stage=production", '|').unwrap();
        assert_eq!(pattern.regex().as_str(), "(?:master|main).*");
        assert!(pattern.regex().is_match("main"));
        assert_eq!(pattern.values(), ["stage=production"]);
    }

    #[test]
    fn test_parse_escaped_arrow() {
        let pattern = Pattern::parse(r"a\=>b => x", '|').unwrap();
        assert_eq!(pattern.regex().as_str(), "a=>b");
        assert_eq!(pattern.values(), ["x"]);
    }

    #[test]
    fn test_parse_doubled_separator_is_literal() {
        let pattern = Pattern::parse("x => a||b|c", '|').unwrap();
        assert_eq!(pattern.values(), ["a|b", "c"]);
    }

    #[test]
    fn test_parse_trims_trailing_whitespace() {
        let pattern = Pattern::parse("x => a|b \t", '|').unwrap();
        assert_eq!(pattern.values(), ["a", "b"]);
        assert_eq!(pattern.source(), "x => a|b");
    }

    #[test]
    fn test_parse_without_values() {
        let pattern = Pattern::parse("x =>", '|').unwrap();
        assert!(pattern.values().is_empty());
    }

    #[test]
    fn test_parse_missing_arrow_is_error() {
        assert!(matches!(
            Pattern::parse("no arrow here", '|'),
            Err(BatcherError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse("'unterminated => x", '|'),
            Err(BatcherError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_regex_is_error() {
        assert!(matches!(
            Pattern::parse("(unclosed => x", '|'),
            Err(BatcherError::InvalidPattern { .. })
        ));
    }
}
