//! # 值格式化
//!
//! 将匹配到的值模板转换为输出文本：
//! 1. 替换保留标记 (`{NL}`, `{WNL}`, `{UNL}`, `{DQ}`, `{CurrentDirectory}`)
//! 2. 将命名捕获组 `{name}` 替换为捕获文本
//! 3. 按值分隔符拆分（双写分隔符表示字面量）并应用格式模板
//!
//! ## 依赖关系
//! - 被 `matching/engine.rs`, `batch/dispatcher.rs` 使用
//! - 使用 `format/composite.rs`

use super::composite;
use crate::error::Result;
use regex::{Captures, Regex};

pub const WINDOWS_NEW_LINE: &str = "\r\n";
pub const UNIX_NEW_LINE: &str = "\n";

#[cfg(windows)]
pub const NEW_LINE: &str = WINDOWS_NEW_LINE;
#[cfg(not(windows))]
pub const NEW_LINE: &str = UNIX_NEW_LINE;

const WINDOWS_NEW_LINE_TOKEN: &str = "{WNL}";
const UNIX_NEW_LINE_TOKEN: &str = "{UNL}";
const NEW_LINE_TOKEN: &str = "{NL}";
const DOUBLE_QUOTE_TOKEN: &str = "{DQ}";
const CURRENT_DIRECTORY_TOKEN: &str = "{CurrentDirectory}";

/// 替换保留标记
pub fn replace_reserved(text: &str, working_directory: &str) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    text.replace(WINDOWS_NEW_LINE_TOKEN, WINDOWS_NEW_LINE)
        .replace(UNIX_NEW_LINE_TOKEN, UNIX_NEW_LINE)
        .replace(NEW_LINE_TOKEN, NEW_LINE)
        .replace(DOUBLE_QUOTE_TOKEN, "\"")
        .replace(CURRENT_DIRECTORY_TOKEN, working_directory)
}

/// 按分隔符拆分，连续两个分隔符表示一个字面量分隔符
///
/// 首字符为分隔符时产生一个空的首元素；末尾的单个分隔符被丢弃。
pub fn split_escaped(value: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut pending = false;

    for (index, c) in value.chars().enumerate() {
        let was_pending = std::mem::take(&mut pending);
        if c == separator {
            if was_pending {
                current.push(c);
            } else if index == 0 {
                parts.push(std::mem::take(&mut current));
            } else {
                pending = true;
            }
        } else {
            if was_pending {
                parts.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// 将命名捕获组代入值中
pub fn substitute_groups(value: &str, regex: &Regex, captures: &Captures) -> String {
    let mut value = value.to_string();
    for name in regex.capture_names().flatten() {
        if name.parse::<usize>().is_ok() {
            continue;
        }

        if let Some(group) = captures.name(name) {
            value = value.replace(&format!("{{{}}}", name), group.as_str());
        }
    }
    value
}

/// 格式化单个值模板
pub fn format_value(
    template: Option<&str>,
    value: &str,
    regex: &Regex,
    captures: &Captures,
    value_separator: char,
    working_directory: &str,
) -> Result<String> {
    let value = replace_reserved(value, working_directory);
    let value = substitute_groups(&value, regex, captures);

    match template {
        None => Ok(value),
        Some(template) => {
            let template = replace_reserved(template, working_directory);
            let values = split_escaped(&value, value_separator);
            composite::format(&template, &values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_reserved() {
        let out = replace_reserved("a{NL}b{DQ}c{DQ}{WNL}{UNL}{CurrentDirectory}", "/work");
        assert_eq!(out, format!("a{}b\"c\"\r\n\n/work", NEW_LINE));
    }

    #[test]
    fn test_split_escaped() {
        assert_eq!(split_escaped("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_escaped("a,,b,c", ','), vec!["a,b", "c"]);
        assert_eq!(split_escaped(",a", ','), vec!["", "a"]);
        assert_eq!(split_escaped("a,", ','), vec!["a"]);
        assert_eq!(split_escaped("stage=production", '='), vec!["stage", "production"]);
    }

    #[test]
    fn test_format_value_with_named_group() {
        let regex = Regex::new(r"feature/(?<Postfix>.+)").unwrap();
        let captures = regex.captures("feature/MyFeature").unwrap();
        let out = format_value(None, "Postfix={Postfix}", &regex, &captures, ',', ".").unwrap();
        assert_eq!(out, "Postfix=MyFeature");
    }

    #[test]
    fn test_format_value_with_template() {
        let regex = Regex::new("1").unwrap();
        let captures = regex.captures("1").unwrap();
        let out = format_value(
            Some("I have {0} and {1}{DQ}"),
            "4 dogs,5 cats",
            &regex,
            &captures,
            ',',
            ".",
        )
        .unwrap();
        assert_eq!(out, "I have 4 dogs and 5 cats\"");
    }

    #[test]
    fn test_format_value_skips_unmatched_group() {
        let regex = Regex::new(r"(?:a|b(?<Name>x))").unwrap();
        let captures = regex.captures("a").unwrap();
        let out = format_value(None, "{Name}", &regex, &captures, ',', ".").unwrap();
        assert_eq!(out, "{Name}");
    }
}
