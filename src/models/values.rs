//! # 批次值数据模型
//!
//! 一个批次的有序位置参数。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `cli/` 使用
//! - 无外部模块依赖

/// 单个批次的位置参数
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Values {
    arguments: Vec<String>,
}

impl Values {
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// 按分隔符拆分字符串，丢弃空项
    pub fn parse(value: &str, separator: &str) -> Self {
        if separator.is_empty() {
            return Self::new([value]);
        }

        Self::new(value.split(separator).filter(|s| !s.is_empty()))
    }

    /// 用分隔符连接为文本形式
    #[cfg(test)]
    pub fn join(&self, separator: &str) -> String {
        self.arguments.join(separator)
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_parse() {
        let values = Values::parse("1.0.1|Sundew.CommandLine", "|");
        assert_eq!(values.arguments(), ["1.0.1", "Sundew.CommandLine"]);
    }

    #[test]
    fn test_values_parse_removes_empty_entries() {
        let values = Values::parse(",a,,b,", ",");
        assert_eq!(values.arguments(), ["a", "b"]);
    }

    #[test]
    fn test_values_round_trip() {
        let values = Values::new(["2.0.1", "Sundew.Base"]);
        assert_eq!(Values::parse(&values.join(","), ","), values);
        assert_eq!(Values::parse(&values.join("::"), "::"), values);
    }
}
