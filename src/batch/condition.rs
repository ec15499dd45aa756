//! # 条件求值
//!
//! 每个批次在调度前按条件过滤。条件先代入批次值，再按以下语法解析：
//!
//! ```text
//! [Comparison:]lhs operator rhs
//!
//! Comparison: O  OI  C  CI  I  II   (默认 C)
//! operator:   ==  !=  |<  !<  >|  >!  ><  <>
//! ```
//!
//! 运算符前后各一个空格不属于操作数。不符合语法的条件求值为 `false`。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `format/composite.rs` 代入批次值
//! - 使用 `regex` 解析条件

use super::reporter::ConditionReporter;
use crate::error::{BatcherError, Result};
use crate::format::composite;
use crate::models::Values;

use regex::Regex;
use std::sync::Arc;

const CONDITION_PATTERN: &str =
    r"^(?:(?P<comparison>[A-Z]{1,2}):)?(?P<lhs>.+?) ?(?P<operator>==|!=|\|<|!<|>\||>!|><|<>) ?(?P<rhs>.*)$";

/// 字符串比较方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Ordinal,
    OrdinalIgnoreCase,
    CurrentCulture,
    CurrentCultureIgnoreCase,
    InvariantCulture,
    InvariantCultureIgnoreCase,
}

impl Comparison {
    fn parse(code: Option<&str>) -> Result<Self> {
        match code {
            None | Some("C") => Ok(Comparison::CurrentCulture),
            Some("O") => Ok(Comparison::Ordinal),
            Some("OI") => Ok(Comparison::OrdinalIgnoreCase),
            Some("CI") => Ok(Comparison::CurrentCultureIgnoreCase),
            Some("I") => Ok(Comparison::InvariantCulture),
            Some("II") => Ok(Comparison::InvariantCultureIgnoreCase),
            Some(other) => Err(BatcherError::InvalidComparison(other.to_string())),
        }
    }

    fn ignores_case(self) -> bool {
        matches!(
            self,
            Comparison::OrdinalIgnoreCase
                | Comparison::CurrentCultureIgnoreCase
                | Comparison::InvariantCultureIgnoreCase
        )
    }

    /// 文化相关比较按 Unicode 标量逐一比较，与序数比较一致
    fn normalize(self, text: &str) -> String {
        if self.ignores_case() {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}

/// 条件求值器
pub struct ConditionEvaluator {
    regex: Regex,
    reporter: Arc<dyn ConditionReporter>,
}

impl ConditionEvaluator {
    pub fn new(reporter: Arc<dyn ConditionReporter>) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(CONDITION_PATTERN)?,
            reporter,
        })
    }

    /// 判断批次是否满足条件；无条件时总为真
    pub fn evaluate(&self, condition: Option<&str>, values: &Values) -> Result<bool> {
        let condition = match condition {
            Some(c) if !c.is_empty() => c,
            _ => return Ok(true),
        };

        let condition = composite::format(condition, values.arguments())?;
        let Some(captures) = self.regex.captures(&condition) else {
            return Ok(false);
        };

        let comparison = Comparison::parse(captures.name("comparison").map(|m| m.as_str()))?;
        let lhs = &captures["lhs"];
        let operator = &captures["operator"];
        let rhs = &captures["rhs"];

        let left = comparison.normalize(lhs);
        let right = comparison.normalize(rhs);
        let result = match operator {
            "==" => left == right,
            "!=" => left != right,
            "|<" => left.starts_with(&right),
            "!<" => !left.starts_with(&right),
            ">|" => left.ends_with(&right),
            ">!" => !left.ends_with(&right),
            "><" => left.contains(&right),
            "<>" => !left.contains(&right),
            other => return Err(BatcherError::InvalidOperator(other.to_string())),
        };

        self.reporter.evaluated(lhs, operator, rhs, result);
        Ok(result)
    }
}
