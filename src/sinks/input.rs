//! # 输入源
//!
//! ## 依赖关系
//! - 实现 `sinks::Inputter`

use super::Inputter;
use crate::error::{BatcherError, Result};

use std::io::{self, Read};

/// 固定的输入列表
#[derive(Debug, Clone, Default)]
pub struct FixedInputter {
    inputs: Vec<String>,
}

impl FixedInputter {
    pub fn new(inputs: Vec<String>) -> Self {
        Self { inputs }
    }
}

impl Inputter for FixedInputter {
    fn inputs(&self) -> Result<Vec<String>> {
        Ok(self.inputs.clone())
    }
}

/// 读取全部标准输入作为单个输入，去掉末尾换行
#[derive(Debug, Default)]
pub struct StdinInputter;

impl Inputter for StdinInputter {
    fn inputs(&self) -> Result<Vec<String>> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(BatcherError::StdinError)?;

        let trimmed = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(trimmed);
        Ok(vec![text])
    }
}
