//! # 控制台输出
//!
//! ## 依赖关系
//! - 实现 `sinks::Outputter`

use super::Outputter;
use crate::error::{BatcherError, Result};

use std::io::{self, Write};

/// 每条记录写一行到标准输出
#[derive(Debug, Default)]
pub struct ConsoleOutputter;

impl Outputter for ConsoleOutputter {
    fn output(&self, contents: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", contents).map_err(BatcherError::StdoutError)
    }
}
