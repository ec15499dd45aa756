//! # 模式匹配报告接口

use crate::error::BatcherError;

/// 模式匹配过程中的事件
pub trait MatchReporter: Send + Sync {
    /// 匹配过程中止的错误
    fn exception(&self, error: &BatcherError);

    fn report(&self, message: &str);
}
