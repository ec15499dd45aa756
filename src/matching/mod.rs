//! # 模式匹配模块
//!
//! 将输入与 `regex => value[|value]*` 模式匹配并映射为批次输出。
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 使用
//! - 使用 `regex` 匹配输入
//! - 子模块: pattern, engine, reporter

pub mod engine;
pub mod pattern;
pub mod reporter;

pub use engine::MatchEngine;
pub use reporter::MatchReporter;
