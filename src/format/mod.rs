//! # 格式化模块
//!
//! 提供位置占位符模板、带校验的命名模板以及匹配值的格式化。
//!
//! ## 依赖关系
//! - 被 `batch/`, `matching/` 模块使用
//! - 子模块: composite, named, value

pub mod composite;
pub mod named;
pub mod value;

pub use named::{format_named, FormatFailure};
