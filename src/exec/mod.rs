//! # 外部进程模块
//!
//! 定位随应用分发的外部工具并执行。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: locator, runner

pub mod locator;
pub mod runner;

pub use locator::{ExecutableLocator, LocateExecutable, RuntimeMode};
pub use runner::ProcessRunner;
