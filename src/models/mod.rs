//! # 数据模型模块
//!
//! 定义工具、作业和作业结果数据模型。
//!
//! ## 依赖关系
//! - 被 `exec/`, `batch/` 和 `commands/` 使用
//! - 子模块: tool, job, result

pub mod job;
pub mod result;
pub mod tool;

pub use job::{Job, JobOptions};
pub use result::{JobResult, OutputFiles, ResultKind};
pub use tool::ToolId;
