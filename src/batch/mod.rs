//! # 批量处理模块
//!
//! 提供外部工具的批量执行能力。
//!
//! ## 功能
//! - 收集输入文件列表（文件 / 目录）
//! - 有上限的并发调度
//! - 进度与输出事件
//! - 成功 / 失败统计与错误报告
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `exec/` 启动外部进程
//! - 使用 `rayon` 构建工作线程池

pub mod collector;
pub mod dispatcher;
pub mod events;
pub mod pipeline;
pub mod summary;

pub use collector::FileCollector;
pub use events::{BatchEvent, EventSink, JsonLinesSink, NullSink};
pub use pipeline::{process_file, process_files, BatchRequest};
pub use summary::{BatchStatus, BatchSummary, FailureEntry};
