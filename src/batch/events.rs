//! # 批处理事件
//!
//! 运行过程中向界面层推送的通知：初始化、进度、单个作业的输出与完成。
//!
//! ## 依赖关系
//! - 被 `exec/runner.rs`, `batch/dispatcher.rs` 发送
//! - 被 `utils/progress.rs`, `commands/` 消费

use crate::models::{JobResult, OutputFiles};

use serde::Serialize;
use std::path::PathBuf;

/// 批处理事件
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BatchEvent {
    /// 批次开始
    Init { total: usize, completed: usize },
    /// 某个作业已从队列取出并即将启动
    #[serde(rename_all = "camelCase")]
    Started { file_path: PathBuf },
    /// stdout 片段
    #[serde(rename_all = "camelCase")]
    Output { file_path: PathBuf, output: String },
    /// stderr 片段
    #[serde(rename_all = "camelCase")]
    ErrorOutput { file_path: PathBuf, error: String },
    /// 单个作业完成
    #[serde(rename_all = "camelCase")]
    Complete {
        file_path: PathBuf,
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        output_files: Option<OutputFiles>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// 完成计数更新
    Update { total: usize, completed: usize },
}

impl BatchEvent {
    /// 由作业结果构造完成事件
    pub fn complete(result: &JobResult) -> Self {
        if result.success {
            BatchEvent::Complete {
                file_path: result.file_path.clone(),
                success: true,
                output_files: Some(result.output_files.clone()),
                error: None,
            }
        } else {
            BatchEvent::Complete {
                file_path: result.file_path.clone(),
                success: false,
                output_files: None,
                error: Some(result.error_text().to_string()),
            }
        }
    }
}

/// 事件接收者
///
/// 由多个工作线程同时调用。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: BatchEvent);
}

impl<F> EventSink for F
where
    F: Fn(BatchEvent) + Send + Sync,
{
    fn emit(&self, event: BatchEvent) {
        self(event)
    }
}

/// 丢弃所有事件
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: BatchEvent) {}
}

/// 每个事件一行 JSON，写到 stdout
pub struct JsonLinesSink;

impl EventSink for JsonLinesSink {
    fn emit(&self, event: BatchEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!("failed to serialize event: {}", e),
        }
    }
}
