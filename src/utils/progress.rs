//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，并把批处理事件映射到进度条上。
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `indicatif` crate

use crate::batch::{BatchEvent, EventSink};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// 以进度条展示批处理事件
pub struct ProgressSink {
    pb: ProgressBar,
}

impl ProgressSink {
    pub fn new(message: &str) -> Self {
        Self {
            pb: create_progress_bar(0, message),
        }
    }

    /// 隐藏的进度条（测试或非终端输出）
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl EventSink for ProgressSink {
    fn emit(&self, event: BatchEvent) {
        match event {
            BatchEvent::Init { total, .. } => {
                self.pb.set_length(total as u64);
                self.pb.set_position(0);
            }
            BatchEvent::Update { completed, .. } => {
                self.pb.set_position(completed as u64);
            }
            BatchEvent::Started { file_path } => {
                let name = file_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.pb.set_message(name);
            }
            BatchEvent::Complete {
                file_path,
                success: false,
                error,
                ..
            } => {
                self.pb.println(format!(
                    "{} {}: {}",
                    "[FAIL]".red().bold(),
                    file_path.display(),
                    error.unwrap_or_default().trim()
                ));
            }
            BatchEvent::Output { file_path, output } => {
                tracing::debug!(file = %file_path.display(), "{}", output.trim_end());
            }
            BatchEvent::ErrorOutput { file_path, error } => {
                tracing::debug!(file = %file_path.display(), "stderr: {}", error.trim_end());
            }
            BatchEvent::Complete { .. } => {}
        }
    }
}
