//! # 作业结果模型
//!
//! 进程退出或启动失败时创建，创建后不再修改。
//!
//! ## 依赖关系
//! - 被 `exec/runner.rs`, `batch/` 使用
//! - 无外部模块依赖

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 结果分类，对应错误分类体系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    /// 退出码 0
    Success,
    /// 运行了但退出码非零（或被信号终止）
    ProcessFailure,
    /// 进程无法启动
    SpawnFailure,
    /// 输入文件不存在
    InputMissing,
    /// 处理作业时出现的其他异常
    Unexpected,
}

/// 外部工具在输入文件旁生成的两个输出文件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputFiles {
    pub summary: Option<PathBuf>,
    pub calculation: Option<PathBuf>,
}

impl OutputFiles {
    /// 探测 `<stem>-summary.tsv` 和 `<stem>-cal.tsv` 是否存在
    pub fn probe(input: &Path) -> Self {
        let (summary, calculation) = Self::expected_paths(input);
        Self {
            summary: summary.exists().then_some(summary),
            calculation: calculation.exists().then_some(calculation),
        }
    }

    /// 约定的输出文件路径
    pub fn expected_paths(input: &Path) -> (PathBuf, PathBuf) {
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        (
            dir.join(format!("{}-summary.tsv", stem)),
            dir.join(format!("{}-cal.tsv", stem)),
        )
    }
}

/// 单个作业结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub file_path: PathBuf,
    pub success: bool,
    pub kind: ResultKind,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub output_files: OutputFiles,
    pub error: Option<String>,
}

impl JobResult {
    /// 进程正常结束（有退出码）
    pub fn exited(file_path: PathBuf, exit_code: i32, stdout: String, stderr: String) -> Self {
        let success = exit_code == 0;
        let output_files = if success {
            OutputFiles::probe(&file_path)
        } else {
            OutputFiles::default()
        };
        Self {
            file_path,
            success,
            kind: if success {
                ResultKind::Success
            } else {
                ResultKind::ProcessFailure
            },
            exit_code: Some(exit_code),
            stdout,
            stderr,
            output_files,
            error: None,
        }
    }

    /// 进程被信号终止（无退出码）
    pub fn terminated(file_path: PathBuf, stdout: String, stderr: String) -> Self {
        Self {
            stdout,
            stderr,
            ..Self::failed(
                file_path,
                ResultKind::ProcessFailure,
                "process terminated by signal",
            )
        }
    }

    /// 未产生退出码的失败
    pub fn failed(file_path: PathBuf, kind: ResultKind, error: impl Into<String>) -> Self {
        Self {
            file_path,
            success: false,
            kind,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            output_files: OutputFiles::default(),
            error: Some(error.into()),
        }
    }

    /// 报告中显示的错误文本：error → stderr → "Unknown error"
    pub fn error_text(&self) -> &str {
        if let Some(err) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return err;
        }
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr;
        }
        "Unknown error"
    }
}
