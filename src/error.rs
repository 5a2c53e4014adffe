//! # 统一错误处理模块
//!
//! 定义 CMTools 的批处理级错误类型，使用 `thiserror` 派生。
//! 作业级失败（启动失败、非零退出）不走这里，而是记录在 `JobResult` 中。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// CMTools 统一错误类型
#[derive(Error, Debug)]
pub enum CmtoolsError {
    // ─────────────────────────────────────────────────────────────
    // 输入校验
    // ─────────────────────────────────────────────────────────────
    #[error("File does not exist: {path}")]
    FileNotFound { path: String },

    #[error("No valid files to process")]
    NoValidFiles,

    // ─────────────────────────────────────────────────────────────
    // 可执行文件定位
    // ─────────────────────────────────────────────────────────────
    #[error(
        "Executable not found: {}. Please ensure {exe_name} is present in the application directory.",
        display_candidates(.candidates)
    )]
    ExecutableNotFound {
        exe_name: String,
        candidates: Vec<PathBuf>,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部进程
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch process: {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    // ─────────────────────────────────────────────────────────────
    // 报告输出
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CmtoolsError>;
