//! # 结果汇总
//!
//! 统计一个批次的成功 / 失败，并整理出错误报告所需的失败列表。
//!
//! 批次级 `success` 只要有一个作业成功即为 true（尽力而为语义）。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 构造
//! - 被 `commands/process.rs`, `utils/report.rs` 使用

use crate::models::JobResult;

use serde::Serialize;
use std::path::PathBuf;

/// 批次整体状态，用于决定汇总信息的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchStatus {
    AllSucceeded,
    Partial,
    AllFailed,
}

/// 错误报告中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureEntry {
    pub file_path: PathBuf,
    pub exit_code: Option<i32>,
    pub error: String,
}

/// 批次汇总
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub success: bool,
    pub total_files: usize,
    pub success_count: usize,
    pub failure_count: usize,
    /// 因不存在而被过滤掉的输入
    pub skipped: Vec<PathBuf>,
    /// 完成顺序
    pub results: Vec<JobResult>,
}

impl BatchSummary {
    /// 由完成顺序的结果构造汇总
    pub fn from_results(results: Vec<JobResult>, skipped: Vec<PathBuf>) -> Self {
        let total_files = results.len();
        let success_count = results.iter().filter(|r| r.success).count();
        Self {
            success: success_count > 0,
            total_files,
            success_count,
            failure_count: total_files - success_count,
            skipped,
            results,
        }
    }

    pub fn status(&self) -> BatchStatus {
        if self.success_count == self.total_files {
            BatchStatus::AllSucceeded
        } else if self.success_count == 0 {
            BatchStatus::AllFailed
        } else {
            BatchStatus::Partial
        }
    }

    /// 失败作业列表（完成顺序）
    pub fn failures(&self) -> Vec<FailureEntry> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| FailureEntry {
                file_path: r.file_path.clone(),
                exit_code: r.exit_code,
                error: r.error_text().to_string(),
            })
            .collect()
    }

    /// 按文件路径查找结果
    #[cfg(test)]
    pub fn result_for(&self, file_path: &std::path::Path) -> Option<&JobResult> {
        self.results.iter().find(|r| r.file_path == file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultKind;

    fn ok(path: &str) -> JobResult {
        JobResult::exited(path.into(), 0, String::new(), String::new())
    }

    fn failed(path: &str, code: i32, stderr: &str) -> JobResult {
        JobResult::exited(path.into(), code, String::new(), stderr.into())
    }

    #[test]
    fn test_partial_success_reports_batch_success() {
        let summary = BatchSummary::from_results(
            vec![ok("a"), failed("b", 2, "bad"), failed("c", 1, "")],
            vec![],
        );
        assert!(summary.success);
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.success_count, 1);
        assert_eq!(summary.failure_count, 2);
        assert_eq!(summary.status(), BatchStatus::Partial);
    }

    #[test]
    fn test_all_failed_is_batch_failure() {
        let summary = BatchSummary::from_results(
            vec![
                failed("a", 1, "x"),
                JobResult::failed("b".into(), ResultKind::SpawnFailure, "cannot start"),
            ],
            vec![],
        );
        assert!(!summary.success);
        assert_eq!(summary.status(), BatchStatus::AllFailed);
        assert_eq!(summary.success_count + summary.failure_count, summary.total_files);
    }

    #[test]
    fn test_all_succeeded() {
        let summary = BatchSummary::from_results(vec![ok("a"), ok("b")], vec![]);
        assert!(summary.success);
        assert_eq!(summary.status(), BatchStatus::AllSucceeded);
        assert!(summary.failures().is_empty());
    }

    #[test]
    fn test_failures_in_completion_order_with_error_text() {
        let summary = BatchSummary::from_results(
            vec![
                failed("z", 4, "z failed"),
                ok("a"),
                JobResult::failed("m".into(), ResultKind::SpawnFailure, "cannot start"),
                failed("b", 1, ""),
            ],
            vec![],
        );
        let failures = summary.failures();
        assert_eq!(
            failures,
            vec![
                FailureEntry {
                    file_path: "z".into(),
                    exit_code: Some(4),
                    error: "z failed".into(),
                },
                FailureEntry {
                    file_path: "m".into(),
                    exit_code: None,
                    error: "cannot start".into(),
                },
                FailureEntry {
                    file_path: "b".into(),
                    exit_code: Some(1),
                    error: "Unknown error".into(),
                },
            ]
        );
    }

    #[test]
    fn test_lookup_by_path() {
        let summary = BatchSummary::from_results(vec![failed("b", 1, "x"), ok("a")], vec![]);
        assert!(summary.result_for(std::path::Path::new("a")).unwrap().success);
        assert!(!summary.result_for(std::path::Path::new("b")).unwrap().success);
        assert!(summary.result_for(std::path::Path::new("c")).is_none());
    }
}
