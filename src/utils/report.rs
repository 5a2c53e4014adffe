//! # 错误报告
//!
//! 把批次中失败的作业列成表格打印，或写入 TSV 文件。
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `tabled` 打印表格，`csv` 写 TSV

use crate::batch::FailureEntry;
use crate::error::{CmtoolsError, Result};

use std::path::Path;
use tabled::{Table, Tabled};

/// 错误报告显示的最大字符数
const MAX_ERROR_CHARS: usize = 120;

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Exit code")]
    code: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl From<&FailureEntry> for FailureRow {
    fn from(entry: &FailureEntry) -> Self {
        Self {
            file: entry.file_path.display().to_string(),
            code: exit_code_text(entry.exit_code),
            error: truncate(first_line(&entry.error), MAX_ERROR_CHARS),
        }
    }
}

fn exit_code_text(code: Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// 渲染失败列表
pub fn render_failure_table(failures: &[FailureEntry]) -> String {
    let rows: Vec<FailureRow> = failures.iter().map(FailureRow::from).collect();
    Table::new(&rows).to_string()
}

/// 写入 TSV 格式的错误报告
pub fn write_failure_report(failures: &[FailureEntry], output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(output_path)?;

    wtr.write_record(["file_path", "exit_code", "error"])?;

    for entry in failures {
        wtr.write_record([
            entry.file_path.display().to_string(),
            exit_code_text(entry.exit_code),
            entry.error.trim().to_string(),
        ])?;
    }

    wtr.flush().map_err(|e| CmtoolsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entries() -> Vec<FailureEntry> {
        vec![
            FailureEntry {
                file_path: "/data/a.txt".into(),
                exit_code: Some(2),
                error: "bad header\nline 2".into(),
            },
            FailureEntry {
                file_path: "/data/b.txt".into(),
                exit_code: None,
                error: "Failed to launch process".into(),
            },
        ]
    }

    #[test]
    fn test_table_contains_rows() {
        let table = render_failure_table(&entries());
        assert!(table.contains("/data/a.txt"));
        assert!(table.contains("bad header"));
        assert!(!table.contains("line 2"));
        assert!(table.contains("N/A"));
    }

    #[test]
    fn test_truncate_long_error() {
        let long = "x".repeat(200);
        let out = truncate(&long, 10);
        assert_eq!(out, format!("{}...", "x".repeat(10)));
    }

    #[test]
    fn test_write_tsv_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failures.tsv");
        write_failure_report(&entries(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("file_path\texit_code\terror"));
        assert_eq!(lines.next(), Some("/data/a.txt\t2\t\"bad header"));
        assert!(content.contains("/data/b.txt\tN/A\tFailed to launch process"));
    }
}
