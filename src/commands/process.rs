//! # process 命令实现
//!
//! 批量运行选定的外部工具。
//!
//! ## 功能
//! - 收集输入文件（文件 / 目录）
//! - 有上限的并发执行，进度条显示
//! - 汇总成功 / 失败，失败列表以表格打印，可写入 TSV
//! - `--json` 模式下按行输出事件和最终汇总
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `batch/`, `utils/output.rs`, `utils/progress.rs`, `utils/report.rs`

use crate::batch::{process_files, BatchRequest, BatchSummary, FileCollector, JsonLinesSink};
use crate::cli::process::ProcessArgs;
use crate::context::AppContext;
use crate::error::{CmtoolsError, Result};
use crate::exec::LocateExecutable;
use crate::utils::progress::ProgressSink;
use crate::utils::{output, report};

use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// `--json` 模式的最后一行
#[derive(Serialize)]
struct SummaryLine<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    summary: &'a BatchSummary,
}

/// 执行 process 命令
pub fn execute(args: ProcessArgs, ctx: &AppContext) -> Result<bool> {
    let files = FileCollector::new(args.inputs.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();
    let missing: Vec<PathBuf> = files.iter().filter(|p| !p.exists()).cloned().collect();

    let options = args.job.to_options();
    let locator = args.locator.to_locator();
    let max_concurrent = args.jobs.unwrap_or_else(|| ctx.cpu_count());

    tracing::info!(
        files = files.len(),
        missing = missing.len(),
        max_concurrent,
        options = ?options,
        "process command"
    );

    let request = BatchRequest {
        file_paths: files,
        options,
        max_concurrent,
    };

    if args.json {
        return execute_json(request, &locator, &missing, args.report.as_deref());
    }

    output::print_header(&format!("Batch Processing: {}", request.options.tool));
    output::print_info(&format!(
        "{} input files, up to {} concurrent processes",
        request.file_paths.len(),
        max_concurrent.max(1)
    ));
    for path in &missing {
        output::print_skip(&format!("File does not exist: {}", path.display()));
    }

    // 调试日志会和进度条抢同一块终端
    let sink = if ctx.verbosity() >= 2 {
        ProgressSink::hidden()
    } else {
        ProgressSink::new("Processing")
    };
    let result = process_files(request, &locator, &sink);
    sink.finish();
    let summary = result?;

    output::print_separator();
    output::print_summary(&summary);

    let failures = summary.failures();
    if !failures.is_empty() {
        output::print_warning("Failed files:");
        println!("{}", report::render_failure_table(&failures));
    }

    if let Some(ref path) = args.report {
        report::write_failure_report(&failures, path)?;
        output::print_success(&format!("Failure report saved to '{}'", path.display()));
    }

    Ok(summary.success)
}

/// JSON 行输出模式
fn execute_json(
    request: BatchRequest,
    locator: &dyn LocateExecutable,
    missing: &[PathBuf],
    report_path: Option<&Path>,
) -> Result<bool> {
    let summary = match process_files(request, locator, &JsonLinesSink) {
        Ok(summary) => summary,
        Err(e) => {
            println!("{}", error_line(&e, missing));
            return Ok(false);
        }
    };

    if let Some(path) = report_path {
        report::write_failure_report(&summary.failures(), path)?;
    }

    println!("{}", summary_line(&summary)?);
    Ok(summary.success)
}

/// 批次完成后的汇总行
fn summary_line(summary: &BatchSummary) -> Result<Value> {
    let line = SummaryLine {
        kind: "summary",
        summary,
    };
    Ok(serde_json::to_value(line)?)
}

/// 批次级错误的汇总行
fn error_line(err: &CmtoolsError, skipped: &[PathBuf]) -> Value {
    json!({
        "type": "summary",
        "success": false,
        "error": err.to_string(),
        "skipped": skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::NullSink;
    use crate::exec::{ExecutableLocator, RuntimeMode};
    use crate::models::{JobOptions, JobResult, ResultKind, ToolId};

    #[test]
    fn test_summary_line_shape() {
        let summary = BatchSummary::from_results(
            vec![
                JobResult::exited("a.txt".into(), 0, String::new(), String::new()),
                JobResult::failed("b.txt".into(), ResultKind::SpawnFailure, "cannot start"),
            ],
            vec![PathBuf::from("ghost.txt")],
        );

        let line = summary_line(&summary).unwrap();
        assert_eq!(line["type"], "summary");
        assert_eq!(line["success"], true);
        assert_eq!(line["totalFiles"], 2);
        assert_eq!(line["successCount"], 1);
        assert_eq!(line["failureCount"], 1);
        assert_eq!(line["skipped"], json!(["ghost.txt"]));

        let results = line["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1]["filePath"], "b.txt");
        assert_eq!(results[1]["error"], "cannot start");
        assert!(results[1]["exitCode"].is_null());
    }

    #[test]
    fn test_error_line_for_no_valid_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = vec![dir.path().join("a.txt"), dir.path().join("b.txt")];
        let locator = ExecutableLocator::new(
            RuntimeMode::Development,
            dir.path().join("resources"),
            dir.path().to_path_buf(),
        );
        let request = BatchRequest {
            file_paths: missing.clone(),
            options: JobOptions::new(ToolId::Aneu23),
            max_concurrent: 2,
        };

        let err = process_files(request, &locator, &NullSink).unwrap_err();
        let line = error_line(&err, &missing);

        assert_eq!(line["type"], "summary");
        assert_eq!(line["success"], false);
        assert_eq!(line["error"], "No valid files to process");
        assert_eq!(line["skipped"].as_array().unwrap().len(), 2);
        assert!(line.get("totalFiles").is_none());
    }
}
