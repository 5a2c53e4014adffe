//! # 批处理入口
//!
//! 过滤输入 → 定位可执行文件 → 调度 → 汇总。
//! 批次级错误（没有有效文件、找不到可执行文件）在启动任何子进程之前同步返回。
//!
//! ## 依赖关系
//! - 被 `commands/process.rs`, `commands/run.rs` 调用
//! - 使用 `exec/`, `batch/dispatcher.rs`, `batch/summary.rs`

use super::dispatcher::BatchDispatcher;
use super::events::EventSink;
use super::summary::BatchSummary;
use crate::error::{CmtoolsError, Result};
use crate::exec::{LocateExecutable, ProcessRunner};
use crate::models::{Job, JobOptions, JobResult};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 一次批处理请求
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub file_paths: Vec<PathBuf>,
    pub options: JobOptions,
    pub max_concurrent: usize,
}

/// 处理多个文件
pub fn process_files(
    request: BatchRequest,
    locator: &dyn LocateExecutable,
    sink: &dyn EventSink,
) -> Result<BatchSummary> {
    let (valid, skipped): (Vec<PathBuf>, Vec<PathBuf>) =
        request.file_paths.into_iter().partition(|p| p.exists());

    for path in &skipped {
        tracing::warn!(file = %path.display(), "input file does not exist, skipping");
    }

    if valid.is_empty() {
        return Err(CmtoolsError::NoValidFiles);
    }

    let options = request.options;
    let executable = locator.locate(options.tool, &options.exe_name)?;
    tracing::info!(
        tool = %options.tool,
        exe = %executable.display(),
        files = valid.len(),
        "starting batch"
    );

    let runner = ProcessRunner::new(executable);
    let options = Arc::new(options);
    let jobs: Vec<Job> = valid
        .into_iter()
        .map(|path| Job::new(path, options.clone()))
        .collect();

    let results = BatchDispatcher::new(request.max_concurrent).run(jobs, sink, |job, sink| {
        runner.run_job(job, sink)
    })?;

    Ok(BatchSummary::from_results(results, skipped))
}

/// 处理单个文件
pub fn process_file(
    file_path: &Path,
    options: JobOptions,
    locator: &dyn LocateExecutable,
    sink: &dyn EventSink,
) -> Result<JobResult> {
    if !file_path.exists() {
        return Err(CmtoolsError::FileNotFound {
            path: file_path.display().to_string(),
        });
    }

    let executable = locator.locate(options.tool, &options.exe_name)?;
    let job = Job::new(file_path.to_path_buf(), Arc::new(options));
    Ok(ProcessRunner::new(executable).run_job(&job, sink))
}
