//! # 进程执行器
//!
//! 以参数向量（不经过 shell）启动单个外部进程，逐行转发 stdout/stderr，
//! 进程退出后生成 `JobResult`。
//!
//! ## 依赖关系
//! - 被 `batch/dispatcher.rs`, `batch/pipeline.rs` 调用
//! - 使用 `models/`, `batch/events.rs`

use crate::batch::events::{BatchEvent, EventSink};
use crate::error::CmtoolsError;
use crate::models::{Job, JobResult, ResultKind};

use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// 输出流类型
#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// 单个外部工具的执行器
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    executable: PathBuf,
}

impl ProcessRunner {
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    /// 执行一个作业：先检查输入文件，再启动进程
    pub fn run_job(&self, job: &Job, sink: &dyn EventSink) -> JobResult {
        let file_path = job.file_path();
        if !file_path.exists() {
            tracing::warn!(file = %file_path.display(), "input file disappeared before spawn");
            return JobResult::failed(
                file_path.to_path_buf(),
                ResultKind::InputMissing,
                "File does not exist",
            );
        }

        self.run(file_path, &job.args(), job.working_dir(), sink)
    }

    /// 启动进程并等待退出
    pub fn run(
        &self,
        file_path: &Path,
        args: &[OsString],
        working_dir: &Path,
        sink: &dyn EventSink,
    ) -> JobResult {
        tracing::debug!(
            exe = %self.executable.display(),
            args = ?args,
            cwd = %working_dir.display(),
            "spawning process"
        );

        let spawned = Command::new(&self.executable)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                let err = CmtoolsError::SpawnFailed {
                    command: self.executable.display().to_string(),
                    source: e,
                };
                tracing::error!(file = %file_path.display(), "{}", err);
                return JobResult::failed(
                    file_path.to_path_buf(),
                    ResultKind::SpawnFailure,
                    err.to_string(),
                );
            }
        };

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        // 两个管道并行读取，避免任一管道写满阻塞子进程
        let (stdout, stderr) = thread::scope(|s| {
            let out = s.spawn(|| pump(stdout_pipe, Stream::Stdout, file_path, sink));
            let err = s.spawn(|| pump(stderr_pipe, Stream::Stderr, file_path, sink));
            (
                out.join().unwrap_or_default(),
                err.join().unwrap_or_default(),
            )
        });

        match child.wait() {
            Ok(status) => match status.code() {
                Some(code) => {
                    tracing::info!(file = %file_path.display(), code, "process exited");
                    JobResult::exited(file_path.to_path_buf(), code, stdout, stderr)
                }
                None => {
                    tracing::warn!(file = %file_path.display(), "process terminated by signal");
                    JobResult::terminated(file_path.to_path_buf(), stdout, stderr)
                }
            },
            Err(e) => JobResult {
                stdout,
                stderr,
                ..JobResult::failed(
                    file_path.to_path_buf(),
                    ResultKind::Unexpected,
                    format!("Failed to wait for process: {}", e),
                )
            },
        }
    }
}

/// 逐行读取管道，每行立即转发并累积
fn pump<R: Read>(pipe: Option<R>, stream: Stream, file_path: &Path, sink: &dyn EventSink) -> String {
    let Some(pipe) = pipe else {
        return String::new();
    };

    let mut reader = BufReader::new(pipe);
    let mut collected = String::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(file = %file_path.display(), "error reading {:?}: {}", stream, e);
                break;
            }
        }

        let chunk = String::from_utf8_lossy(&buf).into_owned();
        collected.push_str(&chunk);

        let event = match stream {
            Stream::Stdout => {
                tracing::trace!(file = %file_path.display(), "stdout: {}", chunk.trim_end());
                BatchEvent::Output {
                    file_path: file_path.to_path_buf(),
                    output: chunk,
                }
            }
            Stream::Stderr => {
                tracing::debug!(file = %file_path.display(), "stderr: {}", chunk.trim_end());
                BatchEvent::ErrorOutput {
                    file_path: file_path.to_path_buf(),
                    error: chunk,
                }
            }
        };
        sink.emit(event);
    }

    collected
}
