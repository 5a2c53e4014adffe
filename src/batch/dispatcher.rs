//! # 批量调度器
//!
//! 以最多 K 个并发子进程执行一批作业。
//!
//! ## 功能
//! - 固定大小的工作线程池（rayon），从通道中按提交顺序取作业
//! - 单个作业失败不影响其余作业，全部跑完后统一汇报
//! - 作业处理中的 panic 被捕获并转成失败结果
//! - 完成计数单调递增的进度通知
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 调用
//! - 使用 `batch/events.rs` 推送事件
//! - 使用 `rayon` 构建线程池

use super::events::{BatchEvent, EventSink};
use crate::error::Result;
use crate::models::{Job, JobResult, ResultKind};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 单个批次的运行状态，仅由调度器持有
#[derive(Debug, Default)]
struct BatchState {
    /// 尚在队列中的作业数
    pending: usize,
    /// 正在运行的作业
    in_progress: Vec<PathBuf>,
    /// 完成顺序的结果
    results: Vec<JobResult>,
    /// 已完成数量
    completed: usize,
}

/// 批量调度器
pub struct BatchDispatcher {
    /// 最大并发数
    max_concurrent: usize,
}

impl BatchDispatcher {
    /// 创建调度器，并发数为 0 时按 1 处理
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// 执行整批作业，返回完成顺序的结果
    ///
    /// `execute` 在工作线程上调用，每次处理一个作业。
    pub fn run<F>(&self, jobs: Vec<Job>, sink: &dyn EventSink, execute: F) -> Result<Vec<JobResult>>
    where
        F: Fn(&Job, &dyn EventSink) -> JobResult + Sync,
    {
        let total = jobs.len();
        sink.emit(BatchEvent::Init {
            total,
            completed: 0,
        });

        if total == 0 {
            return Ok(Vec::new());
        }

        let workers = self.max_concurrent.min(total);
        tracing::info!(total, workers, "dispatching batch");

        let (tx, rx) = mpsc::channel();
        for job in jobs {
            if tx.send(job).is_err() {
                break;
            }
        }
        drop(tx);

        let queue = Mutex::new(rx);
        let state = Mutex::new(BatchState {
            pending: total,
            ..BatchState::default()
        });

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("cmtools-worker-{}", i))
            .build()?;

        pool.scope(|s| {
            for _ in 0..workers {
                s.spawn(|_| worker_loop(&queue, &state, total, sink, &execute));
            }
        });

        let state = state.into_inner().unwrap_or_else(PoisonError::into_inner);
        Ok(state.results)
    }
}

/// 工作线程：取作业、执行、记录，直到队列为空
fn worker_loop<F>(
    queue: &Mutex<Receiver<Job>>,
    state: &Mutex<BatchState>,
    total: usize,
    sink: &dyn EventSink,
    execute: &F,
) where
    F: Fn(&Job, &dyn EventSink) -> JobResult + Sync,
{
    loop {
        let next = lock(queue).try_recv();
        let Ok(job) = next else {
            break;
        };

        {
            let mut st = lock(state);
            st.pending -= 1;
            st.in_progress.push(job.file_path().to_path_buf());
            sink.emit(BatchEvent::Started {
                file_path: job.file_path().to_path_buf(),
            });
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| execute(&job, sink)))
            .unwrap_or_else(|payload| {
                let message = panic_message(payload.as_ref());
                tracing::error!(file = %job.file_path().display(), "job panicked: {}", message);
                JobResult::failed(
                    job.file_path().to_path_buf(),
                    ResultKind::Unexpected,
                    message,
                )
            });

        let mut st = lock(state);
        if let Some(pos) = st.in_progress.iter().position(|p| p == job.file_path()) {
            st.in_progress.swap_remove(pos);
        }
        st.completed += 1;
        sink.emit(BatchEvent::complete(&result));
        sink.emit(BatchEvent::Update {
            total,
            completed: st.completed,
        });
        st.results.push(result);

        debug_assert_eq!(st.pending + st.in_progress.len() + st.results.len(), total);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Unexpected error: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Unexpected error: {}", s)
    } else {
        "Unknown error".to_string()
    }
}
