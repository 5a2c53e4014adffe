//! # process 子命令 CLI 定义
//!
//! 批量处理输入文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use super::common::{JobArgs, LocatorArgs};
use crate::batch::collector::DEFAULT_PATTERN;

use clap::Args;
use std::path::PathBuf;

/// process 子命令参数
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Input files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub job: JobArgs,

    /// File patterns used when scanning directories (comma-separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Scan directories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Maximum number of concurrent tool processes [default: number of CPUs]
    #[arg(short, long, env = "CMTOOLS_JOBS")]
    pub jobs: Option<usize>,

    /// Emit progress events and the final summary as JSON lines on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the failure report to this TSV file
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub locator: LocatorArgs,
}
