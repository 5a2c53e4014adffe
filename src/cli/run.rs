//! # run 子命令 CLI 定义
//!
//! 处理单个文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::common::{JobArgs, LocatorArgs};

use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input file
    pub file: PathBuf,

    #[command(flatten)]
    pub job: JobArgs,

    /// Print the result as JSON instead of streaming the tool output
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub locator: LocatorArgs,
}
