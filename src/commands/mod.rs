//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `exec/`, `utils/`
//! - 子模块: process, run, tools

pub mod process;
pub mod run;
pub mod tools;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::error::Result;

/// 执行命令，返回整体是否成功
pub fn run(cmd: Commands, ctx: &AppContext) -> Result<bool> {
    match cmd {
        Commands::Process(args) => process::execute(args, ctx),
        Commands::Run(args) => run::execute(args),
        Commands::Tools(args) => tools::execute(args, ctx),
    }
}
