//! # CMTools - 外部分析工具批处理外壳
//!
//! 把 AneuFiler / Aneu23 / SHCarrier 三个命令行工具包装成一个可执行文件，
//! 负责定位工具、构造参数、有上限地并发运行并汇总结果。
//!
//! ## 子命令
//! - `process` - 批量处理输入文件
//! - `run`     - 处理单个文件并实时输出
//! - `tools`   - 列出工具及定位结果
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── context.rs  (应用上下文：配色、日志、并发数)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (收集、调度、汇总)
//!   │     ├── exec/    (定位与运行外部进程)
//!   │     └── models/  (工具、作业、结果)
//!   ├── utils/      (输出、进度条、报告、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod context;
mod error;
mod exec;
mod models;
mod utils;

#[cfg(all(test, unix))]
mod test_support;

use clap::Parser;
use cli::Cli;
use context::AppContext;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    let ctx = AppContext::init(&cli);

    let code = match commands::run(cli.command, &ctx) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            1
        }
    };

    ctx.teardown();
    std::process::exit(code);
}
