//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `process`: 批量处理多个输入文件
//! - `run`: 处理单个文件并实时输出工具日志
//! - `tools`: 列出可用工具及其定位结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: common, process, run, tools

pub mod common;
pub mod process;
pub mod run;
pub mod tools;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// CMTools - 外部分析工具批处理外壳
#[derive(Parser)]
#[command(name = "cmtools")]
#[command(version)]
#[command(about = "Run the bundled AneuFiler / Aneu23 / SHCarrier tools over batches of files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Increase diagnostic log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 终端配色
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Process a batch of input files with the selected tool
    Process(process::ProcessArgs),

    /// Process a single file and stream the tool's output
    Run(run::RunArgs),

    /// List the bundled tools and where they resolve
    Tools(tools::ToolsArgs),
}
