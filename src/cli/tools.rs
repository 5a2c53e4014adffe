//! # tools 子命令 CLI 定义
//!
//! 列出工具与定位结果
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tools.rs`

use super::common::LocatorArgs;

use clap::Args;

/// tools 子命令参数
#[derive(Args, Debug)]
pub struct ToolsArgs {
    #[command(flatten)]
    pub locator: LocatorArgs,
}
