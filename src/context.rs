//! # 应用上下文
//!
//! 启动时创建、退出时销毁，集中持有终端配色、日志级别和默认并发数，
//! 由 `main.rs` 传给各个命令。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 使用
//! - 使用 `utils/logging.rs`

use crate::cli::{Cli, ColorChoice};
use crate::utils::logging;

use std::io::IsTerminal;
use std::time::Instant;

/// 应用上下文
pub struct AppContext {
    verbosity: u8,
    cpu_count: usize,
    started: Instant,
}

impl AppContext {
    /// 根据全局参数初始化配色与日志
    pub fn init(cli: &Cli) -> Self {
        let color = match cli.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        colored::control::set_override(color);

        let ansi = color && std::io::stderr().is_terminal();
        logging::init(cli.verbose, ansi);

        let cpu_count = num_cpus::get().max(1);
        tracing::debug!(cpu_count, color, "application context initialized");

        Self {
            verbosity: cli.verbose,
            cpu_count,
            started: Instant::now(),
        }
    }

    /// `-v` 的次数
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// 检测到的 CPU 数，作为默认并发上限
    pub fn cpu_count(&self) -> usize {
        self.cpu_count
    }

    /// 退出前的清理
    pub fn teardown(self) {
        colored::control::unset_override();
        tracing::debug!(elapsed = ?self.started.elapsed(), "application finished");
    }
}
