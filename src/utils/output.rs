//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::batch::{BatchStatus, BatchSummary};

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 批次汇总的一行文字
pub fn summary_line(summary: &BatchSummary) -> String {
    format!(
        "Processed {} files: {} succeeded, {} failed",
        summary.total_files, summary.success_count, summary.failure_count
    )
}

/// 按批次状态着色打印汇总
pub fn print_summary(summary: &BatchSummary) {
    let line = summary_line(summary);
    match summary.status() {
        BatchStatus::AllSucceeded => println!("{} {}", "[DONE]".green().bold(), line),
        BatchStatus::Partial => println!("{} {}", "[DONE]".yellow().bold(), line.yellow()),
        BatchStatus::AllFailed => println!("{} {}", "[DONE]".red().bold(), line.red()),
    }
}
