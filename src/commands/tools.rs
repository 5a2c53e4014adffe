//! # tools 命令实现
//!
//! 列出三个工具、它们接受的选项以及在当前环境下的定位结果。
//!
//! ## 依赖关系
//! - 使用 `cli/tools.rs` 定义的参数
//! - 使用 `exec/locator.rs`, `utils/output.rs`

use crate::cli::tools::ToolsArgs;
use crate::context::AppContext;
use crate::error::Result;
use crate::exec::{ExecutableLocator, LocateExecutable};
use crate::models::ToolId;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 工具列表行
#[derive(Debug, Clone, Tabled)]
struct ToolRow {
    #[tabled(rename = "Tool")]
    name: String,
    #[tabled(rename = "Executable")]
    exe_name: String,
    #[tabled(rename = "-STD")]
    std: &'static str,
    #[tabled(rename = "-GBK")]
    gbk: &'static str,
    #[tabled(rename = "Resolved path")]
    path: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn tool_rows(locator: &ExecutableLocator) -> (Vec<ToolRow>, usize) {
    let mut found = 0;
    let rows = ToolId::ALL
        .iter()
        .map(|&tool| {
            let exe_name = tool.default_exe_name();
            let path = match locator.locate(tool, &exe_name) {
                Ok(path) => {
                    found += 1;
                    path.display().to_string()
                }
                Err(_) => "(missing)".to_string(),
            };
            ToolRow {
                name: tool.display_name().to_string(),
                exe_name,
                std: yes_no(tool.accepts_std()),
                gbk: yes_no(tool.accepts_gbk()),
                path,
            }
        })
        .collect();
    (rows, found)
}

/// 执行 tools 命令
pub fn execute(args: ToolsArgs, ctx: &AppContext) -> Result<bool> {
    output::print_header("Bundled Tools");

    let locator = args.locator.to_locator();
    output::print_info(&format!("Runtime mode: {:?}", locator.mode()));
    output::print_info(&format!(
        "Default concurrency: {} (detected CPUs)",
        ctx.cpu_count()
    ));

    let (rows, found) = tool_rows(&locator);
    println!("{}", Table::new(&rows));

    if found < rows.len() {
        for tool in ToolId::ALL {
            let exe_name = tool.default_exe_name();
            if locator.locate(tool, &exe_name).is_err() {
                output::print_warning(&format!(
                    "{} not found; searched: {}",
                    tool,
                    locator
                        .candidates(&exe_name)
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }
    }

    Ok(found > 0)
}
