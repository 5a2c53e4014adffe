//! # run 命令实现
//!
//! 处理单个文件，实时打印工具输出。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `batch/pipeline.rs`, `utils/output.rs`

use crate::batch::{process_file, BatchEvent, NullSink};
use crate::cli::run::RunArgs;
use crate::error::{CmtoolsError, Result};
use crate::utils::output;

use colored::Colorize;
use serde_json::{json, Value};

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<bool> {
    let options = args.job.to_options();
    let locator = args.locator.to_locator();

    if args.json {
        return match process_file(&args.file, options, &locator, &NullSink) {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(result.success)
            }
            Err(e) => {
                println!("{}", error_object(&e));
                Ok(false)
            }
        };
    }

    output::print_header(&format!("{}: {}", options.tool, args.file.display()));

    let sink = |event: BatchEvent| match event {
        BatchEvent::Output { output, .. } => print!("{}", output),
        BatchEvent::ErrorOutput { error, .. } => eprint!("{}", error.red()),
        _ => {}
    };

    let result = process_file(&args.file, options, &locator, &sink)?;
    output::print_separator();

    if result.success {
        output::print_success(&format!("{} processed", args.file.display()));
        for path in [&result.output_files.summary, &result.output_files.calculation]
            .into_iter()
            .flatten()
        {
            output::print_info(&format!("Output: {}", path.display()));
        }
    } else {
        let code = result
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        output::print_error(&format!(
            "{} failed (exit code {}): {}",
            args.file.display(),
            code,
            result.error_text()
        ));
    }

    Ok(result.success)
}

/// `--json` 模式下无法运行时的输出
fn error_object(err: &CmtoolsError) -> Value {
    json!({
        "success": false,
        "error": err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{ExecutableLocator, RuntimeMode};
    use crate::models::{JobOptions, ToolId};

    #[test]
    fn test_error_object_for_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let locator = ExecutableLocator::new(
            RuntimeMode::Development,
            dir.path().join("resources"),
            dir.path().to_path_buf(),
        );
        let input = dir.path().join("none.txt");

        let err = process_file(&input, JobOptions::new(ToolId::Aneu23), &locator, &NullSink)
            .unwrap_err();
        let value = error_object(&err);

        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().contains("none.txt"));
    }

    #[test]
    fn test_error_object_for_missing_executable() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.txt");
        std::fs::write(&input, "x").unwrap();
        let locator = ExecutableLocator::new(
            RuntimeMode::Development,
            dir.path().join("resources"),
            dir.path().join("tools"),
        );

        let err = process_file(&input, JobOptions::new(ToolId::ShCarrier), &locator, &NullSink)
            .unwrap_err();
        let value = error_object(&err);

        assert_eq!(value["success"], false);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("Executable not found"));
    }
}
