//! # 作业模型
//!
//! 一个作业 = 一个输入文件 + 一组处理选项。作业创建后不可变。
//!
//! ## 依赖关系
//! - 被 `exec/runner.rs`, `batch/` 使用
//! - 使用 `models/tool.rs`

use super::tool::ToolId;

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 标准品名称的占位默认值，等于该值时不传 `-STD`
pub const STD_SENTINEL: &str = "STD";

/// 处理选项（同一批次的所有作业共享）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOptions {
    /// 使用峰面积数据 (`-Area`)
    pub use_area: bool,
    /// 标准品样本名称 (`-STD <name>`)
    pub std_name: Option<String>,
    /// Windows 中文编码输出 (`-GBK`)
    #[serde(rename = "useGBK")]
    pub use_gbk: bool,
    /// 开发者模式 (`-dev`)
    pub dev_mode: bool,
    /// 可执行文件名
    pub exe_name: String,
    /// 工具标识
    #[serde(rename = "toolId")]
    pub tool: ToolId,
}

impl JobOptions {
    /// 以工具默认值创建选项
    pub fn new(tool: ToolId) -> Self {
        Self {
            use_area: false,
            std_name: None,
            use_gbk: false,
            dev_mode: false,
            exe_name: tool.default_exe_name(),
            tool,
        }
    }

    /// 实际生效的标准品名称（去空白、排除占位值和不接受 `-STD` 的工具）
    pub fn effective_std_name(&self) -> Option<&str> {
        if !self.tool.accepts_std() {
            return None;
        }
        self.std_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != STD_SENTINEL)
    }

    /// 构造外部工具的参数向量
    ///
    /// `<exe> -i <file> [-Area] [-STD <name>] [-GBK] [-dev]`
    pub fn build_args(&self, file_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-i".into(), file_path.as_os_str().to_owned()];

        if self.use_area {
            args.push("-Area".into());
        }

        if let Some(name) = self.effective_std_name() {
            args.push("-STD".into());
            args.push(name.into());
        }

        if self.use_gbk && self.tool.accepts_gbk() {
            args.push("-GBK".into());
        }

        if self.dev_mode {
            args.push("-dev".into());
        }

        args
    }
}

/// 单个作业
#[derive(Debug, Clone)]
pub struct Job {
    file_path: PathBuf,
    options: Arc<JobOptions>,
}

impl Job {
    pub fn new(file_path: PathBuf, options: Arc<JobOptions>) -> Self {
        Self { file_path, options }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 工作目录：输入文件所在目录
    pub fn working_dir(&self) -> &Path {
        match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    pub fn args(&self) -> Vec<OsString> {
        self.options.build_args(&self.file_path)
    }
}
