//! # 可执行文件定位
//!
//! 根据运行模式（打包 / 生产 / 开发）确定外部工具的位置。
//!
//! ## 候选路径
//! - 打包：`<resources>/app.unpacked/<exe>`，其次 `<resources>/<exe>`
//! - 生产（未打包）：`<resources>/<exe>`
//! - 开发：`<tools_dir>/<exe>`
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs`, `commands/tools.rs` 使用
//! - 使用 `models/tool.rs`

use crate::error::{CmtoolsError, Result};
use crate::models::ToolId;

use std::path::{Path, PathBuf};

/// 打包后解压资源所在的子目录名
pub const UNPACKED_DIR: &str = "app.unpacked";

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
    Packaged,
}

impl RuntimeMode {
    /// 由配置推断运行模式，打包优先
    pub fn detect(packaged: bool, env: Option<&str>) -> Self {
        if packaged {
            RuntimeMode::Packaged
        } else if env.is_some_and(|e| e.eq_ignore_ascii_case("production")) {
            RuntimeMode::Production
        } else {
            RuntimeMode::Development
        }
    }
}

/// 按工具名解析可执行文件路径
///
/// 作为批处理入口的抽象边界，测试中可替换。
pub trait LocateExecutable {
    fn locate(&self, tool: ToolId, exe_name: &str) -> Result<PathBuf>;
}

/// 基于目录布局的定位器
#[derive(Debug, Clone)]
pub struct ExecutableLocator {
    mode: RuntimeMode,
    resources_dir: PathBuf,
    tools_dir: PathBuf,
}

impl ExecutableLocator {
    pub fn new(mode: RuntimeMode, resources_dir: PathBuf, tools_dir: PathBuf) -> Self {
        Self {
            mode,
            resources_dir,
            tools_dir,
        }
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// 按优先级排列的候选路径
    pub fn candidates(&self, exe_name: &str) -> Vec<PathBuf> {
        match self.mode {
            RuntimeMode::Packaged => vec![
                self.resources_dir.join(UNPACKED_DIR).join(exe_name),
                self.resources_dir.join(exe_name),
            ],
            RuntimeMode::Production => vec![self.resources_dir.join(exe_name)],
            RuntimeMode::Development => vec![self.tools_dir.join(exe_name)],
        }
    }
}

impl LocateExecutable for ExecutableLocator {
    fn locate(&self, tool: ToolId, exe_name: &str) -> Result<PathBuf> {
        let candidates = self.candidates(exe_name);

        for candidate in &candidates {
            let exists = candidate.is_file();
            tracing::debug!(
                tool = %tool,
                path = %candidate.display(),
                exists,
                "checking executable candidate"
            );
            if exists {
                return Ok(absolutize(candidate));
            }
        }

        Err(CmtoolsError::ExecutableNotFound {
            exe_name: exe_name.to_string(),
            candidates,
        })
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
