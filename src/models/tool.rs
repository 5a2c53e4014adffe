//! # 外部工具模型
//!
//! 三个随应用分发的外部分析程序，以及它们各自接受的命令行参数。
//!
//! ## 依赖关系
//! - 被 `models/job.rs`, `exec/locator.rs`, `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 外部工具标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolId {
    AneuFiler,
    Aneu23,
    ShCarrier,
}

impl ToolId {
    /// 所有可选工具
    pub const ALL: [ToolId; 3] = [ToolId::AneuFiler, ToolId::Aneu23, ToolId::ShCarrier];

    /// 显示名称
    pub fn display_name(self) -> &'static str {
        match self {
            ToolId::AneuFiler => "AneuFiler",
            ToolId::Aneu23 => "Aneu23",
            ToolId::ShCarrier => "SHCarrier",
        }
    }

    /// 默认可执行文件名（带平台后缀）
    pub fn default_exe_name(self) -> String {
        format!("{}{}", self.display_name(), std::env::consts::EXE_SUFFIX)
    }

    /// 是否接受 `-STD <name>`
    pub fn accepts_std(self) -> bool {
        !matches!(self, ToolId::AneuFiler)
    }

    /// 是否接受 `-GBK`
    pub fn accepts_gbk(self) -> bool {
        matches!(self, ToolId::ShCarrier)
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
