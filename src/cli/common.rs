//! # 子命令共享参数
//!
//! 工具选择、作业选项和可执行文件定位选项。
//!
//! ## 依赖关系
//! - 被 `cli/process.rs`, `cli/run.rs`, `cli/tools.rs` 使用
//! - 转换为 `models/` 与 `exec/locator.rs` 中的类型

use crate::exec::{ExecutableLocator, RuntimeMode};
use crate::models::{JobOptions, ToolId};

use clap::builder::BoolishValueParser;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 工具选择
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ToolChoice {
    /// AneuFiler (no -STD, no -GBK)
    #[value(name = "aneufiler")]
    AneuFiler,
    /// Aneu23 (no -GBK)
    #[value(name = "aneu23")]
    Aneu23,
    /// SHCarrier (all options)
    #[value(name = "shcarrier")]
    ShCarrier,
}

impl From<ToolChoice> for ToolId {
    fn from(choice: ToolChoice) -> Self {
        match choice {
            ToolChoice::AneuFiler => ToolId::AneuFiler,
            ToolChoice::Aneu23 => ToolId::Aneu23,
            ToolChoice::ShCarrier => ToolId::ShCarrier,
        }
    }
}

/// 作业选项
#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    /// Tool to run
    #[arg(short, long, value_enum)]
    pub tool: ToolChoice,

    /// Use peak area data (-Area)
    #[arg(long, default_value_t = false)]
    pub area: bool,

    /// Standard sample name (-STD); ignored by AneuFiler
    #[arg(long = "std", default_value = "STD")]
    pub std_name: String,

    /// Disable GBK console encoding (SHCarrier only)
    #[arg(long, default_value_t = false)]
    pub no_gbk: bool,

    /// Pass -dev to the tool
    #[arg(long, default_value_t = false)]
    pub dev: bool,

    /// Override the executable file name
    #[arg(long)]
    pub exe_name: Option<String>,
}

impl JobArgs {
    pub fn to_options(&self) -> JobOptions {
        let tool = ToolId::from(self.tool);
        let defaults = JobOptions::new(tool);
        JobOptions {
            use_area: self.area,
            std_name: Some(self.std_name.clone()),
            use_gbk: !self.no_gbk,
            dev_mode: self.dev,
            exe_name: self.exe_name.clone().unwrap_or(defaults.exe_name.clone()),
            ..defaults
        }
    }
}

/// 可执行文件定位选项
#[derive(Args, Debug, Clone)]
pub struct LocatorArgs {
    /// Treat the installation as packaged (search the unpacked resources first)
    #[arg(
        long,
        env = "CMTOOLS_PACKAGED",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub packaged: bool,

    /// Runtime environment; "production" searches the resources directory
    #[arg(long = "env", env = "CMTOOLS_ENV")]
    pub runtime_env: Option<String>,

    /// Resources directory [default: <binary dir>/resources]
    #[arg(long, env = "CMTOOLS_RESOURCES_DIR")]
    pub resources_dir: Option<PathBuf>,

    /// Directory holding the tools in development mode [default: current directory]
    #[arg(long, env = "CMTOOLS_TOOLS_DIR")]
    pub tools_dir: Option<PathBuf>,
}

impl LocatorArgs {
    pub fn to_locator(&self) -> ExecutableLocator {
        let mode = RuntimeMode::detect(self.packaged, self.runtime_env.as_deref());

        let resources_dir = self.resources_dir.clone().unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
                .unwrap_or_else(|| PathBuf::from("resources"))
        });

        let tools_dir = self
            .tools_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        ExecutableLocator::new(mode, resources_dir, tools_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_job_args_defaults() {
        let cli = Cli::parse_from(["cmtools", "run", "--tool", "shcarrier", "a.txt"]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        let options = args.job.to_options();
        assert_eq!(options.tool, ToolId::ShCarrier);
        assert!(options.use_gbk);
        assert!(!options.use_area);
        assert!(!options.dev_mode);
        assert_eq!(options.effective_std_name(), None);
        assert_eq!(options.exe_name, ToolId::ShCarrier.default_exe_name());
    }

    #[test]
    fn test_job_args_flags() {
        let cli = Cli::parse_from([
            "cmtools", "run", "-t", "aneu23", "--area", "--std", "NA1", "--no-gbk", "--dev",
            "--exe-name", "custom.bin", "a.txt",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        let options = args.job.to_options();
        assert_eq!(options.tool, ToolId::Aneu23);
        assert!(options.use_area);
        assert!(!options.use_gbk);
        assert!(options.dev_mode);
        assert_eq!(options.effective_std_name(), Some("NA1"));
        assert_eq!(options.exe_name, "custom.bin");
    }

    #[test]
    fn test_locator_args_explicit_dirs() {
        let args = LocatorArgs {
            packaged: true,
            runtime_env: None,
            resources_dir: Some(PathBuf::from("/opt/cm/resources")),
            tools_dir: Some(PathBuf::from("/src/cm")),
        };
        let locator = args.to_locator();
        assert_eq!(locator.mode(), RuntimeMode::Packaged);
        assert_eq!(
            locator.candidates("Aneu23.exe"),
            vec![
                PathBuf::from("/opt/cm/resources/app.unpacked/Aneu23.exe"),
                PathBuf::from("/opt/cm/resources/Aneu23.exe"),
            ]
        );
    }

    #[test]
    fn test_packaged_env_accepts_numeric_switch() {
        std::env::set_var("CMTOOLS_PACKAGED", "1");
        let parsed = Cli::try_parse_from(["cmtools", "tools", "--resources-dir", "/opt/cm"]);
        std::env::set_var("CMTOOLS_PACKAGED", "0");
        let off = Cli::try_parse_from(["cmtools", "tools"]);
        std::env::remove_var("CMTOOLS_PACKAGED");

        let Commands::Tools(args) = parsed.unwrap().command else {
            panic!("expected tools");
        };
        assert!(args.locator.packaged);
        assert_eq!(args.locator.to_locator().mode(), RuntimeMode::Packaged);

        let Commands::Tools(args) = off.unwrap().command else {
            panic!("expected tools");
        };
        assert!(!args.locator.packaged);
    }

    #[test]
    fn test_packaged_flag_without_value() {
        let cli = Cli::try_parse_from(["cmtools", "tools", "--packaged"]).unwrap();
        let Commands::Tools(args) = cli.command else {
            panic!("expected tools");
        };
        assert!(args.locator.packaged);
    }
}
