//! 测试用的假外部工具（POSIX shell 脚本）。
//!
//! 所有脚本在第一次使用时一次性写入同一个临时目录。
//! 任何会启动子进程的测试都要先经过这里，
//! 避免脚本写入期间其他线程 fork 导致 ETXTBSY。

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 假工具种类
#[derive(Debug, Clone, Copy)]
pub enum FakeTool {
    /// 打印一行并生成两个输出文件
    Ok,
    /// 成功退出但不生成任何文件
    Silent,
    /// 写 stderr 后以 3 退出
    Fail,
    /// 文件名含 `bad` 时失败，否则同 `Ok`
    Picky,
    /// 先睡眠再成功，用于观察并发
    Slow,
}

const PARSE_INPUT: &str = r#"#!/bin/sh
input=""
while [ $# -gt 0 ]; do
  case "$1" in
    -i) input="$2"; shift 2 ;;
    *) shift ;;
  esac
done
base="${input%.*}"
"#;

const WRITE_OUTPUTS: &str = r#"echo "processed $input"
: > "$base-summary.tsv"
: > "$base-cal.tsv"
"#;

struct Fixtures {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

fn fixtures() -> &'static Fixtures {
    static FIXTURES: OnceLock<Fixtures> = OnceLock::new();
    FIXTURES.get_or_init(|| {
        let dir = tempfile::tempdir().expect("create fixture dir");
        let root = dir.path().to_path_buf();

        write_script(&root, "ok", WRITE_OUTPUTS);
        write_script(&root, "silent", "exit 0\n");
        write_script(&root, "fail", "echo \"boom: $input\" >&2\nexit 3\n");
        write_script(
            &root,
            "picky",
            &format!(
                "case \"$(basename \"$input\")\" in\n  *bad*) echo \"rejected $input\" >&2; exit 2 ;;\nesac\n{}",
                WRITE_OUTPUTS
            ),
        );
        write_script(&root, "slow", &format!("sleep 0.2\n{}", WRITE_OUTPUTS));

        Fixtures { _dir: dir, root }
    })
}

fn write_script(root: &Path, name: &str, body: &str) {
    let path = root.join(name);
    fs::write(&path, format!("{}{}", PARSE_INPUT, body)).expect("write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
}

/// 确保脚本已写好
pub fn ready() {
    fixtures();
}

/// 返回假工具路径
pub fn fake_tool(kind: FakeTool) -> PathBuf {
    let name = match kind {
        FakeTool::Ok => "ok",
        FakeTool::Silent => "silent",
        FakeTool::Fail => "fail",
        FakeTool::Picky => "picky",
        FakeTool::Slow => "slow",
    };
    fixtures().root.join(name)
}

/// 在目录中创建若干输入文件
pub fn make_inputs(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::write(&path, "sample\tvalue\n").expect("write input");
            path
        })
        .collect()
}
