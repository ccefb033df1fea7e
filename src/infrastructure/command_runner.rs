//! 子进程执行器 - 基础设施层
//!
//! 持有目标项目根目录，只暴露「执行外部命令」的能力

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{error, info};

/// 捕获模式的执行结果
#[derive(Debug)]
pub struct ExecOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// 子进程执行器
///
/// 职责：
/// - 持有目标项目根目录
/// - 暴露捕获 / 流式两种执行能力
/// - 不认识 CandidateFile / RunProfile
/// - 不处理业务流程
pub struct CommandRunner {
    project_root: PathBuf,
}

impl CommandRunner {
    /// 创建新的执行器
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// 项目根目录
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// 项目内安装的 tsc 可执行文件路径
    pub fn tsc_path(&self) -> PathBuf {
        self.project_root.join("node_modules/.bin/tsc")
    }

    /// 以项目根为工作目录执行命令并捕获输出
    pub async fn run_capture(
        &self,
        program: impl AsRef<OsStr>,
        args: &[&str],
    ) -> Result<ExecOutput> {
        let program = program.as_ref();

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.project_root)
            .output()
            .await
            .with_context(|| {
                format!(
                    "无法启动命令: {} {}",
                    program.to_string_lossy(),
                    args.join(" ")
                )
            })?;

        Ok(ExecOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// 以项目根为工作目录执行命令，子进程输出逐行转发到日志
    pub async fn run_streaming(
        &self,
        program: impl AsRef<OsStr>,
        args: &[&str],
    ) -> Result<ExitStatus> {
        let program = program.as_ref();

        let mut child = Command::new(program)
            .args(args)
            .current_dir(&self.project_root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!(
                    "无法启动命令: {} {}",
                    program.to_string_lossy(),
                    args.join(" ")
                )
            })?;

        let stdout = child.stdout.take().context("无法获取子进程 stdout")?;
        let stderr = child.stderr.take().context("无法获取子进程 stderr")?;

        let stdout_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                info!("stdout: {}", line);
            }
        });
        let stderr_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                error!("stderr: {}", line);
            }
        });

        let status = child.wait().await.context("等待子进程退出失败")?;
        let _ = stdout_task.await;
        let _ = stderr_task.await;

        Ok(status)
    }
}
