//! 编译器驱动 - 业务能力层
//!
//! 驱动项目本地安装的 tsc：一次配置自省，一次声明文件生成。
//! 编译器的 JSON 输出与退出码是这里唯一依赖的接口面。

use anyhow::Result;
use serde::Deserialize;
use tracing::info;

use crate::error::CompilerError;
use crate::infrastructure::CommandRunner;

/// tsc --showConfig 输出中关心的部分
#[derive(Debug, Deserialize)]
pub struct ResolvedProjectConfig {
    /// 参与编译的文件（相对项目根目录）
    #[serde(default)]
    pub files: Vec<String>,
}

/// 以配置自省模式运行 tsc，取得完整的文件列表
///
/// include / exclude / allowJS 已通过生成的 tsconfig.json 生效。
pub async fn show_config(runner: &CommandRunner) -> Result<ResolvedProjectConfig> {
    info!("🔍 正在读取编译器解析出的文件列表...");

    let output = runner
        .run_capture(
            runner.tsc_path(),
            &["--allowJS", "--checkJS", "false", "--showConfig"],
        )
        .await?;

    if !output.success {
        return Err(CompilerError::ShowConfigFailed {
            stderr: output.stderr,
        }
        .into());
    }

    let resolved: ResolvedProjectConfig = serde_json::from_str(&output.stdout)
        .map_err(|source| CompilerError::ShowConfigParseFailed { source })?;

    info!("✓ 编译器共解析出 {} 个文件", resolved.files.len());

    Ok(resolved)
}

/// 以仅生成声明文件的模式运行 tsc
///
/// 每个参与编译的源文件会得到一个 .d.ts 工件。
/// 编译器对全部文件一次性批处理，非零退出对整次运行是致命的。
pub async fn emit_declarations(runner: &CommandRunner) -> Result<()> {
    info!("📄 正在生成声明文件...");

    let status = runner
        .run_streaming(
            runner.tsc_path(),
            &[
                "--allowJS",
                "--checkJS",
                "false",
                "--noEmit",
                "false",
                "--declaration",
                "--emitDeclarationOnly",
                "--skipLibCheck",
            ],
        )
        .await?;

    if !status.success() {
        return Err(CompilerError::EmissionFailed {
            code: status.code(),
        }
        .into());
    }

    info!("✓ 声明文件生成完成");

    Ok(())
}
