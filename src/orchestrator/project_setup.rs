//! 项目初始化与类型声明获取 - 编排层
//!
//! 引导目标项目（安装依赖、写入编译器配置），
//! 再为清单中的每个运行时依赖取得类型声明。

use anyhow::{bail, Context, Result};
use tokio::fs;
use tracing::info;

use crate::infrastructure::CommandRunner;
use crate::models::{load_package_manifest, RunProfile};
use crate::services::{InstallOutcome, TypeInstaller};

/// 引导目标项目
///
/// 安装依赖、写入生成的 tsconfig.json、确保 typescript 安装为本地依赖。
/// 任一步失败对整次运行是致命的。
pub async fn setup_project(runner: &CommandRunner, profile: &RunProfile) -> Result<()> {
    info!("📦 正在安装项目依赖...");
    let output = runner.run_capture("npm", &["install"]).await?;
    if !output.success {
        bail!("npm install 失败: {}", output.stderr);
    }

    let tsconfig_path = runner.project_root().join("tsconfig.json");
    let rendered = serde_json::to_string_pretty(&profile.ts_config)?;
    fs::write(&tsconfig_path, rendered)
        .await
        .with_context(|| format!("无法写入编译器配置: {}", tsconfig_path.display()))?;
    info!("✓ 已写入 {}", tsconfig_path.display());

    info!("📦 正在安装 typescript...");
    let output = runner.run_capture("npm", &["install", "typescript"]).await?;
    if !output.success {
        bail!("npm install typescript 失败: {}", output.stderr);
    }

    Ok(())
}

/// 为清单中的每个运行时依赖取得类型声明
///
/// 逐个处理；注册表缺失的类型包被容忍并记录，其余安装错误向上传播。
pub async fn install_type_declarations(
    runner: &CommandRunner,
    profile: &RunProfile,
) -> Result<()> {
    info!("\n📦 正在获取第三方类型声明...");

    let manifest = load_package_manifest(runner.project_root()).await?;
    let installer = TypeInstaller::new(profile.type_packages_to_avoid.clone());

    if profile.is_node {
        installer.install_node_types(runner).await?;
    }

    let mut installed = 0usize;
    let mut skipped = 0usize;
    let mut missing = 0usize;

    for dependency in manifest.runtime_dependencies().keys() {
        match installer.ensure_types_for(runner, dependency).await? {
            InstallOutcome::Installed => installed += 1,
            InstallOutcome::MissingTypesPackage => missing += 1,
            InstallOutcome::AlreadyTypesPackage
            | InstallOutcome::HasBundledTypes
            | InstallOutcome::Avoided => skipped += 1,
        }
    }

    info!(
        "✓ 类型声明获取完成: 安装 {} | 跳过 {} | 注册表缺失 {}",
        installed, skipped, missing
    );

    Ok(())
}
