//! 类型声明安装 - 业务能力层
//!
//! 只负责「为单个依赖取得类型声明」能力，不关心流程

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::error::{classify_npm_failure, InstallError, NpmFailureKind};
use crate::infrastructure::CommandRunner;

/// 单个依赖的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// 依赖本身就是 @types 包
    AlreadyTypesPackage,
    /// 依赖自带声明文件
    HasBundledTypes,
    /// 在避免列表中
    Avoided,
    /// 成功安装了社区类型包
    Installed,
    /// 注册表中没有对应的类型包（容忍）
    MissingTypesPackage,
}

/// 类型声明安装服务
///
/// 职责：
/// - 判断单个依赖是否需要安装社区类型包
/// - 执行安装并对失败分类
/// - 只处理单个依赖
/// - 不出现 PackageManifest
/// - 不关心流程顺序
pub struct TypeInstaller {
    type_packages_to_avoid: Vec<String>,
}

impl TypeInstaller {
    /// 创建新的安装服务
    pub fn new(type_packages_to_avoid: Vec<String>) -> Self {
        Self {
            type_packages_to_avoid,
        }
    }

    /// 推导社区类型包名
    ///
    /// 去掉 scope 的 @，斜杠替换为双下划线：`@scope/pkg` → `@types/scope__pkg`。
    pub fn types_package_name(dependency: &str) -> String {
        format!(
            "@types/{}",
            dependency.replace('@', "").replace('/', "__")
        )
    }

    /// 为 Node 运行时安装 @types/node
    pub async fn install_node_types(&self, runner: &CommandRunner) -> Result<()> {
        info!("📦 正在安装 @types/node");

        let output = runner.run_capture("npm", &["install", "@types/node"]).await?;
        if !output.success {
            return Err(InstallError::CommandFailed {
                package: "@types/node".to_string(),
                stderr: output.stderr,
            }
            .into());
        }

        Ok(())
    }

    /// 确保单个依赖有类型声明可用
    pub async fn ensure_types_for(
        &self,
        runner: &CommandRunner,
        dependency: &str,
    ) -> Result<InstallOutcome> {
        if dependency.starts_with("@types/") {
            info!("{} 本身就是 @types 包", dependency);
            return Ok(InstallOutcome::AlreadyTypesPackage);
        }

        let installed_dir = runner.project_root().join("node_modules").join(dependency);
        if has_declaration_files(&installed_dir) {
            info!("{} 已自带声明文件", dependency);
            return Ok(InstallOutcome::HasBundledTypes);
        }

        let types_package = Self::types_package_name(dependency);

        if self.type_packages_to_avoid.iter().any(|p| p == &types_package) {
            info!("{} 在避免列表中", types_package);
            return Ok(InstallOutcome::Avoided);
        }

        info!("📦 正在安装 {}", types_package);
        let output = runner.run_capture("npm", &["install", &types_package]).await?;

        if output.success {
            return Ok(InstallOutcome::Installed);
        }

        match classify_npm_failure(&output.stderr) {
            NpmFailureKind::RegistryNotFound => {
                info!("{} 没有可用的 {}", dependency, types_package);
                Ok(InstallOutcome::MissingTypesPackage)
            }
            NpmFailureKind::Other => Err(InstallError::CommandFailed {
                package: types_package,
                stderr: output.stderr,
            }
            .into()),
        }
    }
}

/// 判断已安装的包目录中是否存在声明文件
///
/// 递归扫描，跳过内嵌的 node_modules。
fn has_declaration_files(dir: &Path) -> bool {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if entry.file_name() == "node_modules" {
                continue;
            }
            if has_declaration_files(&path) {
                return true;
            }
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".d.ts"))
            .unwrap_or(false)
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_project(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "convert_js_to_ts_{}_{}",
            tag,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_types_package_name() {
        assert_eq!(TypeInstaller::types_package_name("lodash"), "@types/lodash");
        assert_eq!(
            TypeInstaller::types_package_name("@scope/pkg"),
            "@types/scope__pkg"
        );
    }

    #[test]
    fn test_has_declaration_files_nested() {
        let dir = temp_project("dts");
        fs::create_dir_all(dir.join("lib")).unwrap();
        fs::write(dir.join("lib/index.d.ts"), "export {};").unwrap();

        assert!(has_declaration_files(&dir));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_has_declaration_files_ignores_nested_node_modules() {
        let dir = temp_project("dts_nested");
        fs::create_dir_all(dir.join("node_modules/inner")).unwrap();
        fs::write(dir.join("node_modules/inner/index.d.ts"), "export {};").unwrap();
        fs::write(dir.join("index.js"), "module.exports = {};").unwrap();

        assert!(!has_declaration_files(&dir));

        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_skips_types_package_without_install() {
        let dir = temp_project("skip_types");
        let runner = CommandRunner::new(&dir);
        let installer = TypeInstaller::new(vec![]);

        let outcome = installer.ensure_types_for(&runner, "@types/qs").await.unwrap();
        assert_eq!(outcome, InstallOutcome::AlreadyTypesPackage);

        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_skips_dependency_with_bundled_types() {
        let dir = temp_project("bundled");
        fs::create_dir_all(dir.join("node_modules/lodash")).unwrap();
        fs::write(dir.join("node_modules/lodash/index.d.ts"), "export {};").unwrap();

        let runner = CommandRunner::new(&dir);
        let installer = TypeInstaller::new(vec![]);

        let outcome = installer.ensure_types_for(&runner, "lodash").await.unwrap();
        assert_eq!(outcome, InstallOutcome::HasBundledTypes);

        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_skips_avoided_package() {
        let dir = temp_project("avoided");
        let runner = CommandRunner::new(&dir);
        let installer = TypeInstaller::new(vec!["@types/yup".to_string()]);

        let outcome = installer.ensure_types_for(&runner, "yup").await.unwrap();
        assert_eq!(outcome, InstallOutcome::Avoided);

        fs::remove_dir_all(&dir).ok();
    }
}
