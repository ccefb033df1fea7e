//! 依赖清单加载器

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::manifest::PackageManifest;

/// 加载目标项目的 package.json
pub async fn load_package_manifest(project_root: &Path) -> Result<PackageManifest> {
    let manifest_path = project_root.join("package.json");

    let content = fs::read_to_string(&manifest_path)
        .await
        .with_context(|| format!("无法读取依赖清单: {}", manifest_path.display()))?;

    let manifest: PackageManifest = serde_json::from_str(&content)
        .with_context(|| format!("无法解析依赖清单: {}", manifest_path.display()))?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_package_manifest() {
        let dir = std::env::temp_dir().join(format!(
            "convert_js_to_ts_manifest_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("package.json"),
            r#"{ "name": "demo", "dependencies": { "lodash": "^4" } }"#,
        )
        .unwrap();

        let manifest = tokio_test::block_on(load_package_manifest(&dir)).unwrap();
        assert!(manifest.dependencies.contains_key("lodash"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
