//! 依赖清单模型

use std::collections::BTreeMap;

use serde::Deserialize;

/// package.json 中与类型声明获取相关的部分
///
/// 其余字段被忽略。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// 运行时依赖与开发依赖的合并视图
    ///
    /// 同名时以 dependencies 为准。
    pub fn runtime_dependencies(&self) -> BTreeMap<String, String> {
        let mut merged = self.dev_dependencies.clone();
        merged.extend(self.dependencies.clone());
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{
                "name": "demo",
                "version": "1.0.0",
                "dependencies": { "lodash": "^4.17.0", "mongoose": "^6.0.0" },
                "devDependencies": { "jest": "^29.0.0" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.dev_dependencies.len(), 1);
    }

    #[test]
    fn test_runtime_dependencies_prefers_dependencies() {
        let manifest: PackageManifest = serde_json::from_str(
            r#"{
                "dependencies": { "lodash": "^4.17.0" },
                "devDependencies": { "lodash": "^3.0.0", "jest": "^29.0.0" }
            }"#,
        )
        .unwrap();

        let merged = manifest.runtime_dependencies();
        assert_eq!(merged.get("lodash"), Some(&"^4.17.0".to_string()));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let manifest: PackageManifest = serde_json::from_str(r#"{ "name": "demo" }"#).unwrap();
        assert!(manifest.runtime_dependencies().is_empty());
    }
}
