//! 运行参数 profile
//!
//! 每次调用的运行参数：目标项目、避免安装的类型包、
//! 目录白名单、写入 tsconfig.json 的编译器配置。

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// 一次运行的参数集
#[derive(Debug, Clone, Deserialize)]
pub struct RunProfile {
    /// 目标项目绝对路径
    pub project_absolute_path: PathBuf,
    /// 项目是否运行于 Node（为真时先安装 @types/node）
    pub is_node: bool,
    /// 不尝试安装的 @types 包（完整包名）
    #[serde(default)]
    pub type_packages_to_avoid: Vec<String>,
    /// 只转换这些目录前缀下的文件（缺省转换全部）
    #[serde(default)]
    pub directories_to_convert: Option<Vec<String>>,
    /// 写入 tsconfig.json 的编译器配置（原样透传）
    pub ts_config: serde_json::Value,
}

impl RunProfile {
    /// 校验 profile 的结构性约束
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.project_absolute_path.is_absolute() {
            return Err(ConfigError::InvalidProfile {
                reason: format!(
                    "project_absolute_path 必须是绝对路径: {}",
                    self.project_absolute_path.display()
                ),
            });
        }
        Ok(())
    }
}
