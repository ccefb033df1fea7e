//! 运行参数 profile 加载器

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::profile::RunProfile;

/// 从 TOML 文件加载运行参数 profile
pub async fn load_run_profile(profile_path: &Path) -> Result<RunProfile> {
    let content = fs::read_to_string(profile_path)
        .await
        .with_context(|| format!("无法读取 profile 文件: {}", profile_path.display()))?;

    let profile: RunProfile = toml::from_str(&content)
        .with_context(|| format!("无法解析 profile 文件: {}", profile_path.display()))?;

    profile.validate()?;

    Ok(profile)
}
