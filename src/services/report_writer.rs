//! 失败报告写入 - 业务能力层
//!
//! 只负责「写失败报告」能力，不关心流程

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{FailureRecord, FailureReport};

/// 失败报告写入服务
///
/// 职责：
/// - 将转换失败记录序列化为 JSON 报告
/// - 每次运行覆盖旧报告
/// - 不关心流程顺序
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 创建新的报告写入服务
    pub fn new() -> Self {
        Self {
            report_file_path: "errors.log".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    /// 写入失败报告
    ///
    /// 记录按遇到的顺序写入；只应在存在失败时调用。
    pub async fn write(&self, failures: &[FailureRecord]) -> Result<()> {
        let report = FailureReport::new(failures.to_vec());
        let rendered = serde_json::to_string_pretty(&report)?;

        tokio::fs::write(&self.report_file_path, rendered)
            .await
            .with_context(|| format!("无法写入失败报告: {}", self.report_file_path))?;

        info!("📄 失败报告已写入: {}", self.report_file_path);

        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
