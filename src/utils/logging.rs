//! 日志工具模块
//!
//! 提供启动横幅、阶段分隔与最终统计的辅助函数

use tracing::info;

use crate::config::Config;
use crate::models::RunProfile;
use crate::orchestrator::batch_processor::ProcessingStats;

/// 记录程序启动信息
pub fn log_startup(config: &Config, profile: &RunProfile) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - JavaScript → TypeScript 批量转换");
    info!(
        "开始时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 目标项目: {}", profile.project_absolute_path.display());
    info!("📊 最大并发数: {}", config.max_concurrent_files);
    info!("🤖 模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

/// 记录阶段开始信息
pub fn log_stage(title: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📦 {}", title);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn log_final_stats(stats: &ProcessingStats, total_failures: usize, errors_log_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 转换成功: {}/{}", stats.converted, stats.total);
    info!("📝 Schema 注释: {}", stats.annotated);
    info!("❌ 失败: {}", stats.failed);
    if total_failures > 0 {
        info!("📄 失败详情见: {}", errors_log_file);
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
