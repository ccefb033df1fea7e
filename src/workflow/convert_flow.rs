//! 文件合并转换流程 - 流程层
//!
//! 核心职责：定义「一个文件」的完整转换流程
//!
//! 流程顺序：
//! 1. 读取源文件与配对的声明文件
//! 2. 请求补全（合并为单个 TypeScript 文件）
//! 3. 清理结果 → 写入 .ts → 删除 .js 与 .d.ts
//!
//! 转换是原子的工作单元：补全成功后才发生三次文件系统变更
//! （写入、删除、删除）；补全失败时该文件不发生任何变更。

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::models::{declaration_path, typed_output_path};
use crate::services::{sanitize_completion, LlmService};
use crate::workflow::file_ctx::FileCtx;

const SYSTEM_MESSAGE: &str = "You are a code refactoring assistant.";

/// 文件转换流程
///
/// - 编排单个文件的合并转换
/// - 不持有任何资源
/// - 只依赖业务能力（services）
pub struct ConvertFlow {
    llm_service: LlmService,
}

impl ConvertFlow {
    /// 创建新的转换流程
    pub fn new(config: &Config) -> Self {
        Self {
            llm_service: LlmService::new(config),
        }
    }

    pub async fn run(&self, project_root: &Path, ctx: &FileCtx) -> Result<()> {
        let js_path = project_root.join(&ctx.rel_path);

        // 路径变换在边界处先行校验
        let dts_path = declaration_path(&js_path)?;
        let ts_path = typed_output_path(&js_path)?;

        let js_content = fs::read_to_string(&js_path)
            .await
            .with_context(|| format!("无法读取源文件: {}", js_path.display()))?;
        let dts_content = fs::read_to_string(&dts_path)
            .await
            .with_context(|| format!("无法读取声明文件: {}", dts_path.display()))?;

        info!("{} 🤖 正在转换...", ctx);

        let prompt = build_merge_prompt(&js_content, &dts_content);
        let completion = self
            .llm_service
            .send_to_llm(&prompt, Some(SYSTEM_MESSAGE))
            .await?;

        let ts_content = sanitize_completion(&completion);

        fs::write(&ts_path, ts_content)
            .await
            .with_context(|| format!("无法写入转换结果: {}", ts_path.display()))?;
        fs::remove_file(&js_path)
            .await
            .with_context(|| format!("无法删除源文件: {}", js_path.display()))?;
        fs::remove_file(&dts_path)
            .await
            .with_context(|| format!("无法删除声明文件: {}", dts_path.display()))?;

        info!("{} ✓ 转换完成", ctx);

        Ok(())
    }
}

/// 构建合并提示词
fn build_merge_prompt(js_content: &str, dts_content: &str) -> String {
    format!(
        "I have the following Javascript code:\n\n---\n{}\n---\n\nI also have the type declarations for this code:\n---\n{}\n---\n\nMerge the two of them into a Typescript file.\n\nConvert namespaces into object literals, but do not convert classes into object literals.\n\nRespond ONLY with the TypeScript code, and nothing else. Start with the code immediatly. Don't even put delimiters.",
        js_content, dts_content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prompt_contains_both_inputs() {
        let prompt = build_merge_prompt("const a = 1;", "declare const a: number;");

        assert!(prompt.contains("const a = 1;"));
        assert!(prompt.contains("declare const a: number;"));
    }

    #[test]
    fn test_merge_prompt_keeps_class_rule() {
        let prompt = build_merge_prompt("", "");
        assert!(prompt.contains("do not convert classes into object literals"));
    }
}
