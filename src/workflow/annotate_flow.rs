//! Schema 注释流程 - 流程层
//!
//! 核心职责：定义「一个文件」的 Schema 注释流程
//!
//! 流程顺序：
//! 1. 读取文件 → 识别动态 Schema 定义
//! 2. 请求补全（JSDoc 类型注释）
//! 3. 清理结果 → 原地覆盖

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use tokio::fs;
use tracing::{debug, info};

use crate::config::{AnnotateMode, Config};
use crate::services::{sanitize_completion, LlmService};
use crate::workflow::file_ctx::FileCtx;

const SYSTEM_MESSAGE: &str = "You are a code assistant that adds Typescript types as JSDocs.";

/// 单个文件的注释结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateOutcome {
    /// 文件中没有可识别的 Schema 定义，跳过
    Skipped,
    /// 已注释并原地覆盖
    Annotated,
}

/// Schema 注释流程
///
/// - 编排单个文件的注释流程
/// - 不持有任何资源
/// - 只依赖业务能力（services）
pub struct AnnotateFlow {
    llm_service: LlmService,
    mode: AnnotateMode,
}

impl AnnotateFlow {
    /// 创建新的注释流程
    pub fn new(config: &Config) -> Self {
        Self {
            llm_service: LlmService::new(config),
            mode: config.annotate_mode,
        }
    }

    pub async fn run(&self, project_root: &Path, ctx: &FileCtx) -> Result<AnnotateOutcome> {
        let file_path = project_root.join(&ctx.rel_path);

        let content = fs::read_to_string(&file_path)
            .await
            .with_context(|| format!("无法读取文件: {}", file_path.display()))?;

        if !has_schema_markers(&content) {
            debug!("{} 无 Schema 定义，跳过", ctx);
            return Ok(AnnotateOutcome::Skipped);
        }

        info!("{} 🤖 正在请求 Schema 类型注释...", ctx);

        let prompt = build_annotate_prompt(&content, self.mode);
        let completion = self
            .llm_service
            .send_to_llm(&prompt, Some(SYSTEM_MESSAGE))
            .await?;

        let annotated = sanitize_completion(&completion);
        fs::write(&file_path, annotated)
            .await
            .with_context(|| format!("无法写回文件: {}", file_path.display()))?;

        info!("{} ✓ 注释完成", ctx);

        Ok(AnnotateOutcome::Annotated)
    }
}

/// 识别动态 Schema 定义
///
/// 文件须提到 mongoose 且包含 Schema 构造调用。
pub fn has_schema_markers(content: &str) -> bool {
    static SCHEMA_RE: OnceLock<Regex> = OnceLock::new();
    let schema_re =
        SCHEMA_RE.get_or_init(|| Regex::new(r"Schema\s*\(").expect("固定的 Schema 匹配模式"));

    content.contains("mongoose") && schema_re.is_match(content)
}

/// 构建注释提示词
fn build_annotate_prompt(file_text: &str, mode: AnnotateMode) -> String {
    let instruction = format!(
        "I have the following Javascript code with a Mongoose Schema and Model:\n\n---\n{}\n---\n\nI want you to add types to the Schema and Model using JSDocs.\n\nStart with the code immediatly. Don't even put delimiters.",
        file_text
    );

    match mode {
        AnnotateMode::Bare => instruction,
        AnnotateMode::OneShot => format!(
            "{}\n\nHere is an example of the transformation:\n\nInput:\n{}\n\nOutput:\n{}",
            instruction, ONE_SHOT_INPUT, ONE_SHOT_OUTPUT
        ),
    }
}

const ONE_SHOT_INPUT: &str = r#"const mongoose = require("mongoose");

const userSchema = new mongoose.Schema({
  name: String,
  age: Number,
});

const User = mongoose.model("User", userSchema);

module.exports = { User };"#;

const ONE_SHOT_OUTPUT: &str = r#"const mongoose = require("mongoose");

/**
 * @typedef {Object} User
 * @property {string} name
 * @property {number} age
 */

/** @type {mongoose.Schema<User>} */
const userSchema = new mongoose.Schema({
  name: String,
  age: Number,
});

/** @type {mongoose.Model<User>} */
const User = mongoose.model("User", userSchema);

module.exports = { User };"#;
