//! LLM 服务 - 业务能力层
//!
//! 只负责「调用补全服务」能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;

/// LLM 服务
///
/// 职责：
/// - 以固定模型、temperature 0 发送聊天补全请求
/// - 只处理单次请求
/// - 不出现 Vec<CandidateFile>
/// - 不关心流程顺序
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(&config.llm_api_key);
        if let Some(api_base) = &config.llm_api_base_url {
            openai_config = openai_config.with_api_base(api_base);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 发送聊天补全请求
    ///
    /// 确定性采样（temperature 0），返回第一个 choice 的内容；
    /// 内容缺失或为空视为契约违反。
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.0)
            .build()?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            anyhow::anyhow!("LLM API 调用失败: {}", e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyResponse {
                model: self.model_name.clone(),
            })?;

        if content.trim().is_empty() {
            return Err(LlmError::EmptyContent {
                model: self.model_name.clone(),
            }
            .into());
        }

        Ok(content)
    }
}

/// 清理补全结果
///
/// 删除以分隔符 `---` 或代码围栏 ``` 开头的行。幂等。
pub fn sanitize_completion(completion: &str) -> String {
    completion
        .lines()
        .filter(|line| !(line.starts_with("---") || line.starts_with("```")))
        .collect::<Vec<_>>()
        .join("\n")
}
