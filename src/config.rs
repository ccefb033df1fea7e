//! 程序配置
//!
//! 外部服务凭证在进程启动时读取一次，构造失败立即退出；
//! 其余配置项均有默认值，可通过环境变量覆盖。
//! 每次运行的目标项目参数在 profile 文件中（见 `models::RunProfile`）。

use crate::error::ConfigError;

/// Schema 注释提示词模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateMode {
    /// 仅指令
    Bare,
    /// 指令 + 一个完整的转换示例
    OneShot,
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 运行参数 profile 文件路径
    pub profile_path: String,
    /// 同时在途的外部请求上限
    pub max_concurrent_files: usize,
    /// 转换失败报告文件
    pub errors_log_file: String,
    /// Schema 注释提示词模式
    pub annotate_mode: AnnotateMode,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: Option<String>,
    pub llm_model_name: String,
}

impl Config {
    /// 从环境变量构造配置
    ///
    /// `OPENAI_API_KEY` 缺失时立即失败；其余项使用默认值。
    pub fn from_env() -> Result<Self, ConfigError> {
        let llm_api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| ConfigError::EnvVarNotFound {
                var_name: "OPENAI_API_KEY".to_string(),
            })?;

        let max_concurrent_files = match std::env::var("MAX_CONCURRENT_FILES") {
            Ok(value) => value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "MAX_CONCURRENT_FILES".to_string(),
                value: value.clone(),
                expected_type: "usize",
            })?,
            Err(_) => 4,
        };

        let annotate_mode = match std::env::var("ANNOTATE_MODE") {
            Ok(value) => match value.as_str() {
                "bare" => AnnotateMode::Bare,
                "one-shot" | "one_shot" => AnnotateMode::OneShot,
                _ => {
                    return Err(ConfigError::EnvVarParseFailed {
                        var_name: "ANNOTATE_MODE".to_string(),
                        value,
                        expected_type: "bare | one-shot",
                    })
                }
            },
            Err(_) => AnnotateMode::Bare,
        };

        Ok(Self {
            profile_path: std::env::var("PROFILE_PATH")
                .unwrap_or_else(|_| "profile.toml".to_string()),
            max_concurrent_files,
            errors_log_file: std::env::var("ERRORS_LOG_FILE")
                .unwrap_or_else(|_| "errors.log".to_string()),
            annotate_mode,
            llm_api_key,
            llm_api_base_url: std::env::var("OPENAI_API_BASE").ok(),
            llm_model_name: std::env::var("LLM_MODEL_NAME")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
        })
    }
}
