//! 应用程序错误类型
//!
//! 按领域划分的结构化错误：编译器、依赖安装、LLM、路径变换、配置。
//! 容忍/致命的分支依赖 `NpmFailureKind` 分类器做模式匹配，
//! 而不是在调用处对输出流做字符串搜索。

use thiserror::Error;

/// 编译器相关错误
#[derive(Debug, Error)]
pub enum CompilerError {
    /// tsc 配置自省失败
    #[error("tsc --showConfig 执行失败: {stderr}")]
    ShowConfigFailed { stderr: String },
    /// 无法解析 tsc 配置自省的 JSON 输出
    #[error("无法解析 tsc --showConfig 输出: {source}")]
    ShowConfigParseFailed {
        #[source]
        source: serde_json::Error,
    },
    /// 声明文件生成失败（tsc 非零退出，对整次运行致命）
    #[error("声明文件生成失败, tsc 退出码: {code:?}")]
    EmissionFailed { code: Option<i32> },
}

/// 依赖安装错误（npm）
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("依赖安装失败 ({package}): {stderr}")]
    CommandFailed { package: String, stderr: String },
}

/// npm 安装失败的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpmFailureKind {
    /// 注册表中不存在该包（容忍）
    RegistryNotFound,
    /// 其他错误（致命）
    Other,
}

/// 根据 npm 捕获的标准错误流对失败进行分类
pub fn classify_npm_failure(stderr: &str) -> NpmFailureKind {
    if stderr.contains("npm ERR! code E404") {
        NpmFailureKind::RegistryNotFound
    } else {
        NpmFailureKind::Other
    }
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 响应中没有任何 choice
    #[error("LLM 返回结果为空 (模型: {model})")]
    EmptyResponse { model: String },
    /// 第一个 choice 的内容缺失或为空，违反契约
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 路径变换错误
#[derive(Debug, Error)]
pub enum PathError {
    #[error("路径缺少预期的扩展名 {expected}: {path}")]
    UnexpectedExtension { expected: &'static str, path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
    /// 环境变量的值无法解析
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
    /// profile 文件的结构性约束不满足
    #[error("profile 校验失败: {reason}")]
    InvalidProfile { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_npm_failure_e404() {
        let stderr = "npm ERR! code E404\nnpm ERR! 404 Not Found - GET https://registry.npmjs.org/@types%2ffoo";
        assert_eq!(
            classify_npm_failure(stderr),
            NpmFailureKind::RegistryNotFound
        );
    }

    #[test]
    fn test_classify_npm_failure_other() {
        assert_eq!(
            classify_npm_failure("npm ERR! code EACCES"),
            NpmFailureKind::Other
        );
        assert_eq!(classify_npm_failure(""), NpmFailureKind::Other);
    }
}
