//! 业务能力层（Services Layer）
//!
//! 描述「我能做什么」，每个服务只处理单个对象，不关心流程顺序。

pub mod compiler_service;
pub mod llm_service;
pub mod report_writer;
pub mod type_installer;

pub use compiler_service::ResolvedProjectConfig;
pub use llm_service::{sanitize_completion, LlmService};
pub use report_writer::ReportWriter;
pub use type_installer::{InstallOutcome, TypeInstaller};
