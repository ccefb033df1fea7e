//! # Convert JS to TS
//!
//! 将 JavaScript 项目批量迁移到 TypeScript 的自动化工具：
//! 驱动 TypeScript 编译器生成声明文件，再由 LLM 将源文件与声明
//! 合并为带类型的单个文件，逐文件隔离失败并收集报告。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（项目根目录），只暴露能力
//! - `CommandRunner` - 唯一的子进程入口，提供捕获 / 流式执行能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个对象
//! - `LlmService` - 补全服务调用能力（temperature 0）
//! - `compiler_service` - tsc 配置自省 / 声明生成能力
//! - `TypeInstaller` - 单个依赖的类型声明获取能力
//! - `ReportWriter` - 写失败报告能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文件"的完整处理流程
//! - `FileCtx` - 上下文封装（路径 + 批次位置）
//! - `AnnotateFlow` - Schema 注释流程
//! - `ConvertFlow` - 合并转换流程（写入 → 删除 → 删除，或零变更失败）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 流水线阶段顺序与全局统计
//! - `orchestrator/project_setup` - 项目引导与类型声明获取
//! - `orchestrator/worker_pool` - 有界并发工作池（默认 4）

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{AnnotateMode, Config};
pub use error::{classify_npm_failure, NpmFailureKind};
pub use infrastructure::CommandRunner;
pub use models::{CandidateFile, FailureRecord, FailureReport, RunProfile, SourceKind};
pub use orchestrator::App;
pub use services::{sanitize_completion, LlmService};
pub use workflow::{AnnotateFlow, ConvertFlow, FileCtx};
