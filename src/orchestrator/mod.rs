//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责阶段顺序与批量调度，是整个系统的「指挥中心」。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量转换处理器
//! - 管理应用生命周期（初始化、运行）
//! - 阶段顺序（引导 → 类型声明 → 编译器 → 注释 → 合并 → 报告）
//! - 汇总全局统计信息
//!
//! ### `project_setup` - 项目初始化
//! - 安装依赖、写入编译器配置
//! - 类型声明获取（逐依赖）
//!
//! ### `worker_pool` - 有界并发工作池
//! - 注释与合并两个阶段统一的并发抽象（默认上限 4）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<CandidateFile>)
//!     ↓
//! workflow (处理单个文件)
//!     ↓
//! services (能力层：compiler / llm / installer / report)
//!     ↓
//! infrastructure (基础设施：CommandRunner)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，workflow 管单个文件
//! 2. **资源隔离**：只有编排层持有 CommandRunner
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做具体转换判断

pub mod batch_processor;
pub mod project_setup;
pub mod worker_pool;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use worker_pool::run_bounded;
