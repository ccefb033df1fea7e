//! 流程层（Workflow Layer）
//!
//! 定义「一个文件」的完整处理流程：
//! - `FileCtx` - 上下文封装（路径 + 批次位置）
//! - `AnnotateFlow` - Schema 注释流程（识别 → 补全 → 覆盖）
//! - `ConvertFlow` - 合并转换流程（读取 → 补全 → 写入/删除）

pub mod annotate_flow;
pub mod convert_flow;
pub mod file_ctx;

pub use annotate_flow::{AnnotateFlow, AnnotateOutcome};
pub use convert_flow::ConvertFlow;
pub use file_ctx::FileCtx;
