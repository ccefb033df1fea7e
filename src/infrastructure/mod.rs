//! 基础设施层（Infrastructure Layer）
//!
//! 持有稀缺资源，只暴露能力，不认识业务模型。

pub mod command_runner;

pub use command_runner::{CommandRunner, ExecOutput};
