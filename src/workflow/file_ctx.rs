//! 文件处理上下文
//!
//! 封装「我正在处理批次中的第几个文件」这一信息

use std::fmt::Display;

/// 文件处理上下文
#[derive(Debug, Clone)]
pub struct FileCtx {
    /// 相对项目根目录的路径
    pub rel_path: String,
    /// 文件在批次中的序号（从1开始，仅用于日志显示）
    pub file_index: usize,
    /// 批次总文件数
    pub total_files: usize,
}

impl FileCtx {
    /// 创建新的文件上下文
    pub fn new(rel_path: String, file_index: usize, total_files: usize) -> Self {
        Self {
            rel_path,
            file_index,
            total_files,
        }
    }
}

impl Display for FileCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文件 {}/{}] {}",
            self.file_index, self.total_files, self.rel_path
        )
    }
}
