//! 转换失败记录

use serde::Serialize;

/// 单个文件的失败记录
///
/// 追加后不可变；`error` 保留完整的错误链文本。
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub error: String,
}

impl FailureRecord {
    pub fn new(file_path: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.into(),
            error: format!("{:#}", error),
        }
    }
}

/// 写入报告文件的完整结构
#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub files: Vec<String>,
    pub failures: Vec<FailureRecord>,
}

impl FailureReport {
    /// 由失败记录构建报告，保持遇到顺序
    pub fn new(failures: Vec<FailureRecord>) -> Self {
        let files = failures.iter().map(|f| f.file_path.clone()).collect();
        Self { files, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let failures = vec![
            FailureRecord::new("src/a.js", &anyhow::anyhow!("请求超时")),
            FailureRecord::new("src/b.js", &anyhow::anyhow!("连接被拒绝")),
        ];

        let report = FailureReport::new(failures);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["files"], serde_json::json!(["src/a.js", "src/b.js"]));
        assert_eq!(value["failures"][0]["filePath"], "src/a.js");
        assert_eq!(value["failures"][1]["error"], "连接被拒绝");
    }

    #[test]
    fn test_record_keeps_error_chain() {
        let error = anyhow::anyhow!("根因").context("外层");
        let record = FailureRecord::new("src/a.js", &error);
        assert!(record.error.contains("外层"));
        assert!(record.error.contains("根因"));
    }
}
