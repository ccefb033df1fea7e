//! 候选文件模型与路径变换
//!
//! 编译器解析出的文件列表在这里被分类为「已是 TypeScript」和
//! 「待转换的 JavaScript」。声明文件 / 输出文件的路径变换集中在此处，
//! 并在边界处校验扩展名。

use std::path::{Path, PathBuf};

use crate::error::PathError;

/// 源文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// 已经是 TypeScript
    TypeScript,
    /// 待转换的 JavaScript
    JavaScript,
}

/// 一个参与编译的源文件（相对项目根目录）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub rel_path: String,
    pub kind: SourceKind,
}

impl CandidateFile {
    /// 将编译器解析出的文件列表分类
    ///
    /// 返回 (已是 TypeScript 的文件, 待转换的 JavaScript 文件)。
    /// `.js` 文件可再经目录白名单过滤。
    pub fn classify(
        files: &[String],
        directories_to_convert: Option<&[String]>,
    ) -> (Vec<CandidateFile>, Vec<CandidateFile>) {
        let typed = files
            .iter()
            .filter(|f| f.ends_with(".ts"))
            .map(|f| CandidateFile {
                rel_path: f.clone(),
                kind: SourceKind::TypeScript,
            })
            .collect();

        let candidates = files
            .iter()
            .filter(|f| {
                if !f.ends_with(".js") {
                    return false;
                }
                match directories_to_convert {
                    Some(directories) => directories.iter().any(|d| f.starts_with(d.as_str())),
                    None => true,
                }
            })
            .map(|f| CandidateFile {
                rel_path: f.clone(),
                kind: SourceKind::JavaScript,
            })
            .collect();

        (typed, candidates)
    }
}

/// 计算与源文件配对的声明文件路径
///
/// 输入必须以 `.ts` 或 `.js` 结尾；输出为同一目录下同名的 `.d.ts` 文件。
pub fn declaration_path(source: &Path) -> Result<PathBuf, PathError> {
    let name = file_name(source, ".ts/.js")?;
    let stem = name
        .strip_suffix(".ts")
        .or_else(|| name.strip_suffix(".js"))
        .ok_or_else(|| unexpected_extension(source, ".ts/.js"))?;
    Ok(source.with_file_name(format!("{}.d.ts", stem)))
}

/// 计算转换输出的 TypeScript 文件路径
///
/// 输入必须以 `.js` 结尾；输出为同一目录下同名的 `.ts` 文件。
pub fn typed_output_path(source: &Path) -> Result<PathBuf, PathError> {
    let name = file_name(source, ".js")?;
    let stem = name
        .strip_suffix(".js")
        .ok_or_else(|| unexpected_extension(source, ".js"))?;
    Ok(source.with_file_name(format!("{}.ts", stem)))
}

fn file_name<'a>(source: &'a Path, expected: &'static str) -> Result<&'a str, PathError> {
    source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| unexpected_extension(source, expected))
}

fn unexpected_extension(source: &Path, expected: &'static str) -> PathError {
    PathError::UnexpectedExtension {
        expected,
        path: source.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<String> {
        vec![
            "src/index.ts".to_string(),
            "src/legacy/util.js".to_string(),
            "src/models/user.js".to_string(),
            "src/types.d.ts".to_string(),
            "README.md".to_string(),
        ]
    }

    #[test]
    fn test_classify_without_directory_filter() {
        let (typed, candidates) = CandidateFile::classify(&files(), None);

        assert_eq!(
            typed.iter().map(|f| f.rel_path.as_str()).collect::<Vec<_>>(),
            vec!["src/index.ts", "src/types.d.ts"]
        );
        assert_eq!(
            candidates
                .iter()
                .map(|f| f.rel_path.as_str())
                .collect::<Vec<_>>(),
            vec!["src/legacy/util.js", "src/models/user.js"]
        );
        assert!(candidates.iter().all(|f| f.kind == SourceKind::JavaScript));
    }

    #[test]
    fn test_classify_with_directory_filter() {
        let directories = vec!["src/legacy".to_string()];
        let (_, candidates) = CandidateFile::classify(&files(), Some(&directories));

        assert_eq!(
            candidates
                .iter()
                .map(|f| f.rel_path.as_str())
                .collect::<Vec<_>>(),
            vec!["src/legacy/util.js"]
        );
    }

    #[test]
    fn test_declaration_path_for_js_and_ts() {
        assert_eq!(
            declaration_path(Path::new("/p/src/a.js")).unwrap(),
            PathBuf::from("/p/src/a.d.ts")
        );
        assert_eq!(
            declaration_path(Path::new("/p/src/a.ts")).unwrap(),
            PathBuf::from("/p/src/a.d.ts")
        );
        // 多段文件名只去掉最后一个扩展名
        assert_eq!(
            declaration_path(Path::new("/p/a.spec.js")).unwrap(),
            PathBuf::from("/p/a.spec.d.ts")
        );
    }

    #[test]
    fn test_declaration_path_rejects_other_extensions() {
        assert!(declaration_path(Path::new("/p/readme.md")).is_err());
    }

    #[test]
    fn test_typed_output_path() {
        assert_eq!(
            typed_output_path(Path::new("/p/src/a.js")).unwrap(),
            PathBuf::from("/p/src/a.ts")
        );
        assert!(typed_output_path(Path::new("/p/src/a.ts")).is_err());
    }
}
