//! # 文件收集器
//!
//! 递归收集输入目录下的 `.heic` 文件（扩展名大小写不敏感）。
//!
//! ## 功能
//! - 递归目录搜索，指向文件的符号链接同样收集
//! - 按路径排序，保证同一次运行内顺序稳定
//!
//! ## 依赖关系
//! - 被 `batch/converter.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::models::SourceFile;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 源文件扩展名
const HEIC_EXTENSION: &str = "heic";

/// 文件收集器
pub struct FileCollector {
    /// 输入根目录
    input: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<SourceFile> {
        if !self.input.is_dir() {
            return vec![];
        }

        // `path().is_file()` 会跟随符号链接；目录链接不会被展开
        let mut files: Vec<SourceFile> = WalkDir::new(&self.input)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| Self::matches_extension(e.path()))
            .map(|e| SourceFile::new(e.into_path()))
            .collect();

        files.sort();
        files
    }

    /// 检查扩展名是否为 heic（大小写不敏感）
    fn matches_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case(HEIC_EXTENSION))
    }
}
