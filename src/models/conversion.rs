//! # 转换数据模型
//!
//! - `SourceFile`: 扫描得到的 HEIC 源文件路径，发现后不可变
//! - `ConversionResult`: 单文件转换结果，成功或带原因的失败
//!
//! 所有实体仅存活于一次批处理运行期间。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `batch/runner.rs` 使用
//! - 被 `utils/report.rs` 使用

use crate::error::HeicError;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// HEIC 源文件
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件名（用于进度输出）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// 转换状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Success,
    Failure,
}

/// 单文件转换失败
#[derive(Debug)]
pub struct ConversionFailure {
    pub source: SourceFile,
    pub error: HeicError,
}

impl ConversionFailure {
    /// 失败原因（含完整错误链）
    pub fn reason(&self) -> String {
        self.error.chain()
    }
}

/// 单文件转换结果
#[derive(Debug)]
pub enum ConversionResult {
    Success { source: SourceFile, target: PathBuf },
    Failure(ConversionFailure),
}

impl ConversionResult {
    pub fn status(&self) -> ConversionStatus {
        match self {
            ConversionResult::Success { .. } => ConversionStatus::Success,
            ConversionResult::Failure(_) => ConversionStatus::Failure,
        }
    }

    pub fn source(&self) -> &SourceFile {
        match self {
            ConversionResult::Success { source, .. } => source,
            ConversionResult::Failure(failure) => &failure.source,
        }
    }

    pub fn target(&self) -> Option<&Path> {
        match self {
            ConversionResult::Success { target, .. } => Some(target),
            ConversionResult::Failure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }
}
