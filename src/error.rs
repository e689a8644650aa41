//! # 统一错误处理模块
//!
//! 定义 heic2jpg 的所有错误类型，使用 `thiserror` 派生。
//!
//! 错误分为两类：
//! - 前置条件错误（输入目录缺失、编解码能力不可用、质量参数非法）：致命，批处理不会开始
//! - 单文件错误（读取、解码、编码、写入、路径）：由 `batch::runner` 隔离并计数
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 依赖 `codec::CodecError` 作为解码/编码错误源

use crate::codec::CodecError;
use thiserror::Error;

/// heic2jpg 统一错误类型
#[derive(Error, Debug)]
pub enum HeicError {
    // ─────────────────────────────────────────────────────────────
    // 前置条件错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Input path is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Codec '{codec}' is not available in this build (enable the '{feature}' feature)")]
    CodecUnavailable {
        codec: &'static str,
        feature: &'static str,
    },

    #[error("Invalid JPEG quality: {0} (expected 1-100)")]
    InvalidQuality(u8),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    CreateDirError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path '{path}' is not under input root '{root}'")]
    PathOutsideRoot { path: String, root: String },

    // ─────────────────────────────────────────────────────────────
    // 编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("{path}: {source}")]
    Codec {
        path: String,
        #[source]
        source: CodecError,
    },

    // ─────────────────────────────────────────────────────────────
    // 报告错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl HeicError {
    /// 是否为前置条件错误（批处理开始前即终止）
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            HeicError::DirectoryNotFound { .. }
                | HeicError::NotADirectory { .. }
                | HeicError::CodecUnavailable { .. }
                | HeicError::InvalidQuality(_)
        )
    }

    /// 进程退出码：前置条件失败为 2，其余致命错误为 1
    pub fn exit_code(&self) -> i32 {
        if self.is_precondition() {
            2
        } else {
            1
        }
    }

    /// 完整错误链（`a: b: c`），用于单文件失败原因的展示
    pub fn chain(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let text = err.to_string();
            if !msg.contains(&text) {
                msg.push_str(": ");
                msg.push_str(&text);
            }
            source = std::error::Error::source(err);
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HeicError>;
