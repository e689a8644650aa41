//! # HEIC -> JPG 批量转换器
//!
//! 对外契约：`BatchConverter::new(config, decoder).run()` -> `(成功数, 失败数)`。
//!
//! ## 流程
//! 1. 检查输入目录（不存在即致命错误，不写任何文件）
//! 2. 创建输出目录
//! 3. 递归收集 `*.heic` / `*.HEIC`
//! 4. 逐文件：镜像路径 -> 创建父目录 -> 解码 -> 去 alpha -> JPEG 编码 -> 覆盖写入
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/mirror.rs`, `batch/runner.rs`
//! - 使用 `codec/` 提供的解码/编码能力

use super::{mirror, BatchResult, BatchRunner, FileCollector};
use crate::codec::{self, RasterDecoder};
use crate::config::ConvertConfig;
use crate::error::{HeicError, Result};
use crate::models::SourceFile;
use crate::utils::output;

use std::fs;
use std::path::PathBuf;

/// 批量转换器
pub struct BatchConverter {
    config: ConvertConfig,
    decoder: Box<dyn RasterDecoder>,
    show_progress: bool,
}

impl BatchConverter {
    pub fn new(config: ConvertConfig, decoder: Box<dyn RasterDecoder>) -> Self {
        Self {
            config,
            decoder,
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 执行批量转换
    ///
    /// 只有前置条件（输入目录、输出目录创建）失败时返回 `Err`；
    /// 单文件失败记录在 [`BatchResult`] 中。
    pub fn run(&self) -> Result<BatchResult> {
        let input = self.config.input_root();
        let output_root = self.config.output_root();

        if !input.exists() {
            return Err(HeicError::DirectoryNotFound {
                path: input.display().to_string(),
            });
        }
        if !input.is_dir() {
            return Err(HeicError::NotADirectory {
                path: input.display().to_string(),
            });
        }

        fs::create_dir_all(output_root).map_err(|e| HeicError::CreateDirError {
            path: output_root.display().to_string(),
            source: e,
        })?;

        let files = FileCollector::new(input).collect();

        if files.is_empty() {
            output::print_warning(&format!(
                "No HEIC files found under {}",
                input.display()
            ));
            return Ok(BatchResult::default());
        }

        output::print_info(&format!(
            "Found {} HEIC file(s), decoding with {}",
            files.len(),
            self.decoder.name()
        ));

        let runner = BatchRunner::new().show_progress(self.show_progress);
        Ok(runner.run(files, |source| self.convert_file(source)))
    }

    /// 转换单个文件，返回写入的 JPG 路径
    pub fn convert_file(&self, source: &SourceFile) -> Result<PathBuf> {
        let path = source.path();
        let target = mirror::output_path(self.config.input_root(), self.config.output_root(), path)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| HeicError::CreateDirError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let bytes = fs::read(path).map_err(|e| HeicError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let decoded = self.decoder.decode(&bytes).map_err(|e| HeicError::Codec {
            path: path.display().to_string(),
            source: e,
        })?;

        let rgb = codec::flatten_to_rgb(decoded);
        let jpeg = codec::encode_jpeg(&rgb, self.config.quality()).map_err(|e| {
            HeicError::Codec {
                path: path.display().to_string(),
                source: e,
            }
        })?;

        fs::write(&target, jpeg).map_err(|e| HeicError::FileWriteError {
            path: target.display().to_string(),
            source: e,
        })?;

        Ok(target)
    }
}
