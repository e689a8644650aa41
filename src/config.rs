//! # 转换配置
//!
//! 批处理入口接收显式的 `ConvertConfig {input_root, output_root, quality}`，
//! 默认值由下面的常量给出。
//!
//! ## 依赖关系
//! - 被 `cli/convert.rs`（默认值）, `commands/convert.rs`, `batch/converter.rs` 使用

use crate::codec;
use crate::error::Result;

use std::path::{Path, PathBuf};

/// HEIC 文件所在的父目录（子目录也会被搜索）
pub const INPUT_DIR: &str = "./picture";

/// JPG 输出目录（保持输入的目录结构）
pub const OUTPUT_DIR: &str = "./output_jpg_files";

/// JPG 保存质量 (1-100)
pub const JPG_QUALITY: u8 = 95;

/// 单次批处理的配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    input_root: PathBuf,
    output_root: PathBuf,
    quality: u8,
}

impl ConvertConfig {
    /// 创建配置，质量必须在 1-100 之间
    pub fn new(
        input_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        quality: u8,
    ) -> Result<Self> {
        Ok(Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            quality: codec::check_quality(quality)?,
        })
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from(INPUT_DIR),
            output_root: PathBuf::from(OUTPUT_DIR),
            quality: JPG_QUALITY,
        }
    }
}
