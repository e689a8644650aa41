//! # 输出路径镜像
//!
//! `input_root/sub/a.HEIC` -> `output_root/sub/a.jpg`
//!
//! 相对路径保持不变，扩展名统一替换为小写 `.jpg`。
//!
//! ## 依赖关系
//! - 被 `batch/converter.rs` 调用

use crate::error::{HeicError, Result};

use std::path::{Path, PathBuf};

/// 输出文件扩展名
pub const OUTPUT_EXTENSION: &str = "jpg";

/// 计算源文件在输出目录下的镜像路径
pub fn output_path(input_root: &Path, output_root: &Path, source: &Path) -> Result<PathBuf> {
    let relative = source
        .strip_prefix(input_root)
        .map_err(|_| HeicError::PathOutsideRoot {
            path: source.display().to_string(),
            root: input_root.display().to_string(),
        })?;

    if relative.file_name().is_none() {
        return Err(HeicError::PathOutsideRoot {
            path: source.display().to_string(),
            root: input_root.display().to_string(),
        });
    }

    Ok(output_root.join(relative).with_extension(OUTPUT_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_uppercase_extension() {
        let out = output_path(
            Path::new("picture"),
            Path::new("output_jpg_files"),
            Path::new("picture/subdir/a.HEIC"),
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("output_jpg_files/subdir/a.jpg"));
    }

    #[test]
    fn test_top_level_file() {
        let out = output_path(Path::new("/in"), Path::new("/out"), Path::new("/in/x.heic")).unwrap();
        assert_eq!(out, PathBuf::from("/out/x.jpg"));
    }

    #[test]
    fn test_only_last_extension_replaced() {
        let out = output_path(
            Path::new("in"),
            Path::new("out"),
            Path::new("in/2024.01.05/IMG.edit.heic"),
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("out/2024.01.05/IMG.edit.jpg"));
    }

    #[test]
    fn test_path_outside_root() {
        let err = output_path(Path::new("in"), Path::new("out"), Path::new("elsewhere/a.heic"))
            .unwrap_err();
        assert!(matches!(err, HeicError::PathOutsideRoot { .. }));
    }

    #[test]
    fn test_root_itself_is_rejected() {
        assert!(output_path(Path::new("in"), Path::new("out"), Path::new("in")).is_err());
    }
}
