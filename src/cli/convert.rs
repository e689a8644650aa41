//! # convert 参数 CLI 定义
//!
//! 递归转换 HEIC 文件为 JPG，保持目录结构。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 默认值来自 `config.rs`
//! - 参数传递给 `commands/convert.rs`

use crate::config::{ConvertConfig, INPUT_DIR, JPG_QUALITY, OUTPUT_DIR};
use crate::error::Result;

use clap::Args;
use std::path::PathBuf;

/// convert 参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory searched recursively for .heic/.HEIC files
    #[arg(short, long, env = "HEIC2JPG_INPUT", default_value = INPUT_DIR)]
    pub input: PathBuf,

    /// Output directory; the input folder structure is mirrored here
    #[arg(short, long, env = "HEIC2JPG_OUTPUT", default_value = OUTPUT_DIR)]
    pub output: PathBuf,

    /// JPEG quality (1-100)
    #[arg(
        short,
        long,
        env = "HEIC2JPG_QUALITY",
        default_value_t = JPG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Write a per-file CSV report (status, source, target, error)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide the progress bar (per-file status lines are still printed)
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl ConvertArgs {
    /// 构建批处理配置
    pub fn to_config(&self) -> Result<ConvertConfig> {
        ConvertConfig::new(self.input.clone(), self.output.clone(), self.quality)
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_defaults_match_constants() {
        let cli = Cli::try_parse_from(["heic2jpg"]).unwrap();
        let config = cli.convert.to_config().unwrap();
        assert_eq!(config.input_root(), Path::new("./picture"));
        assert_eq!(config.output_root(), Path::new("./output_jpg_files"));
        assert_eq!(config.quality(), 95);
        assert!(cli.convert.report.is_none());
        assert!(!cli.convert.no_progress);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "heic2jpg", "-i", "photos", "-o", "jpgs", "-q", "80", "--report", "r.csv",
        ])
        .unwrap();
        let config = cli.convert.to_config().unwrap();
        assert_eq!(config.input_root(), Path::new("photos"));
        assert_eq!(config.output_root(), Path::new("jpgs"));
        assert_eq!(config.quality(), 80);
        assert_eq!(cli.convert.report.as_deref(), Some(Path::new("r.csv")));
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["heic2jpg", "-q", "0"]).is_err());
        assert!(Cli::try_parse_from(["heic2jpg", "-q", "101"]).is_err());
    }
}
