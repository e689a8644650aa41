//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//! 不带任何参数运行时使用 `config.rs` 中的默认常量。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// heic2jpg - 递归将 HEIC 转换为 JPG
#[derive(Parser, Debug)]
#[command(name = "heic2jpg")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Recursively convert HEIC images into a mirrored tree of JPEG files",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}
