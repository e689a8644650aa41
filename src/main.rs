//! # heic2jpg - HEIC 批量转 JPG 工具
//!
//! 递归扫描输入目录中的 `.heic` / `.HEIC` 文件，转换为 JPG 并按原目录结构
//! 保存到输出目录。单个文件失败不会中断批处理。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (收集、路径镜像、顺序执行、转换器)
//!   │     ├── codec/    (HEIC 解码、JPEG 编码)
//!   │     └── models/   (数据模型)
//!   ├── config.rs   (默认配置)
//!   ├── utils/      (输出、进度条、报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod config;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e.chain());
        std::process::exit(e.exit_code());
    }
}
