//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/`, `main.rs` 使用
//! - 使用 `colored` crate

use crate::models::{ConversionFailure, SourceFile};

use colored::Colorize;
use std::path::Path;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印单文件转换成功：`[3/10] [OK] a.heic -> a.jpg`
pub fn print_progress_ok(index: usize, total: usize, source: &SourceFile, target: &Path) {
    let target_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "{} {} {} {} {}",
        format!("[{}/{}]", index, total).dimmed(),
        "[OK]".green().bold(),
        source.file_name().dimmed(),
        "->".cyan(),
        target_name
    );
}

/// 打印单文件转换失败：`[4/10] [FAIL] b.heic (reason)`
pub fn print_progress_failed(index: usize, total: usize, failure: &ConversionFailure) {
    println!(
        "{} {} {} ({})",
        format!("[{}/{}]", index, total).dimmed(),
        "[FAIL]".red().bold(),
        failure.source.file_name(),
        failure.reason().red()
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
