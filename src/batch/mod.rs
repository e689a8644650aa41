//! # 批量处理模块
//!
//! 提供 HEIC 批量转换能力。
//!
//! ## 功能
//! - 递归收集匹配文件列表
//! - 输入目录结构镜像到输出目录
//! - 顺序处理、单文件错误隔离
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod converter;
pub mod mirror;
pub mod runner;

pub use collector::FileCollector;
pub use converter::BatchConverter;
pub use runner::{BatchResult, BatchRunner};
