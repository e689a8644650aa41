//! # 数据模型模块
//!
//! 定义源文件与单文件转换结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `utils/report.rs` 使用
//! - 子模块: conversion

pub mod conversion;

pub use conversion::{ConversionFailure, ConversionResult, ConversionStatus, SourceFile};
