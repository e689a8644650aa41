//! # 批量执行器
//!
//! 顺序执行单文件处理任务，并隔离每个文件的错误。
//!
//! ## 功能
//! - 单线程顺序处理，同一时间只处理一个文件
//! - 进度条 + 逐文件 `[i/N]` 状态输出
//! - 单文件失败不会中断批处理，错误收集到汇总结果中
//!
//! ## 依赖关系
//! - 被 `batch/converter.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条, `utils/output.rs` 输出状态

use crate::error::Result;
use crate::models::{ConversionFailure, ConversionResult, SourceFile};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::PathBuf;

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 逐文件结果（按处理顺序）
    pub results: Vec<ConversionResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ConversionResult) {
        if result.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// `(成功数, 失败数)`
    pub fn counts(&self) -> (usize, usize) {
        (self.success, self.failed)
    }

    /// 所有失败项
    pub fn failures(&self) -> impl Iterator<Item = &ConversionFailure> {
        self.results.iter().filter_map(|r| match r {
            ConversionResult::Failure(failure) => Some(failure),
            ConversionResult::Success { .. } => None,
        })
    }
}

/// 批量执行器
#[derive(Debug, Default)]
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理文件列表
    ///
    /// `processor` 返回输出路径；返回 `Err` 时记为失败并继续下一个文件。
    pub fn run<F>(&self, files: Vec<SourceFile>, mut processor: F) -> BatchResult
    where
        F: FnMut(&SourceFile) -> Result<PathBuf>,
    {
        let total = files.len();
        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Converting")
        } else {
            ProgressBar::hidden()
        };

        let mut batch_result = BatchResult::default();

        for (i, source) in files.into_iter().enumerate() {
            let result = match processor(&source) {
                Ok(target) => {
                    pb.suspend(|| output::print_progress_ok(i + 1, total, &source, &target));
                    ConversionResult::Success { source, target }
                }
                Err(error) => {
                    let failure = ConversionFailure { source, error };
                    pb.suspend(|| output::print_progress_failed(i + 1, total, &failure));
                    ConversionResult::Failure(failure)
                }
            };

            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}
