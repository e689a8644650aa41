//! # 转换报告
//!
//! - 终端失败表格（`tabled`）
//! - 可选的逐文件 CSV 报告：`status,source,target,error`
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchResult
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::batch::BatchResult;
use crate::error::{HeicError, Result};
use crate::models::{ConversionResult, ConversionStatus};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 失败表格行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// CSV 报告行
#[derive(Debug, Serialize)]
struct ReportRow {
    status: ConversionStatus,
    source: String,
    target: String,
    error: String,
}

impl From<&ConversionResult> for ReportRow {
    fn from(result: &ConversionResult) -> Self {
        let error = match result {
            ConversionResult::Failure(failure) => failure.reason(),
            ConversionResult::Success { .. } => String::new(),
        };
        ReportRow {
            status: result.status(),
            source: result.source().path().display().to_string(),
            target: result
                .target()
                .map(|t| t.display().to_string())
                .unwrap_or_default(),
            error,
        }
    }
}

/// 渲染失败表格，无失败时返回 `None`
pub fn failure_table(result: &BatchResult) -> Option<String> {
    let rows: Vec<FailureRow> = result
        .failures()
        .enumerate()
        .map(|(i, f)| FailureRow {
            index: i + 1,
            file: f.source.path().display().to_string(),
            reason: f.reason(),
        })
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(Table::new(&rows).to_string())
    }
}

/// 保存逐文件结果到 CSV
pub fn write_csv(result: &BatchResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for r in &result.results {
        wtr.serialize(ReportRow::from(r))?;
    }

    wtr.flush().map_err(|e| HeicError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
