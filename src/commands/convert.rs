//! # convert 命令实现
//!
//! 递归转换 HEIC 为 JPG。
//!
//! ## 功能
//! - 校验配置与编解码能力（致命错误在任何转换之前返回）
//! - 执行批量转换并输出逐文件进度
//! - 输出汇总、失败表格，可选写入 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/converter.rs`, `codec/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::{BatchConverter, BatchResult};
use crate::cli::convert::ConvertArgs;
use crate::codec::{self, RasterDecoder};
use crate::error::Result;
use crate::utils::{output, report};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    execute_with(args, codec::default_decoder)
}

/// 使用给定的解码器加载函数执行转换
///
/// 配置与解码器都在任何文件系统写入之前确定。
fn execute_with<F>(args: ConvertArgs, load_decoder: F) -> Result<()>
where
    F: FnOnce() -> Result<Box<dyn RasterDecoder>>,
{
    let config = args.to_config()?;
    let decoder = load_decoder()?;

    output::print_header("Converting HEIC to JPG");
    output::print_info(&format!("Scanning: {}", config.input_root().display()));
    output::print_info(&format!("Output:   {}", config.output_root().display()));
    output::print_info(&format!("Quality:  {}", config.quality()));
    output::print_separator();

    let converter = BatchConverter::new(config, decoder).show_progress(!args.no_progress);
    let result = converter.run()?;

    print_summary(&result);

    if let Some(ref path) = args.report {
        report::write_csv(&result, path)?;
        output::print_success(&format!("Report saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印汇总
fn print_summary(result: &BatchResult) {
    if result.total() == 0 {
        return;
    }

    output::print_separator();

    if let Some(table) = report::failure_table(result) {
        output::print_warning(&format!("{} file(s) failed:", result.failed));
        println!("{}", table);
    }

    let (success, failed) = result.counts();
    output::print_done(&format!(
        "Conversion finished: {} succeeded, {} failed",
        success, failed
    ));
}
