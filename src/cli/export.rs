//! # export 子命令 CLI 定义
//!
//! 渲染单元图表为 PNG/SVG，或导出 CSV / JSON 数据。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 导出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// PNG image of each chart
    Png,
    /// SVG image of each chart
    Svg,
    /// Chart data points as CSV
    Csv,
    /// Complete output bundle as JSON
    Json,
}

impl ExportFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Calculation unit to export, or `all`
    pub unit: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Png)]
    pub format: ExportFormat,

    /// Override a parameter before evaluating, e.g. --set hydrostatic-h=40
    #[arg(short = 's', long = "set", value_name = "PARAM=VALUE", value_parser = super::assignment_parser)]
    pub overrides: Vec<(String, f64)>,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels (default: twice the chart's layout height)
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
