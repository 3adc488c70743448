//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `list`: 列出计算单元及其输入参数
//! - `eval`: 对单个单元求值
//! - `session`: 响应式会话（逐行读取输入变化）
//! - `export`: 渲染图表或导出数据
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: list, eval, session, export

pub mod eval;
pub mod export;
pub mod list;
pub mod session;

use fluidboard::error::{FluidError, Result};

use clap::{Parser, Subcommand, ValueEnum};

/// fluidboard - 流体力学教学仪表盘
#[derive(Parser)]
#[command(name = "fluidboard")]
#[command(version)]
#[command(about = "An interactive fluid mechanics calculator with reactive parameter bindings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity
    #[arg(
        long,
        global = true,
        value_enum,
        env = "FLUIDBOARD_LOG",
        default_value_t = LogLevel::Warn
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List calculation units and their input parameters
    List(list::ListArgs),

    /// Evaluate one calculation unit and print its outputs
    Eval(eval::EvalArgs),

    /// Run a reactive session driven by parameter changes
    Session(session::SessionArgs),

    /// Render charts or export unit outputs to files
    Export(export::ExportArgs),
}

/// 日志级别
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// 解析 `id=value` 形式的参数覆盖
pub fn parse_assignment(s: &str) -> Result<(String, f64)> {
    let (id, value) = s.split_once('=').ok_or_else(|| {
        FluidError::InvalidArgument(format!("expected <param>=<value>, got '{}'", s))
    })?;

    let id = id.trim();
    if id.is_empty() {
        return Err(FluidError::InvalidArgument(format!(
            "missing parameter name in '{}'",
            s
        )));
    }

    let value: f64 = value.trim().parse().map_err(|_| {
        FluidError::InvalidArgument(format!("'{}' is not a number (in '{}')", value.trim(), s))
    })?;

    Ok((id.to_string(), value))
}

/// clap 的 value_parser 适配
pub(crate) fn assignment_parser(s: &str) -> std::result::Result<(String, f64), String> {
    parse_assignment(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("pressure-f=250").unwrap(),
            ("pressure-f".to_string(), 250.0)
        );
        assert_eq!(
            parse_assignment(" torricelli-g = 1.62 ").unwrap(),
            ("torricelli-g".to_string(), 1.62)
        );
        assert!(parse_assignment("pressure-f").is_err());
        assert!(parse_assignment("=3").is_err());
        assert!(parse_assignment("pressure-f=abc").is_err());
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["fluidboard", "list", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_export_overrides() {
        let cli = Cli::try_parse_from([
            "fluidboard",
            "export",
            "all",
            "-o",
            "out",
            "-f",
            "csv",
            "-s",
            "pressure-force=200",
            "--set",
            "torricelli-g=1.62",
        ])
        .unwrap();

        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, export::ExportFormat::Csv);
        assert_eq!(
            args.overrides,
            vec![
                ("pressure-force".to_string(), 200.0),
                ("torricelli-g".to_string(), 1.62)
            ]
        );
        assert_eq!(args.height, None);
    }
}
