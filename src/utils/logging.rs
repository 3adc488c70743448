//! # 日志初始化
//!
//! 基于 `tracing-subscriber` 的 fmt 订阅者。日志写到 stderr，
//! stdout 只留给命令结果（JSON 输出可直接被管道消费）。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/mod.rs` 的 LogLevel

use crate::cli::LogLevel;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// 安装全局日志订阅者
pub fn init(level: LogLevel) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
