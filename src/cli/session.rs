//! # session 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/session.rs`

use clap::Args;
use std::path::PathBuf;

/// session 子命令参数
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Read change events from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Skip the initial render of every unit
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
