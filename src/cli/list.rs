//! # list 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show the parameters of this unit
    #[arg(short, long)]
    pub unit: Option<String>,
}
